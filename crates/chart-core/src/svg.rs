// File: crates/chart-core/src/svg.rs
// Summary: Vector backend. Writes a ChartLayout as SVG markup, with hover tooltips driven by
// CSS opacity transitions, and wraps it in a hosting HTML page.

use std::fmt::Write;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::chart::ChartLayout;
use crate::geometry::Point;
use crate::tooltip::{panel_position, TooltipContent, HIDE, SHOW};

/// Id of the arrowhead marker definition.
pub const ARROWHEAD_ID: &str = "arrowhead";
/// Id of the element hosting the chart in the HTML page.
pub const MOUNT_ID: &str = "chart";

const FONT_FAMILY: &str = "sans-serif";
const AXIS_FONT_SIZE: f64 = 10.0;
const TOOLTIP_FONT_SIZE: f64 = 12.0;
const TOOLTIP_LINE_HEIGHT: f64 = 14.0;
const TOOLTIP_PADDING: f64 = 6.0;
// Rough advance of one character at TOOLTIP_FONT_SIZE.
const TOOLTIP_CHAR_WIDTH: f64 = 6.6;
// CSS equivalent of cubic in-out easing.
const EASE_CUBIC_IN_OUT: &str = "cubic-bezier(0.645, 0.045, 0.355, 1)";

/// Standalone SVG document.
pub fn render_svg(layout: &ChartLayout) -> String {
    let mut svg = String::new();
    write_svg(&mut svg, layout, "");
    svg
}

/// HTML page with the chart mounted under `#chart`.
pub fn render_html(layout: &ChartLayout) -> String {
    let theme = &layout.theme;
    let mut html = String::new();
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang='en'>");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "  <meta charset='utf-8'>");
    let _ = writeln!(html, "  <title>Barcelona wave conditions</title>");
    let _ = writeln!(html, "  <style>");
    let _ = writeln!(
        html,
        "    body {{ margin: 0; padding: 16px; background: {}; font-family: {FONT_FAMILY}; }}",
        theme.background
    );
    let _ = writeln!(html, "    #{MOUNT_ID} {{ position: relative; }}");
    let _ = writeln!(html, "  </style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "  <div id='{MOUNT_ID}'>");
    write_svg(&mut html, layout, "    ");
    let _ = writeln!(html, "  </div>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}

fn write_svg(out: &mut String, layout: &ChartLayout, indent: &str) {
    let theme = &layout.theme;
    let (w, h) = (layout.width, layout.height);
    let _ = writeln!(
        out,
        "{indent}<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>"
    );
    write_style(out, layout, indent);
    let _ = writeln!(out, "{indent}  <rect width='{w}' height='{h}' fill='{}'/>", theme.background);

    // Arrowhead glyph shared by every direction arrow.
    let _ = writeln!(out, "{indent}  <defs>");
    let _ = writeln!(
        out,
        "{indent}    <marker id='{ARROWHEAD_ID}' viewBox='0 0 10 10' refX='5' refY='5' markerWidth='6' markerHeight='6' orient='auto-start-reverse'>"
    );
    let _ = writeln!(out, "{indent}      <path d='M 0 0 L 10 5 L 0 10 z' fill='{}'/>", theme.arrow);
    let _ = writeln!(out, "{indent}    </marker>");
    let _ = writeln!(out, "{indent}  </defs>");

    let _ = writeln!(
        out,
        "{indent}  <g transform='translate({},{})'>",
        num(layout.content.left),
        num(layout.content.top)
    );
    let inner = format!("{indent}    ");
    write_axis(out, layout, &layout.x_axis, &inner);
    write_axis(out, layout, &layout.y_axis, &inner);

    let _ = writeln!(
        out,
        "{inner}<path class='line' d='{}' fill='none' stroke='{}' stroke-width='{}'/>",
        path_data(&layout.line),
        theme.line_stroke,
        num(layout.line_width)
    );

    for (i, m) in layout.markers.iter().enumerate() {
        let _ = writeln!(
            out,
            "{inner}<circle class='dot' id='dot-{i}' cx='{}' cy='{}' r='{}' fill='{}'/>",
            num(m.center.x),
            num(m.center.y),
            num(m.radius),
            m.fill
        );
    }

    for a in &layout.arrows {
        let _ = writeln!(
            out,
            "{inner}<line class='arrow' x1='{}' y1='{}' x2='{}' y2='{}' stroke='{}' stroke-width='2' marker-end='url(#{ARROWHEAD_ID})'/>",
            num(a.start.x),
            num(a.start.y),
            num(a.end.x),
            num(a.end.y),
            theme.arrow
        );
    }

    // Tooltips last so they paint above every mark.
    for (i, m) in layout.markers.iter().enumerate() {
        write_tooltip(out, layout, i, m.center, &m.tooltip, &inner);
    }

    let _ = writeln!(out, "{indent}  </g>");
    let _ = writeln!(out, "{indent}</svg>");
}

fn write_style(out: &mut String, layout: &ChartLayout, indent: &str) {
    let theme = &layout.theme;
    let _ = writeln!(out, "{indent}  <style>");
    let _ = writeln!(
        out,
        "{indent}    .tooltip {{ opacity: {}; pointer-events: none; transition: opacity {}ms {EASE_CUBIC_IN_OUT}; }}",
        HIDE.target, HIDE.duration_ms
    );
    let _ = writeln!(
        out,
        "{indent}    .tooltip rect {{ fill: {}; stroke: {}; }}",
        theme.tooltip_fill, theme.tooltip_border
    );
    let _ = writeln!(
        out,
        "{indent}    .tooltip text {{ fill: {}; font: {}px {FONT_FAMILY}; }}",
        theme.tooltip_text,
        num(TOOLTIP_FONT_SIZE)
    );
    if !layout.markers.is_empty() {
        let selectors: Vec<String> = (0..layout.markers.len())
            .map(|i| format!("svg:has(#dot-{i}:hover) #tooltip-{i}"))
            .collect();
        let _ = writeln!(
            out,
            "{indent}    {} {{ opacity: {}; transition-duration: {}ms; }}",
            selectors.join(", "),
            SHOW.target,
            SHOW.duration_ms
        );
    }
    let _ = writeln!(out, "{indent}  </style>");
}

fn write_axis(out: &mut String, layout: &ChartLayout, axis: &Axis, indent: &str) {
    let theme = &layout.theme;
    let (s0, s1) = axis.span;
    match axis.orient {
        Orient::Bottom => {
            let _ = writeln!(
                out,
                "{indent}<g class='{}' transform='translate(0,{})' fill='none' font-size='{}' font-family='{FONT_FAMILY}' text-anchor='middle'>",
                axis.class,
                num(layout.content.height()),
                num(AXIS_FONT_SIZE)
            );
            let _ = writeln!(
                out,
                "{indent}  <path class='domain' stroke='{}' d='M{},{}V0H{}V{}'/>",
                theme.axis_line,
                num(s0),
                num(TICK_SIZE),
                num(s1),
                num(TICK_SIZE)
            );
            for t in &axis.ticks {
                let _ = writeln!(out, "{indent}  <g class='tick' transform='translate({},0)'>", num(t.offset));
                let _ = writeln!(out, "{indent}    <line stroke='{}' y2='{}'/>", theme.axis_line, num(TICK_SIZE));
                if layout.draw_labels {
                    let _ = writeln!(
                        out,
                        "{indent}    <text fill='{}' y='{}' dy='0.71em'>{}</text>",
                        theme.axis_label,
                        num(TICK_SIZE + TICK_PADDING),
                        escape_text(&t.label)
                    );
                }
                let _ = writeln!(out, "{indent}  </g>");
            }
        }
        Orient::Left => {
            let _ = writeln!(
                out,
                "{indent}<g class='{}' fill='none' font-size='{}' font-family='{FONT_FAMILY}' text-anchor='end'>",
                axis.class,
                num(AXIS_FONT_SIZE)
            );
            let _ = writeln!(
                out,
                "{indent}  <path class='domain' stroke='{}' d='M{},{}H0V{}H{}'/>",
                theme.axis_line,
                num(-TICK_SIZE),
                num(s0),
                num(s1),
                num(-TICK_SIZE)
            );
            for t in &axis.ticks {
                let _ = writeln!(out, "{indent}  <g class='tick' transform='translate(0,{})'>", num(t.offset));
                let _ = writeln!(out, "{indent}    <line stroke='{}' x2='{}'/>", theme.axis_line, num(-TICK_SIZE));
                if layout.draw_labels {
                    let _ = writeln!(
                        out,
                        "{indent}    <text fill='{}' x='{}' dy='0.32em'>{}</text>",
                        theme.axis_label,
                        num(-(TICK_SIZE + TICK_PADDING)),
                        escape_text(&t.label)
                    );
                }
                let _ = writeln!(out, "{indent}  </g>");
            }
        }
    }
    let _ = writeln!(out, "{indent}</g>");
}

fn write_tooltip(
    out: &mut String,
    layout: &ChartLayout,
    index: usize,
    anchor: Point,
    content: &TooltipContent,
    indent: &str,
) {
    let lines = content.lines();
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    let w = longest * TOOLTIP_CHAR_WIDTH + 2.0 * TOOLTIP_PADDING;
    let h = lines.len() as f64 * TOOLTIP_LINE_HEIGHT + 2.0 * TOOLTIP_PADDING;
    let pos = fit_panel(layout, panel_position(anchor), w, h);

    let _ = writeln!(
        out,
        "{indent}<g class='tooltip' id='tooltip-{index}' transform='translate({},{})'>",
        num(pos.x),
        num(pos.y)
    );
    let _ = writeln!(out, "{indent}  <rect width='{}' height='{}' rx='8'/>", num(w), num(h));
    let _ = writeln!(out, "{indent}  <text y='{}'>", num(TOOLTIP_PADDING));
    for line in lines {
        let _ = writeln!(
            out,
            "{indent}    <tspan x='{}' dy='{}'>{}</tspan>",
            num(TOOLTIP_PADDING),
            num(TOOLTIP_LINE_HEIGHT),
            escape_text(line)
        );
    }
    let _ = writeln!(out, "{indent}  </text>");
    let _ = writeln!(out, "{indent}</g>");
}

/// Shift a panel of size `w`x`h` so it stays on the surface. Plot-space in, plot-space out.
fn fit_panel(layout: &ChartLayout, pos: Point, w: f64, h: f64) -> Point {
    let min_x = -layout.content.left;
    let min_y = -layout.content.top;
    let max_x = layout.width as f64 - layout.content.left - w;
    let max_y = layout.height as f64 - layout.content.top - h;
    Point::new(pos.x.min(max_x).max(min_x), pos.y.min(max_y).max(min_y))
}

/// SVG path data for a polyline: `M x,y L x,y ...`.
pub fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{},{}", num(p.x), num(p.y));
    }
    d
}

/// Coordinates with at most two decimals, trailing zeros dropped.
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
