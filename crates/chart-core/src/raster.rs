// File: crates/chart-core/src/raster.rs
// Summary: Raster backend. Paints a ChartLayout on a Skia CPU raster surface and encodes PNG.
// Tooltips are interactive only and have no raster form.

use skia_safe as skia;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::chart::ChartLayout;
use crate::color::Rgb;
use crate::error::{ChartError, Result};
use crate::geometry::Point;

const AXIS_FONT_SIZE: f32 = 10.0;
// Arrowhead size: 6x6 marker box over a 10x10 glyph scaled by stroke width.
const ARROWHEAD_LENGTH: f32 = 12.0;
const ARROWHEAD_HALF_WIDTH: f32 = 6.0;

/// Render the layout to PNG bytes.
pub fn render_png_bytes(layout: &ChartLayout) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((layout.width as i32, layout.height as i32))
        .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;
    let canvas = surface.canvas();

    canvas.clear(color(layout.theme.background));

    canvas.save();
    canvas.translate((layout.content.left as f32, layout.content.top as f32));
    draw_axis(canvas, layout, &layout.x_axis);
    draw_axis(canvas, layout, &layout.y_axis);
    draw_line(canvas, layout);
    draw_markers(canvas, layout);
    draw_arrows(canvas, layout);
    canvas.restore();

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Render("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgb) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn stroke_paint(c: Rgb, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

fn fill_paint(c: Rgb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn axis_font() -> skia::Font {
    let mgr = skia::FontMgr::default();
    match mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::default()) {
        Some(typeface) => skia::Font::from_typeface(typeface, AXIS_FONT_SIZE),
        None => {
            let mut font = skia::Font::default();
            font.set_size(AXIS_FONT_SIZE);
            font
        }
    }
}

fn draw_axis(canvas: &skia::Canvas, layout: &ChartLayout, axis: &Axis) {
    let line = stroke_paint(layout.theme.axis_line, 1.0);
    let text = fill_paint(layout.theme.axis_label);
    let font = axis_font();
    let (s0, s1) = (axis.span.0 as f32, axis.span.1 as f32);
    let tick = TICK_SIZE as f32;
    let gap = (TICK_SIZE + TICK_PADDING) as f32;

    match axis.orient {
        Orient::Bottom => {
            let y = layout.content.height() as f32;
            canvas.draw_line((s0, y), (s1, y), &line);
            for t in &axis.ticks {
                let x = t.offset as f32;
                canvas.draw_line((x, y), (x, y + tick), &line);
                if layout.draw_labels {
                    let (w, _) = font.measure_str(&t.label, Some(&text));
                    canvas.draw_str(&t.label, (x - w / 2.0, y + gap + AXIS_FONT_SIZE * 0.8), &font, &text);
                }
            }
        }
        Orient::Left => {
            canvas.draw_line((0.0, s0), (0.0, s1), &line);
            for t in &axis.ticks {
                let y = t.offset as f32;
                canvas.draw_line((-tick, y), (0.0, y), &line);
                if layout.draw_labels {
                    let (w, _) = font.measure_str(&t.label, Some(&text));
                    canvas.draw_str(&t.label, (-gap - w, y + AXIS_FONT_SIZE * 0.32), &font, &text);
                }
            }
        }
    }
}

fn draw_line(canvas: &skia::Canvas, layout: &ChartLayout) {
    let Some((first, rest)) = layout.line.split_first() else { return };
    let mut path = skia::Path::new();
    path.move_to(pt(*first));
    for p in rest {
        path.line_to(pt(*p));
    }
    canvas.draw_path(&path, &stroke_paint(layout.theme.line_stroke, layout.line_width as f32));
}

fn draw_markers(canvas: &skia::Canvas, layout: &ChartLayout) {
    for m in &layout.markers {
        canvas.draw_circle(pt(m.center), m.radius as f32, &fill_paint(m.fill));
    }
}

fn draw_arrows(canvas: &skia::Canvas, layout: &ChartLayout) {
    let shaft = stroke_paint(layout.theme.arrow, 2.0);
    let head = fill_paint(layout.theme.arrow);
    for a in &layout.arrows {
        let (start, end) = (pt(a.start), pt(a.end));
        canvas.draw_line(start, end, &shaft);

        let dir = end - start;
        let len = dir.length();
        if len <= f32::EPSILON {
            continue;
        }
        let ux = dir.x / len;
        let uy = dir.y / len;
        // Glyph is centered on the endpoint like a marker with refX/refY at its middle.
        let tip = skia::Point::new(end.x + ux * ARROWHEAD_LENGTH / 2.0, end.y + uy * ARROWHEAD_LENGTH / 2.0);
        let back = skia::Point::new(end.x - ux * ARROWHEAD_LENGTH / 2.0, end.y - uy * ARROWHEAD_LENGTH / 2.0);
        let mut path = skia::Path::new();
        path.move_to(back + skia::Point::new(-uy * ARROWHEAD_HALF_WIDTH, ux * ARROWHEAD_HALF_WIDTH));
        path.line_to(tip);
        path.line_to(back + skia::Point::new(uy * ARROWHEAD_HALF_WIDTH, -ux * ARROWHEAD_HALF_WIDTH));
        path.close();
        canvas.draw_path(&path, &head);
    }
}
