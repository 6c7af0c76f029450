// File: crates/chart-core/tests/svg.rs
// Purpose: Vector output structure plus a golden snapshot with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use swell_chart_core::{OutputFormat, RenderOptions, WaveChart};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[test]
fn svg_has_every_mark() {
    let chart = WaveChart::barcelona_week().unwrap();
    let svg = chart.render_to_svg(&RenderOptions::default());

    assert!(svg.starts_with("<svg xmlns='http://www.w3.org/2000/svg' width='800' height='400'"));
    assert_eq!(svg.matches("<path class='line'").count(), 1);
    assert_eq!(svg.matches("class='dot'").count(), 7);
    assert_eq!(svg.matches("class='arrow'").count(), 7);
    assert_eq!(svg.matches("marker-end='url(#arrowhead)'").count(), 7);
    assert_eq!(svg.matches("<marker id='arrowhead'").count(), 1);
    assert!(svg.contains("orient='auto-start-reverse'"));
    assert!(svg.contains("<path d='M 0 0 L 10 5 L 0 10 z'"));
    assert!(svg.contains("transform='translate(40,20)'"));
    assert!(svg.contains("stroke='rgb(255, 165, 0)'"));
    assert!(svg.contains(">Oct 01</text>"));
    assert!(svg.contains(">1.8</text>"));
}

#[test]
fn first_marker_geometry() {
    let chart = WaveChart::barcelona_week().unwrap();
    let svg = chart.render_to_svg(&RenderOptions::default());
    // 2023-10-01: x = 0, height 1.2 of 1.8 -> y = 113.33, period 6 -> r = 9.97
    assert!(svg.contains("<circle class='dot' id='dot-0' cx='0' cy='113.33' r='9.97'"));
    // direction 45 -> 20 * (cos -45deg, sin -45deg)
    assert!(svg.contains("x1='0' y1='113.33' x2='14.14' y2='99.19'"));
}

#[test]
fn tooltips_fade_on_hover() {
    let chart = WaveChart::barcelona_week().unwrap();
    let svg = chart.render_to_svg(&RenderOptions::default());
    assert_eq!(svg.matches("class='tooltip'").count(), 7);
    assert!(svg.contains("transition: opacity 500ms"));
    assert!(svg.contains("svg:has(#dot-2:hover) #tooltip-2"));
    assert!(svg.contains("opacity: 0.9; transition-duration: 200ms;"));
    assert!(svg.contains(">Wave Height: 1.8m</tspan>"));
    assert!(svg.contains(">Wave Direction: 135°</tspan>"));
}

#[test]
fn labels_can_be_disabled() {
    let chart = WaveChart::barcelona_week().unwrap();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let svg = chart.render_to_svg(&opts);
    assert!(!svg.contains(">Oct 01</text>"));
    assert_eq!(svg.matches("class='tick'").count(), 17);
}

#[test]
fn html_mounts_chart() {
    let chart = WaveChart::barcelona_week().unwrap();
    let html = chart.render_to_html(&RenderOptions::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    let mount = html.find("<div id='chart'>").expect("mount point");
    let svg = html.find("<svg").expect("svg element");
    assert!(mount < svg);
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn render_to_file_writes_each_format() {
    let chart = WaveChart::barcelona_week().unwrap();
    let opts = RenderOptions::default();
    let dir = std::path::PathBuf::from("target/test_out/formats");
    for format in [OutputFormat::Html, OutputFormat::Svg] {
        let path = dir.join(format!("week.{}", format.extension()));
        chart.render_to_file(&opts, format, &path).expect("write");
        let text = std::fs::read_to_string(&path).expect("read back");
        assert!(text.contains("class='dot'"));
    }
}

#[test]
fn golden_week_svg() {
    let chart = WaveChart::barcelona_week().unwrap();
    let svg = chart.render_to_svg(&RenderOptions::default());
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/week.svg");

    if bless_mode() {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
