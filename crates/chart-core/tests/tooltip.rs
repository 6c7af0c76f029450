// File: crates/chart-core/tests/tooltip.rs
// Purpose: Tooltip text and fade-in/fade-out opacity over time.

use swell_chart_core::geometry::Point;
use swell_chart_core::tooltip::{ease_cubic_in_out, panel_position, HIDE, SHOW};
use swell_chart_core::{RenderOptions, TooltipContent, TooltipState, WaveChart};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn content_for(date: &str) -> TooltipContent {
    let chart = WaveChart::barcelona_week().unwrap();
    let layout = chart.layout(&RenderOptions::default());
    let idx = chart
        .observations()
        .iter()
        .position(|o| o.date.format("%Y-%m-%d").to_string() == date)
        .expect("date in dataset");
    layout.markers[idx].tooltip.clone()
}

#[test]
fn tooltip_for_october_third() {
    let content = content_for("2023-10-03");
    assert!(content.contains("Wave Height: 1.8m"));
    assert!(content.contains("Wave Direction: 135°"));
    assert_eq!(
        content.lines(),
        ["Date: 2023-10-03", "Temp: 21°C", "Wave Height: 1.8m", "Wave Period: 7s", "Wave Direction: 135°"]
    );
}

#[test]
fn whole_numbers_drop_the_fraction() {
    let content = content_for("2023-10-04");
    assert!(content.text().contains("Wave Height: 1m\n"));
}

#[test]
fn panel_sits_above_right_of_pointer() {
    let p = panel_position(Point::new(100.0, 100.0));
    assert_eq!(p, Point::new(105.0, 72.0));
}

#[test]
fn easing_endpoints_and_midpoint() {
    assert_eq!(ease_cubic_in_out(0.0), 0.0);
    assert_eq!(ease_cubic_in_out(0.5), 0.5);
    assert_eq!(ease_cubic_in_out(1.0), 1.0);
    assert_eq!(ease_cubic_in_out(2.0), 1.0);
}

#[test]
fn fade_in_then_out() {
    let mut state = TooltipState::new();
    assert_eq!(state.opacity_at(0), 0.0);
    assert!(state.content().is_none());

    state.pointer_enter(1_000, Point::new(10.0, 50.0), content_for("2023-10-03"));
    assert_eq!(state.opacity_at(1_000), 0.0);
    assert!(approx(state.opacity_at(1_000 + SHOW.duration_ms as u64 / 2), 0.45));
    assert!(approx(state.opacity_at(1_200), SHOW.target));
    assert!(approx(state.opacity_at(5_000), 0.9));
    assert_eq!(state.position(), Point::new(15.0, 22.0));

    state.pointer_leave(6_000);
    assert!(approx(state.opacity_at(6_250), 0.45));
    assert!(approx(state.opacity_at(6_000 + HIDE.duration_ms as u64), 0.0));
    // content lingers while fading out
    assert!(state.content().is_some());
}

#[test]
fn retrigger_starts_from_current_opacity() {
    let mut state = TooltipState::new();
    state.pointer_enter(0, Point::new(0.0, 0.0), content_for("2023-10-01"));
    state.pointer_leave(100);
    // halfway through the fade-in
    assert!(approx(state.opacity_at(100), 0.45));
    assert!(state.opacity_at(350) < 0.45);
    assert!(approx(state.opacity_at(600), 0.0));

    state.pointer_enter(350, Point::new(0.0, 0.0), content_for("2023-10-02"));
    let resumed = state.opacity_at(350);
    assert!(resumed > 0.0 && resumed < 0.45);
    assert!(approx(state.opacity_at(550), 0.9));
    assert!(state.content().unwrap().contains("Date: 2023-10-02"));
}
