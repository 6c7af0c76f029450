// File: crates/chart-core/src/tooltip.rs
// Summary: Hover tooltip: text content per observation, placement, and the fade-in/fade-out
// opacity model driven by pointer enter/leave.

use crate::geometry::Point;
use crate::observation::{Observation, DATE_FORMAT};

/// Offset of the tooltip panel from the pointer.
pub const POINTER_OFFSET: (f64, f64) = (5.0, -28.0);

/// A timed opacity change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub duration_ms: u32,
    pub target: f64,
}

/// Pointer enters a marker.
pub const SHOW: Fade = Fade { duration_ms: 200, target: 0.9 };
/// Pointer leaves a marker.
pub const HIDE: Fade = Fade { duration_ms: 500, target: 0.0 };

/// Text shown for one observation, one entry per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    lines: Vec<String>,
}

impl TooltipContent {
    pub fn for_observation(o: &Observation) -> Self {
        let lines = vec![
            format!("Date: {}", o.date.format(DATE_FORMAT)),
            format!("Temp: {}°C", o.temperature),
            format!("Wave Height: {}m", o.wave_height),
            format!("Wave Period: {}s", o.wave_period),
            format!("Wave Direction: {}°", o.wave_direction),
        ];
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-separated plain text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

/// Where the panel's top-left corner goes for a pointer at `pointer`.
pub fn panel_position(pointer: Point) -> Point {
    pointer.offset(POINTER_OFFSET.0, POINTER_OFFSET.1)
}

#[inline]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u32,
}

impl Transition {
    fn value_at(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        let t = ease_cubic_in_out(elapsed / self.duration_ms as f64);
        self.from + (self.to - self.from) * t
    }
}

/// Tooltip visibility over time. A new enter/leave replaces the running fade and starts
/// from the opacity reached so far.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    transition: Transition,
    content: Option<TooltipContent>,
    position: Point,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            transition: Transition { from: 0.0, to: 0.0, start_ms: 0, duration_ms: 0 },
            content: None,
            position: Point::new(0.0, 0.0),
        }
    }
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity_at(&self, now_ms: u64) -> f64 {
        self.transition.value_at(now_ms)
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn pointer_enter(&mut self, now_ms: u64, pointer: Point, content: TooltipContent) {
        self.start(now_ms, SHOW);
        self.content = Some(content);
        self.position = panel_position(pointer);
    }

    /// Content and position stay put while the panel fades out.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.start(now_ms, HIDE);
    }

    fn start(&mut self, now_ms: u64, fade: Fade) {
        let from = self.opacity_at(now_ms);
        self.transition = Transition { from, to: fade.target, start_ms: now_ms, duration_ms: fade.duration_ms };
    }
}
