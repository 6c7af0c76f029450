// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for plot-space math.

/// Point in plot-space logical units (origin at the content area's top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Screen angle in radians for a compass bearing. Bearings run clockwise from north,
/// screen angles from +x with y pointing down, so north (0°) becomes straight up.
#[inline]
pub fn bearing_to_screen_angle(bearing_deg: f64) -> f64 {
    (bearing_deg - 90.0).to_radians()
}

/// End point of an arrow of `length` drawn from `start` along a compass bearing.
pub fn arrow_end(start: Point, bearing_deg: f64, length: f64) -> Point {
    let (sin, cos) = bearing_to_screen_angle(bearing_deg).sin_cos();
    start.offset(length * cos, length * sin)
}
