// File: crates/chart-core/src/types.rs
// Summary: Shared surface constants and margins.

use serde::Deserialize;

/// Default surface width in logical units.
pub const WIDTH: u32 = 800;
/// Default surface height in logical units.
pub const HEIGHT: u32 = 400;

/// Margins around the plot content area.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(20, 30, 40, 40)
    }
}
