// File: crates/chart-core/src/axis.rs
// Summary: Axis model: orientation, tick positions and labels.

use crate::scale::{LinearScale, TimeScale};

/// Label format of bottom-axis day ticks (abbreviated month, zero-padded day).
pub const DAY_TICK_FORMAT: &str = "%b %d";
/// Tick count requested from linear scales.
pub const DEFAULT_TICK_COUNT: usize = 10;
/// Tick mark length in logical units.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick mark and label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis in plot-space units.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Class name carried into the vector output (`x-axis`, `y-axis`).
    pub class: &'static str,
    /// Extent of the domain line in plot space.
    pub span: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Bottom axis with one tick per calendar day.
    pub fn daily(scale: &TimeScale) -> Self {
        let ticks = scale
            .day_ticks()
            .into_iter()
            .map(|d| Tick { offset: scale.map(d), label: d.format(DAY_TICK_FORMAT).to_string() })
            .collect();
        Self { orient: Orient::Bottom, class: "x-axis", span: scale.range(), ticks }
    }

    /// Left axis with default linear ticks.
    pub fn linear(scale: &LinearScale) -> Self {
        let ticks = scale
            .tick_labels(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|(v, label)| Tick { offset: scale.map(v), label })
            .collect();
        Self { orient: Orient::Left, class: "y-axis", span: scale.range, ticks }
    }
}
