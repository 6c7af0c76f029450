// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the observation model, scales and chart rendering API.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod observation;
pub mod raster;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use chart::{ChartLayout, OutputFormat, Scales, WaveChart};
pub use color::Rgb;
pub use config::{load_options, parse_options, RenderOptions};
pub use error::{ChartError, Result};
pub use observation::{Observation, Observations, RawObservation};
pub use theme::Theme;
pub use tooltip::{TooltipContent, TooltipState};
