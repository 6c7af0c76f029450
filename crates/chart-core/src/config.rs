// File: crates/chart-core/src/config.rs
// Summary: Render options with defaults, loadable from a JSON5 file.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Length of direction arrows in logical units.
pub const ARROW_LENGTH: f64 = 20.0;
/// Marker radius range for the shortest and longest wave period.
pub const RADIUS_RANGE: (f64, f64) = (4.0, 15.0);

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Full surface size, margins included.
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub arrow_length: f64,
    pub radius_range: (f64, f64),
    pub line_width: f64,
    /// Axis tick labels; turned off for pixel-exact raster snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            arrow_length: ARROW_LENGTH,
            radius_range: RADIUS_RANGE,
            line_width: 2.0,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Width of the plot content area.
    pub fn content_width(&self) -> f64 {
        self.width.saturating_sub(self.insets.hsum()) as f64
    }

    /// Height of the plot content area.
    pub fn content_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()) as f64
    }

    /// Apply a parsed file on top of the defaults.
    pub fn from_file_config(file: OptionsFile) -> Result<Self> {
        let mut opts = Self::default();
        if let Some(w) = file.width { opts.width = w; }
        if let Some(h) = file.height { opts.height = h; }
        if let Some(insets) = file.insets { opts.insets = insets; }
        if let Some(name) = file.theme.as_deref() {
            opts.theme = theme::find(name)
                .ok_or_else(|| ChartError::Config(format!("unknown theme '{name}'")))?;
        }
        if let Some(len) = file.arrow_length { opts.arrow_length = len; }
        if let Some(r) = file.radius_range { opts.radius_range = r; }
        if let Some(lw) = file.line_width { opts.line_width = lw; }
        if let Some(labels) = file.draw_labels { opts.draw_labels = labels; }
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.insets.hsum() >= self.width || self.insets.vsum() >= self.height {
            return Err(ChartError::Config(format!(
                "margins {:?} leave no content area in {}x{}",
                self.insets, self.width, self.height
            )));
        }
        let (r0, r1) = self.radius_range;
        if !(r0 >= 0.0 && r1 >= 0.0 && r0.is_finite() && r1.is_finite()) {
            return Err(ChartError::Config(format!("invalid radius range ({r0}, {r1})")));
        }
        if !(self.arrow_length >= 0.0 && self.arrow_length.is_finite()) {
            return Err(ChartError::Config(format!("invalid arrow length {}", self.arrow_length)));
        }
        Ok(())
    }
}

/// On-disk form of [`RenderOptions`]; every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub insets: Option<Insets>,
    pub theme: Option<String>,
    pub arrow_length: Option<f64>,
    pub radius_range: Option<(f64, f64)>,
    pub line_width: Option<f64>,
    pub draw_labels: Option<bool>,
}

/// Load render options from a JSON5 file.
pub fn load_options(path: impl AsRef<Path>) -> Result<RenderOptions> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ChartError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
    })?;
    let file: OptionsFile = json5::from_str(&content).map_err(|e| {
        ChartError::Config(format!("Failed to parse config file '{}': {}", path.display(), e))
    })?;
    RenderOptions::from_file_config(file)
}

/// Parse render options from a JSON5 string.
pub fn parse_options(content: &str) -> Result<RenderOptions> {
    let file: OptionsFile = json5::from_str(content)
        .map_err(|e| ChartError::Config(format!("Failed to parse config: {}", e)))?;
    RenderOptions::from_file_config(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_layout() {
        let opts = RenderOptions::default();
        assert_eq!(opts.content_width(), 730.0);
        assert_eq!(opts.content_height(), 340.0);
        assert_eq!(opts.theme.name, "light");
    }

    #[test]
    fn parse_partial_json5() {
        let opts = parse_options(
            r#"{
                // dark page, thicker line
                theme: "dark",
                line_width: 3,
                insets: { top: 10, right: 10, bottom: 30, left: 50 },
            }"#,
        )
        .unwrap();
        assert_eq!(opts.theme.name, "dark");
        assert_eq!(opts.line_width, 3.0);
        assert_eq!(opts.insets, Insets::new(10, 10, 30, 50));
        assert_eq!(opts.width, WIDTH);
    }

    #[test]
    fn rejects_unknown_theme_and_fields() {
        assert!(matches!(parse_options(r#"{ theme: "neon" }"#), Err(ChartError::Config(_))));
        assert!(matches!(parse_options(r#"{ colour: "red" }"#), Err(ChartError::Config(_))));
    }

    #[test]
    fn rejects_margins_wider_than_surface() {
        let err = parse_options(r#"{ width: 60 }"#).unwrap_err();
        assert!(err.to_string().contains("no content area"));
    }
}
