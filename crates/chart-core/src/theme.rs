// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub axis_line: Rgb,
    pub axis_label: Rgb,
    pub line_stroke: Rgb,
    pub arrow: Rgb,
    pub tooltip_fill: Rgb,
    pub tooltip_border: Rgb,
    pub tooltip_text: Rgb,
}

impl Theme {
    /// White page, orange wave line, black arrows.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::new(255, 255, 255),
            axis_line: Rgb::new(0, 0, 0),
            axis_label: Rgb::new(0, 0, 0),
            line_stroke: Rgb::new(255, 165, 0), // orange
            arrow: Rgb::new(0, 0, 0),
            tooltip_fill: Rgb::new(176, 196, 222), // lightsteelblue
            tooltip_border: Rgb::new(0, 0, 0).with_alpha(0),
            tooltip_text: Rgb::new(0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            axis_line: Rgb::new(180, 180, 190),
            axis_label: Rgb::new(235, 235, 245),
            line_stroke: Rgb::new(255, 165, 0),
            arrow: Rgb::new(235, 235, 245),
            tooltip_fill: Rgb::new(40, 40, 45),
            tooltip_border: Rgb::new(150, 150, 160),
            tooltip_text: Rgb::new(235, 235, 245),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgb::new(0x00, 0x00, 0x00),
            axis_line: Rgb::new(0xff, 0xff, 0xff),
            axis_label: Rgb::new(0xff, 0xff, 0xff),
            line_stroke: Rgb::new(0xff, 0xff, 0x00),
            arrow: Rgb::new(0xff, 0xff, 0xff),
            tooltip_fill: Rgb::new(0x00, 0x00, 0x00),
            tooltip_border: Rgb::new(0xff, 0xff, 0xff),
            tooltip_text: Rgb::new(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
