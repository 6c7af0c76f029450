// File: crates/chart-core/src/color.rs
// Summary: RGB color type and the cyclic cubehelix rainbow used for wave direction.

use std::fmt;

/// 8-bit RGBA color, renderer-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Build from float channels in 0..=255, rounding and clamping.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        let c = |v: f64| -> u8 {
            if v.is_nan() { 0 } else { v.round().clamp(0.0, 255.0) as u8 }
        };
        Self::new(c(r), c(g), c(b))
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS form: `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let a = self.a as f64 / 255.0;
            write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, a)
        }
    }
}

/// Color in the cubehelix space: hue in degrees, saturation, lightness in 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubehelix {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

const A: f64 = -0.14861;
const B: f64 = 1.78277;
const C: f64 = -0.29227;
const D: f64 = -0.90649;
const E: f64 = 1.97294;

impl Cubehelix {
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h + 120.0).to_radians();
        let l = self.l;
        let a = self.s * l * (1.0 - l);
        let (sinh, cosh) = h.sin_cos();
        Rgb::from_f64(
            255.0 * (l + a * (A * cosh + B * sinh)),
            255.0 * (l + a * (C * cosh + D * sinh)),
            255.0 * (l + a * (E * cosh)),
        )
    }
}

/// Cyclic rainbow: `t` and `t + 1` give the same color, values outside [0, 1] wrap.
pub fn interpolate_rainbow(t: f64) -> Rgb {
    let t = if (0.0..=1.0).contains(&t) { t } else { t - t.floor() };
    let ts = (t - 0.5).abs();
    Cubehelix { h: 360.0 * t - 100.0, s: 1.5 - 1.5 * ts, l: 0.8 - 0.9 * ts }.to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rainbow_is_cyclic() {
        assert_eq!(interpolate_rainbow(0.0), interpolate_rainbow(1.0));
        assert_eq!(interpolate_rainbow(0.125), interpolate_rainbow(1.125));
        assert_eq!(interpolate_rainbow(-0.25), interpolate_rainbow(0.75));
    }

    #[test]
    fn rainbow_endpoints_are_purple() {
        // h = -100, s = 0.75, l = 0.35
        let c = interpolate_rainbow(0.0);
        assert_eq!(c, Rgb::new(110, 64, 170));
    }

    #[test]
    fn css_forms() {
        let c = Rgb::new(255, 165, 0);
        assert_eq!(c.to_string(), "rgb(255, 165, 0)");
        assert_eq!(c.to_hex(), "#ffa500");
        assert_eq!(c.with_alpha(0).to_string(), "rgba(255, 165, 0, 0.000)");
    }
}
