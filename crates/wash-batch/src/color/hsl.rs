//! HSL decomposition
//!
//! Only hue and saturation are consumed downstream (the red-family wash
//! rule), but the full triple is kept so the conversion reads as the
//! textbook one.

use super::rgb::Rgb;

/// A color in HSL (hue, saturation, lightness) form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0..360.0. Zero for achromatic colors.
    pub h: f64,
    /// Saturation, 0.0..=1.0. Zero for achromatic colors.
    pub s: f64,
    /// HSL lightness (max+min)/2, 0.0..=1.0. Not the YIQ lightness.
    pub l: f64,
}

impl From<Rgb> for Hsl {
    /// Standard RGB to HSL conversion.
    ///
    /// ```
    /// use wash_batch::{Hsl, Rgb};
    ///
    /// let green = Hsl::from(Rgb::new(0, 255, 0));
    /// assert!((green.h - 120.0).abs() < 1e-9);
    /// assert!((green.s - 1.0).abs() < 1e-9);
    /// ```
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Compare the integer channels: exact, no epsilon needed
        if rgb.is_achromatic() {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        // sector is in [0, 6); the modulo guards the 6.0 edge from rounding
        let h = (sector * 60.0) % 360.0;

        Self { h, s, l }
    }
}
