//! CIE L*a*b* color space
//!
//! Lab is the space the batch partitioner measures perceptual distance in.
//! The conversion follows the usual chain used by color utility libraries:
//! sRGB -> linear RGB -> CIE XYZ (D65) -> Lab.

use super::lut::srgb_to_linear;
use super::rgb::Rgb;

/// D65 reference white (2° observer), Y normalized to 1.0.
const D65_XN: f64 = 0.95047;
const D65_YN: f64 = 1.00000;
const D65_ZN: f64 = 1.08883;

/// CIE constants for the Lab transfer function (exact rational forms).
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, unbounded, typically -128..127
/// - `b`: Blue-yellow axis, unbounded, typically -128..127
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIEDE2000 perceptual difference to `other`.
    ///
    /// See [`ciede2000`](super::ciede2000) for details.
    ///
    /// ```
    /// use wash_batch::{Lab, Rgb};
    ///
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// let cream = Lab::from(Rgb::new(250, 250, 245));
    /// assert!(white.delta_e(cream) < 10.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        super::delta_e::ciede2000(self, other)
    }
}

impl From<Rgb> for Lab {
    /// Convert an 8-bit sRGB color to Lab (D65).
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r);
        let g = srgb_to_linear(rgb.g);
        let b = srgb_to_linear(rgb.b);

        // Linear sRGB to XYZ (IEC 61966-2-1 matrix, D65)
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_f(x / D65_XN);
        let fy = lab_f(y / D65_YN);
        let fz = lab_f(z / D65_ZN);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// Lab companding function.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}
