//! Per-image color descriptor
//!
//! A [`ColorDescriptor`] is built once from a dominant color and never
//! changes afterwards. All derived fields are computed in
//! [`ColorDescriptor::new`], so there is no way to observe a half-filled one.

use crate::classify::{WashReason, WashRules};
use crate::color::{Hsl, Lab, Rgb};

/// Perceptual summary of one image's dominant color.
///
/// # Example
///
/// ```
/// use wash_batch::{ColorDescriptor, Rgb, WashRules};
///
/// let d = ColorDescriptor::new("shirt.png", 0, Rgb::new(250, 5, 5), &WashRules::default());
/// assert_eq!(d.hex(), "#fa0505");
/// assert!(d.requires_wash());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDescriptor {
    source_id: String,
    input_index: usize,
    rgb: Rgb,
    hex: String,
    lightness: f64,
    hue: f64,
    saturation: f64,
    lab: Lab,
    wash_reason: Option<WashReason>,
}

impl ColorDescriptor {
    /// Derive every feature of `rgb` and classify it under `rules`.
    pub fn new(
        source_id: impl Into<String>,
        input_index: usize,
        rgb: Rgb,
        rules: &WashRules,
    ) -> Self {
        let hsl = Hsl::from(rgb);
        let lightness = rgb.lightness();
        Self {
            source_id: source_id.into(),
            input_index,
            rgb,
            hex: rgb.to_hex(),
            lightness,
            hue: hsl.h,
            saturation: hsl.s,
            lab: Lab::from(rgb),
            wash_reason: rules.classify(hsl.h, hsl.s, rgb.brightness()),
        }
    }

    /// Identifier of the originating image (usually its file name).
    #[inline]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Position of the originating image in the request.
    #[inline]
    pub fn input_index(&self) -> usize {
        self.input_index
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Lowercase `#rrggbb`.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// YIQ lightness, 0.0..=100.0.
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// HSL hue in degrees, 0.0..360.0.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// HSL saturation, 0.0..=1.0.
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// Why this color forces a wash, if it does.
    #[inline]
    pub fn wash_reason(&self) -> Option<WashReason> {
        self.wash_reason
    }

    #[inline]
    pub fn requires_wash(&self) -> bool {
        self.wash_reason.is_some()
    }

    /// CIEDE2000 distance to another descriptor.
    #[inline]
    pub fn delta_e(&self, other: &ColorDescriptor) -> f64 {
        self.lab.delta_e(other.lab)
    }
}
