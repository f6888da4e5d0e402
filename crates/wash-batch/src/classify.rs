//! Mandatory-wash classification
//!
//! Some dyes contaminate the equipment badly enough that the machine has to
//! be washed before and after them, whatever their neighbors are. Two
//! families are flagged: red hues and near-blacks.

use std::fmt;

/// Default upper bound (degrees, inclusive) of the red hue family.
pub const DEFAULT_WASH_HUE_MAX: f64 = 30.0;

/// Default YIQ brightness (native 0-255 scale, inclusive) at or below which a
/// color is near-black.
pub const DEFAULT_BLACK_BRIGHTNESS_MAX: f64 = 10.0;

/// Why a color mandates a wash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WashReason {
    /// Hue falls in `[0, wash_hue_max]` on a chromatic color
    RedHue,
    /// Brightness is at or below `black_brightness_max`
    NearBlack,
}

impl WashReason {
    /// Short remark suitable for a report column.
    pub fn remark(self) -> &'static str {
        match self {
            WashReason::RedHue => "Red hue requires wash",
            WashReason::NearBlack => "Near-black requires wash",
        }
    }
}

impl fmt::Display for WashReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.remark())
    }
}

/// Thresholds for the mandatory-wash rule.
///
/// A color requires a wash when it is near-black (YIQ
/// `brightness <= black_brightness_max`, on the native 0-255 scale) or when
/// it is chromatic and its hue lies in `[0, wash_hue_max]`. Achromatic
/// colors have no meaningful hue (HSL reports 0 for them), so whites and
/// greys never match the hue clause.
///
/// # Example
///
/// ```
/// use wash_batch::{Rgb, WashReason, WashRules};
///
/// let rules = WashRules::default();
/// assert_eq!(rules.classify_rgb(Rgb::new(250, 5, 5)), Some(WashReason::RedHue));
/// assert_eq!(rules.classify_rgb(Rgb::new(5, 5, 5)), Some(WashReason::NearBlack));
/// assert_eq!(rules.classify_rgb(Rgb::new(255, 255, 255)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WashRules {
    /// Upper bound of the red hue family, degrees (inclusive)
    pub wash_hue_max: f64,
    /// Near-black YIQ brightness bound on the 0-255 scale (inclusive)
    pub black_brightness_max: f64,
}

impl Default for WashRules {
    fn default() -> Self {
        Self {
            wash_hue_max: DEFAULT_WASH_HUE_MAX,
            black_brightness_max: DEFAULT_BLACK_BRIGHTNESS_MAX,
        }
    }
}

impl WashRules {
    /// Create rules with explicit thresholds.
    #[inline]
    pub fn new(wash_hue_max: f64, black_brightness_max: f64) -> Self {
        Self {
            wash_hue_max,
            black_brightness_max,
        }
    }

    /// Classify a color from its hue, HSL saturation and 0-255 YIQ brightness.
    ///
    /// Near-black takes precedence when both clauses match, since a very
    /// dark red reads as black on fabric.
    pub fn classify(&self, hue: f64, saturation: f64, brightness: f64) -> Option<WashReason> {
        if brightness <= self.black_brightness_max {
            return Some(WashReason::NearBlack);
        }
        if saturation > 0.0 && hue >= 0.0 && hue <= self.wash_hue_max {
            return Some(WashReason::RedHue);
        }
        None
    }

    /// Convenience wrapper computing hue, saturation and brightness from `rgb`.
    pub fn classify_rgb(&self, rgb: crate::Rgb) -> Option<WashReason> {
        let hsl = crate::Hsl::from(rgb);
        self.classify(hsl.h, hsl.s, rgb.brightness())
    }
}
