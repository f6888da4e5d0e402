//! Lightness ordering

use crate::descriptor::ColorDescriptor;

/// Sort descriptors by lightness, lightest first.
///
/// The sort is stable: descriptors with equal lightness keep their input
/// order, so the same input always yields the same sequence.
///
/// ```
/// use wash_batch::{sequence, ColorDescriptor, Rgb, WashRules};
///
/// let rules = WashRules::default();
/// let sorted = sequence(vec![
///     ColorDescriptor::new("dark", 0, Rgb::new(40, 40, 40), &rules),
///     ColorDescriptor::new("light", 1, Rgb::new(240, 240, 240), &rules),
/// ]);
/// assert_eq!(sorted[0].source_id(), "light");
/// ```
pub fn sequence(mut descriptors: Vec<ColorDescriptor>) -> Vec<ColorDescriptor> {
    descriptors.sort_by(|a, b| b.lightness().total_cmp(&a.lightness()));
    descriptors
}
