//! Greedy batch partitioning
//!
//! The partitioner walks the ranked sequence once. A new batch starts
//! whenever the next color either forces a wash on its own or is too far
//! (CIEDE2000) from the color dyed just before it. Batches are contiguous
//! and never reordered, so concatenating them gives back the input.

use crate::descriptor::ColorDescriptor;

/// Default CIEDE2000 distance above which consecutive colors need a wash.
pub const DEFAULT_DELTA_E_THRESHOLD: f64 = 10.0;

/// A non-empty run of colors that can be dyed without an intervening wash.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    colors: Vec<ColorDescriptor>,
}

impl Batch {
    fn starting_with(first: ColorDescriptor) -> Self {
        Self {
            colors: vec![first],
        }
    }

    fn push(&mut self, color: ColorDescriptor) {
        self.colors.push(color);
    }

    fn last(&self) -> &ColorDescriptor {
        // Non-empty by construction
        &self.colors[self.colors.len() - 1]
    }

    /// Colors in dyeing order.
    #[inline]
    pub fn colors(&self) -> &[ColorDescriptor] {
        &self.colors
    }

    /// Number of colors in the batch (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorDescriptor> {
        self.colors.iter()
    }

    /// Consume the batch, returning its colors.
    pub fn into_colors(self) -> Vec<ColorDescriptor> {
        self.colors
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a ColorDescriptor;
    type IntoIter = std::slice::Iter<'a, ColorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Splits a ranked color sequence into wash-minimal batches.
///
/// # Example
///
/// ```
/// use wash_batch::{BatchPartitioner, ColorDescriptor, Rgb, WashRules};
///
/// let rules = WashRules::default();
/// let colors = vec![
///     ColorDescriptor::new("white", 0, Rgb::new(255, 255, 255), &rules),
///     ColorDescriptor::new("cream", 1, Rgb::new(250, 250, 245), &rules),
/// ];
///
/// let batches = BatchPartitioner::default().partition(colors);
/// assert_eq!(batches.len(), 1);
/// assert_eq!(batches[0].len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchPartitioner {
    delta_e_threshold: f64,
}

impl Default for BatchPartitioner {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_E_THRESHOLD)
    }
}

impl BatchPartitioner {
    /// Create a partitioner with the given CIEDE2000 threshold.
    ///
    /// `f64::INFINITY` disables distance breaks, leaving only the
    /// mandatory-wash breaks.
    ///
    /// # Panics
    ///
    /// Panics if `delta_e_threshold` is negative or NaN.
    pub fn new(delta_e_threshold: f64) -> Self {
        assert!(
            delta_e_threshold >= 0.0,
            "delta E threshold must be a non-negative number, got {delta_e_threshold}"
        );
        Self { delta_e_threshold }
    }

    #[inline]
    pub fn delta_e_threshold(&self) -> f64 {
        self.delta_e_threshold
    }

    /// True when `next` cannot join a batch whose last color is `prev`.
    pub fn breaks_between(&self, prev: &ColorDescriptor, next: &ColorDescriptor) -> bool {
        next.requires_wash() || next.delta_e(prev) > self.delta_e_threshold
    }

    /// Partition `sequence` in one forward pass.
    ///
    /// Empty input yields no batches.
    pub fn partition(&self, sequence: Vec<ColorDescriptor>) -> Vec<Batch> {
        let mut batches: Vec<Batch> = Vec::new();
        let mut current: Option<Batch> = None;

        for color in sequence {
            current = Some(match current.take() {
                None => Batch::starting_with(color),
                Some(mut batch) => {
                    if self.breaks_between(batch.last(), &color) {
                        batches.push(batch);
                        Batch::starting_with(color)
                    } else {
                        batch.push(color);
                        batch
                    }
                }
            });
        }

        if let Some(batch) = current {
            batches.push(batch);
        }
        batches
    }
}
