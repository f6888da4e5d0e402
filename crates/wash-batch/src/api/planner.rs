//! WashPlanner -- the primary entry point for the crate.
//!
//! [`WashPlanner`] runs the whole scheduling pipeline: descriptor
//! construction, lightness sequencing, batch partitioning and savings.

use std::fmt;

use super::error::PlanError;
use crate::classify::{WashRules, DEFAULT_BLACK_BRIGHTNESS_MAX, DEFAULT_WASH_HUE_MAX};
use crate::color::Rgb;
use crate::descriptor::ColorDescriptor;
use crate::plan::{sequence, washes_saved, Batch, BatchPartitioner, DEFAULT_DELTA_E_THRESHOLD};

/// Tunable thresholds for a planning run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanConfig {
    /// Upper bound of the red hue family, degrees (inclusive)
    pub wash_hue_max: f64,
    /// Near-black YIQ brightness bound, 0-255 scale (inclusive)
    pub black_brightness_max: f64,
    /// CIEDE2000 distance above which consecutive colors need a wash
    pub delta_e_threshold: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            wash_hue_max: DEFAULT_WASH_HUE_MAX,
            black_brightness_max: DEFAULT_BLACK_BRIGHTNESS_MAX,
            delta_e_threshold: DEFAULT_DELTA_E_THRESHOLD,
        }
    }
}

impl PlanConfig {
    /// Set the red hue family upper bound.
    #[inline]
    pub fn wash_hue_max(mut self, degrees: f64) -> Self {
        self.wash_hue_max = degrees;
        self
    }

    /// Set the near-black brightness bound.
    #[inline]
    pub fn black_brightness_max(mut self, brightness: f64) -> Self {
        self.black_brightness_max = brightness;
        self
    }

    /// Set the CIEDE2000 batching threshold.
    #[inline]
    pub fn delta_e_threshold(mut self, threshold: f64) -> Self {
        self.delta_e_threshold = threshold;
        self
    }

    /// The mandatory-wash part of the configuration.
    #[inline]
    pub fn rules(&self) -> WashRules {
        WashRules::new(self.wash_hue_max, self.black_brightness_max)
    }
}

/// One image as seen by the planner: an identifier and up to two
/// candidate colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    /// Opaque identifier, usually the file name
    pub id: String,
    /// Dominant color, if extraction found one
    pub dominant: Option<Rgb>,
    /// Color to use when there is no dominant color (first pixel)
    pub fallback: Option<Rgb>,
}

impl ImageInput {
    /// Input with a known dominant color and no fallback.
    pub fn with_color(id: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            id: id.into(),
            dominant: Some(rgb),
            fallback: None,
        }
    }

    /// The color the planner will use: dominant first, then fallback.
    #[inline]
    pub fn resolved_color(&self) -> Option<Rgb> {
        self.dominant.or(self.fallback)
    }
}

/// Why an image contributed no color to the plan.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Neither a dominant color nor a fallback pixel was available
    NoColor,
    /// Dropped before color extraction (unsupported type, undecodable
    /// data, failed worker); carries a human-readable explanation
    Rejected(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoColor => write!(f, "no dominant color found"),
            SkipReason::Rejected(why) => write!(f, "{}", why),
        }
    }
}

/// Diagnostic for an image that was left out of the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedImage {
    pub source_id: String,
    pub input_index: usize,
    pub reason: SkipReason,
}

impl SkippedImage {
    pub fn new(source_id: impl Into<String>, input_index: usize, reason: SkipReason) -> Self {
        Self {
            source_id: source_id.into(),
            input_index,
            reason,
        }
    }
}

/// Result of a planning run.
///
/// `ordered` is the full lightness-ranked sequence; `batches` splits that
/// exact sequence into contiguous runs, so concatenating the batches gives
/// `ordered` back and `washes_saved == ordered.len() - batches.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct WashPlan {
    ordered: Vec<ColorDescriptor>,
    batches: Vec<Batch>,
    washes_saved: usize,
    skipped: Vec<SkippedImage>,
}

impl WashPlan {
    /// All scheduled colors, lightest first.
    #[inline]
    pub fn ordered(&self) -> &[ColorDescriptor] {
        &self.ordered
    }

    #[inline]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    #[inline]
    pub fn washes_saved(&self) -> usize {
        self.washes_saved
    }

    /// Images that were left out, in input order.
    #[inline]
    pub fn skipped(&self) -> &[SkippedImage] {
        &self.skipped
    }
}

/// Wash scheduler.
///
/// The planner is immutable after construction and holds no per-run
/// state, so one instance can serve many concurrent requests.
///
/// # Example
///
/// ```
/// use wash_batch::{ImageInput, PlanConfig, Rgb, WashPlanner};
///
/// let planner = WashPlanner::new(PlanConfig::default());
/// let plan = planner
///     .plan(vec![
///         ImageInput::with_color("white.png", Rgb::new(255, 255, 255)),
///         ImageInput::with_color("cream.png", Rgb::new(250, 250, 245)),
///     ])
///     .unwrap();
///
/// assert_eq!(plan.batches().len(), 1);
/// assert_eq!(plan.washes_saved(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct WashPlanner {
    config: PlanConfig,
    rules: WashRules,
    partitioner: BatchPartitioner,
}

impl Default for WashPlanner {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}

impl WashPlanner {
    /// Create a planner.
    ///
    /// # Panics
    ///
    /// Panics if `config.delta_e_threshold` is negative or NaN.
    pub fn new(config: PlanConfig) -> Self {
        Self {
            config,
            rules: config.rules(),
            partitioner: BatchPartitioner::new(config.delta_e_threshold),
        }
    }

    #[inline]
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    #[inline]
    pub fn rules(&self) -> &WashRules {
        &self.rules
    }

    /// Build a descriptor under this planner's wash rules.
    pub fn describe(
        &self,
        source_id: impl Into<String>,
        input_index: usize,
        rgb: Rgb,
    ) -> ColorDescriptor {
        ColorDescriptor::new(source_id, input_index, rgb, &self.rules)
    }

    /// Schedule a set of images.
    ///
    /// Each input contributes its dominant color, or its fallback when there
    /// is no dominant color. Inputs with neither are reported in
    /// [`WashPlan::skipped`] with [`SkipReason::NoColor`].
    ///
    /// # Errors
    ///
    /// [`PlanError::NoUsableInput`] when no input yields a color, including
    /// when `inputs` is empty.
    pub fn plan(&self, inputs: Vec<ImageInput>) -> Result<WashPlan, PlanError> {
        let mut descriptors = Vec::with_capacity(inputs.len());
        let mut skipped = Vec::new();

        for (index, input) in inputs.into_iter().enumerate() {
            match input.resolved_color() {
                Some(rgb) => descriptors.push(self.describe(input.id, index, rgb)),
                None => skipped.push(SkippedImage::new(input.id, index, SkipReason::NoColor)),
            }
        }

        self.plan_descriptors(descriptors, skipped)
    }

    /// Sequence, partition and score descriptors built elsewhere.
    ///
    /// `skipped` is carried through to the plan (or the error) unchanged.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoUsableInput`] when `descriptors` is empty.
    pub fn plan_descriptors(
        &self,
        descriptors: Vec<ColorDescriptor>,
        skipped: Vec<SkippedImage>,
    ) -> Result<WashPlan, PlanError> {
        if descriptors.is_empty() {
            return Err(PlanError::NoUsableInput { skipped });
        }

        let ordered = sequence(descriptors);
        let batches = self.partitioner.partition(ordered.clone());
        let washes_saved = washes_saved(ordered.len(), batches.len());

        Ok(WashPlan {
            ordered,
            batches,
            washes_saved,
            skipped,
        })
    }
}
