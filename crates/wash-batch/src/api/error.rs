//! Error type for wash planning.

use std::fmt;

use super::planner::SkippedImage;

/// Error returned by [`WashPlanner`](super::WashPlanner) when no color could
/// be scheduled.
///
/// Per-image problems are not errors: they are reported as
/// [`SkippedImage`] entries on a successful plan. Only when every input was
/// skipped (or there was no input at all) does planning fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// No input produced a usable color. Carries the per-image diagnostics.
    NoUsableInput {
        /// Images that were dropped, in input order
        skipped: Vec<SkippedImage>,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::NoUsableInput { skipped } if skipped.is_empty() => {
                write!(f, "no usable input: no images were provided")
            }
            PlanError::NoUsableInput { skipped } => {
                write!(
                    f,
                    "no usable input: all {} image(s) were skipped",
                    skipped.len()
                )
            }
        }
    }
}

impl std::error::Error for PlanError {}
