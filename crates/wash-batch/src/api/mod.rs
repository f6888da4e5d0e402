//! Public API for the wash-batch crate.
//!
//! This module provides the high-level entry point: [`WashPlanner`] and the
//! [`PlanError`] it returns when nothing can be scheduled.

mod error;
mod planner;

pub use error::PlanError;
pub use planner::{ImageInput, PlanConfig, SkipReason, SkippedImage, WashPlan, WashPlanner};
