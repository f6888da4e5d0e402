// Generated LUT literals carry full round-trip precision
#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! wash-batch: perceptual color descriptors and wash-minimal dye batching
//!
//! Dyeing a garment leaves residue in the machine. Going from a light color
//! to a similar, slightly darker one is harmless, but a large jump in color
//! (or certain dyes that always contaminate) means the equipment has to be
//! washed first. This crate turns a set of dominant colors into a dyeing
//! order and groups that order into batches that need no wash in between.
//!
//! # Quick Start
//!
//! The [`WashPlanner`] is the primary entry point:
//!
//! ```
//! use wash_batch::{ImageInput, PlanConfig, Rgb, WashPlanner};
//!
//! let planner = WashPlanner::new(PlanConfig::default());
//! let plan = planner
//!     .plan(vec![
//!         ImageInput::with_color("red.png", Rgb::new(255, 0, 0)),
//!         ImageInput::with_color("white.png", Rgb::new(255, 255, 255)),
//!         ImageInput::with_color("cream.png", Rgb::new(250, 250, 245)),
//!     ])
//!     .unwrap();
//!
//! // White and cream share a batch, red always stands alone
//! assert_eq!(plan.batches().len(), 2);
//! assert_eq!(plan.washes_saved(), 1);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! ImageInput (dominant color, or fallback pixel)
//!     |
//!     v
//! ColorDescriptor         hex, lightness, hue, saturation, Lab
//!     |                   + WashRules classification
//!     v
//! sequence()              stable sort, lightest first
//!     |
//!     v
//! BatchPartitioner        greedy: break on mandatory wash or ΔE00 > τ
//!     |
//!     v
//! WashPlan                ordered, batches, washes_saved, skipped
//! ```
//!
//! # Color Science
//!
//! Three notions of "light" are in play and they are not the same
//! quantity:
//!
//! | Quantity | Formula | Used For |
//! |----------|---------|----------|
//! | **Brightness** | YIQ luma `0.299R + 0.587G + 0.114B`, native 0-255 | Near-black rule |
//! | **Lightness** | Brightness scaled to 0-100 | Ranking, reports |
//! | **Lab L\*** | CIE L\*a\*b\* (D65) | Part of the ΔE00 distance |
//!
//! Ranking on luma is what dye houses do by eye: a light shade goes into
//! the machine before a dark one. The batching distance is CIEDE2000 in
//! Lab, which tracks perceived difference far better than Euclidean RGB
//! or Lab (ΔE76), particularly for blues and near-neutrals.
//!
//! ## Mandatory washes
//!
//! [`WashRules`] flags two dye families regardless of their neighbors:
//!
//! - **Near-black**: brightness at or below `black_brightness_max` (10 on 0-255)
//! - **Red**: chromatic colors with HSL hue in `[0, wash_hue_max]` (30°)
//!
//! Achromatic colors (whites, greys) have an HSL hue of 0 by convention,
//! which is not a red. The hue rule only applies when saturation is
//! positive.
//!
//! ## Batching policy
//!
//! Partitioning is a single greedy pass. Each color is compared with the
//! color immediately before it, not with the first color of the batch, so
//! a gradual ramp stays in one batch. Setting the threshold to
//! `f64::INFINITY` turns the distance rule off and only mandatory washes
//! split batches.

pub mod api;
pub mod classify;
pub mod color;
pub mod descriptor;
pub mod plan;

#[cfg(test)]
mod domain_tests;

pub use api::{ImageInput, PlanConfig, PlanError, SkipReason, SkippedImage, WashPlan, WashPlanner};
pub use classify::{WashReason, WashRules};
pub use color::{ciede2000, Hsl, Lab, ParseColorError, Rgb};
pub use descriptor::ColorDescriptor;
pub use plan::{sequence, washes_saved, Batch, BatchPartitioner};
