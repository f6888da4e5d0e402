//! Dyewash - dye-wash batch planner
//!
//! HTTP service and CLI around the `wash-batch` planner: decodes garment
//! images, extracts their dominant colors and returns a wash-minimal dyeing
//! schedule. This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod report;
pub mod server;
pub mod services;
