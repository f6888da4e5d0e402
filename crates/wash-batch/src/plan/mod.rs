//! Scheduling stages
//!
//! - [`sequence`]: rank descriptors lightest first
//! - [`BatchPartitioner`]: split the ranked list into wash-free runs
//! - [`washes_saved`]: count the washes the batching avoids

mod partition;
mod savings;
mod sequence;

pub use partition::{Batch, BatchPartitioner, DEFAULT_DELTA_E_THRESHOLD};
pub use savings::washes_saved;
pub use sequence::sequence;
