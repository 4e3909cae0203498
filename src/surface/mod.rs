//! Surface sampling and analytics orchestration.
//!
//! Responsibilities:
//!
//! - sample a caller-supplied scalar field on a uniform grid
//! - derive the ridge/fault masks from the sampled field
//! - extract 1D slices at fixed y

pub mod analytics;
pub mod sampler;
pub mod slice;

pub use analytics::*;
pub use sampler::*;
pub use slice::*;
