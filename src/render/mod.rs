//! Bitmap rendering for computed surfaces.

pub mod heatmap;

pub use heatmap::*;
