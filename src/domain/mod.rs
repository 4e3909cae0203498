//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - sampling/analytics configuration (`SurfaceConfig`, `SweepConfig`)
//! - computed surfaces (`SurfaceGrid`, `SurfaceField`, `MorphicSurface`)
//! - derived views (`SurfaceSlice`)
//! - the surface JSON schema (`SurfaceFile`)

pub mod types;

pub use types::*;
