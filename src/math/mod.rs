//! Mathematical utilities: grid construction, finite-difference stencils,
//! and quantiles.

pub mod grid;
pub mod quantile;
pub mod stencil;

pub use grid::*;
pub use quantile::*;
pub use stencil::*;
