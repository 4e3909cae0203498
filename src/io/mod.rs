//! Input/output helpers.
//!
//! - surface JSON read/write (`surface_file`)
//! - slice CSV export (`export`)

pub mod export;
pub mod surface_file;

pub use export::*;
pub use surface_file::*;
