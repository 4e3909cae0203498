//! Spectral analytics over the damped-oscillator family.
//!
//! Responsibilities:
//!
//! - simulate damped harmonic oscillator signals
//! - reduce a signal to its Fourier or Morlet-wavelet peak amplitude
//! - sweep an (omega0, gamma) grid into a sampled surface (parallel)

pub mod fourier;
pub mod signal;
pub mod sweep;
pub mod wavelet;

pub use fourier::*;
pub use signal::*;
pub use sweep::*;
pub use wavelet::*;
