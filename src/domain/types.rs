//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during sampling and analytics
//! - exported to JSON/CSV
//! - reloaded later for slicing or re-rendering

use clap::ValueEnum;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Inputs for surface sampling and the derived mask analytics.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// X window as (min, max), min < max.
    pub x_range: (f64, f64),
    /// Y window as (min, max), min < max.
    pub y_range: (f64, f64),
    /// Grid resolution along x (>= 2).
    pub nx: usize,
    /// Grid resolution along y (>= 2).
    pub ny: usize,
    /// Gradient magnitudes at or below this mark a point as ridge.
    ///
    /// Not range-checked: any non-negative tolerance is meaningful, and the
    /// caller owns the choice.
    pub ridge_tol: f64,
    /// Gradient magnitudes strictly above this quantile of all finite
    /// magnitudes mark a point as fault. Must lie in [0, 1].
    pub fault_quantile: f64,
}

/// Uniform axis-aligned sampling grid.
///
/// Both coordinate vectors are strictly increasing with exact endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SurfaceGrid {
    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    /// Uniform x step. Falls back to 1.0 for a degenerate axis so stencil
    /// divisions stay finite.
    pub fn dx(&self) -> f64 {
        step_of(&self.xs)
    }

    /// Uniform y step (same fallback as [`SurfaceGrid::dx`]).
    pub fn dy(&self) -> f64 {
        step_of(&self.ys)
    }
}

fn step_of(axis: &[f64]) -> f64 {
    if axis.len() < 2 {
        return 1.0;
    }
    (axis[axis.len() - 1] - axis[0]) / (axis.len() as f64 - 1.0)
}

/// A scalar field sampled on a grid (a surface without analytics).
///
/// Values are stored with shape (ny, nx): `z[(i, j)] = f(xs[j], ys[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceField {
    pub grid: SurfaceGrid,
    pub z: DMatrix<f64>,
}

/// A morphic surface: the sampled field plus its derived ridge/fault masks.
///
/// Immutable once returned by the pipeline; slices and exports copy out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphicSurface {
    pub field: SurfaceField,
    /// True where the field is locally near-stationary.
    pub ridge: DMatrix<bool>,
    /// True where the field jumps abruptly relative to neighbors.
    pub fault: DMatrix<bool>,
    /// Tolerance the ridge mask was computed with.
    pub ridge_tol: f64,
    /// Quantile the fault mask was computed with.
    pub fault_quantile: f64,
}

/// A 1D cross-section of a surface at (nearest) fixed y.
///
/// Owns copies of the coordinate and value rows; extracting a slice never
/// mutates the surface it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSlice {
    /// Index of the selected grid row.
    pub row: usize,
    /// Y-coordinate of the selected row (not the requested y).
    pub y: f64,
    pub xs: Vec<f64>,
    pub z: Vec<f64>,
}

/// Which spectral analytic reduces an oscillator signal to one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpectralAnalytic {
    /// Peak magnitude of the real-input FFT spectrum.
    Fourier,
    /// Peak magnitude of the Morlet continuous wavelet transform.
    Wavelet,
}

impl SpectralAnalytic {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SpectralAnalytic::Fourier => "Fourier peak amplitude",
            SpectralAnalytic::Wavelet => "Morlet wavelet peak amplitude",
        }
    }

    /// Stem used for generated PNG/JSON filenames.
    pub fn file_stem(self) -> &'static str {
        match self {
            SpectralAnalytic::Fourier => "damped_oscillator_fourier",
            SpectralAnalytic::Wavelet => "damped_oscillator_wavelet",
        }
    }
}

/// Sweep configuration for the damped-oscillator spectral surfaces.
///
/// The sweep surface uses natural frequency on x and damping on y, so the
/// output plugs into the same slicing/analytics/rendering as sampled scenes.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Natural frequency window (x axis of the sweep surface).
    pub freq_range: (f64, f64),
    /// Damping coefficient window (y axis of the sweep surface).
    pub gamma_range: (f64, f64),
    pub n_freq: usize,
    pub n_gamma: usize,
    /// Signal duration in seconds.
    pub t_max: f64,
    /// Time samples per signal.
    pub n_samples: usize,
    /// Morlet scales `1..=max_scale` (wavelet analytic only).
    pub max_scale: usize,
    /// Morlet center frequency.
    pub omega_w: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            freq_range: (1.0, 5.0),
            gamma_range: (0.1, 1.5),
            n_freq: 80,
            n_gamma: 80,
            t_max: 10.0,
            n_samples: 4000,
            max_scale: 63,
            omega_w: 5.0,
        }
    }
}

/// A saved surface file (JSON).
///
/// Grids are stored as plain vectors and values row-major (one vector per grid
/// row), so the file is readable from any tooling without this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceFile {
    pub tool: String,
    pub ridge_tol: f64,
    pub fault_quantile: f64,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub ridge: Vec<Vec<bool>>,
    pub fault: Vec<Vec<bool>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_steps_are_uniform() {
        let grid = SurfaceGrid {
            xs: vec![0.0, 0.5, 1.0],
            ys: vec![-1.0, 0.0, 1.0, 2.0],
        };
        assert!((grid.dx() - 0.5).abs() < 1e-12);
        assert!((grid.dy() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_axis_step_falls_back() {
        let grid = SurfaceGrid {
            xs: vec![3.0],
            ys: vec![],
        };
        assert_eq!(grid.dx(), 1.0);
        assert_eq!(grid.dy(), 1.0);
    }
}
