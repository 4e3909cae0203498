//! Parameter sweeps: damped-oscillator spectral surfaces.
//!
//! Each (omega0, gamma) cell simulates the oscillator and reduces the signal
//! with the chosen analytic. Rows (fixed gamma) are evaluated in parallel;
//! the assembled surface is deterministic because every cell is a pure
//! function of its coordinates.
//!
//! The sweep output is an ordinary [`SurfaceField`] (omega0 on x, gamma on
//! y), so it feeds the same analytics, slicing, rendering, and export paths
//! as a directly sampled scene.

use nalgebra::DMatrix;
use rayon::prelude::*;
use rustfft::FftPlanner;

use crate::domain::{SpectralAnalytic, SurfaceField, SurfaceGrid, SweepConfig};
use crate::error::AppError;
use crate::math::lin_space;
use crate::spectral::fourier::fourier_peak_with_plan;
use crate::spectral::signal::{damped_oscillator, time_axis};
use crate::spectral::wavelet::MorletBank;

/// Sweep the oscillator family through `analytic` and sample the result.
pub fn compute_spectral_surface(
    config: &SweepConfig,
    analytic: SpectralAnalytic,
) -> Result<SurfaceField, AppError> {
    let xs = lin_space(config.freq_range.0, config.freq_range.1, config.n_freq)?;
    let ys = lin_space(config.gamma_range.0, config.gamma_range.1, config.n_gamma)?;
    let ts = time_axis(config.t_max, config.n_samples)?;

    let rows: Vec<Vec<f64>> = match analytic {
        SpectralAnalytic::Fourier => {
            let mut planner = FftPlanner::new();
            let fft = planner.plan_fft_forward(config.n_samples);
            ys.par_iter()
                .map(|&gamma| {
                    xs.iter()
                        .map(|&omega0| {
                            let sig = damped_oscillator(&ts, omega0, gamma);
                            fourier_peak_with_plan(fft.as_ref(), &sig)
                        })
                        .collect()
                })
                .collect()
        }
        SpectralAnalytic::Wavelet => {
            let bank = MorletBank::new(config.n_samples, config.max_scale, config.omega_w)?;
            ys.par_iter()
                .map(|&gamma| {
                    xs.iter()
                        .map(|&omega0| {
                            let sig = damped_oscillator(&ts, omega0, gamma);
                            bank.peak_amplitude(&sig)
                        })
                        .collect::<Result<Vec<f64>, AppError>>()
                })
                .collect::<Result<Vec<Vec<f64>>, AppError>>()?
        }
    };

    let z = DMatrix::from_fn(config.n_gamma, config.n_freq, |i, j| rows[i][j]);
    Ok(SurfaceField {
        grid: SurfaceGrid { xs, ys },
        z,
    })
}
