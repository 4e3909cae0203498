//! Morlet continuous-wavelet peak analytic.
//!
//! The analytic reduces a real signal to the maximum magnitude of its Morlet
//! CWT over a range of integer scales. Per-scale wavelets are
//!
//! `psi_s(k) = sqrt(1/s) * pi^(-1/4) * exp(i*w*x) * exp(-x^2/2)`,
//! `x = (k - (M-1)/2) / s`, `M = min(10*s, n)`,
//!
//! and each scale row is the "same"-mode linear convolution of the signal
//! against the conjugated wavelet.
//!
//! Convolutions run in the frequency domain: every kernel spectrum is
//! precomputed at one shared padded length, so a sweep pays for planning once
//! and each cell costs one forward FFT plus one inverse FFT per scale.

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use crate::error::{AppError, ErrorKind};

/// Precomputed Morlet kernel spectra for signals of a fixed length.
///
/// The bank is immutable after construction and safe to share across threads.
pub struct MorletBank {
    n: usize,
    padded: usize,
    fwd: Arc<dyn Fft<f64>>,
    inv: Arc<dyn Fft<f64>>,
    /// Per-scale (kernel length, conjugated kernel spectrum).
    kernels: Vec<(usize, Vec<Complex64>)>,
}

impl std::fmt::Debug for MorletBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorletBank")
            .field("n", &self.n)
            .field("padded", &self.padded)
            .field("scales", &self.kernels.len())
            .finish()
    }
}

impl MorletBank {
    /// Build a bank for signals of length `n` with scales `1..=max_scale` and
    /// center frequency `w`.
    pub fn new(n: usize, max_scale: usize, w: f64) -> Result<Self, AppError> {
        if n < 2 {
            return Err(AppError::new(
                ErrorKind::InvalidSignal,
                format!("Wavelet banks need signals of at least 2 samples, got {n}."),
            ));
        }
        if max_scale < 1 {
            return Err(AppError::new(
                ErrorKind::InvalidSignal,
                "Wavelet banks need at least one scale.",
            ));
        }
        if !(w.is_finite() && w > 0.0) {
            return Err(AppError::new(
                ErrorKind::InvalidSignal,
                format!("Invalid Morlet center frequency: {w} (must be finite and > 0)."),
            ));
        }

        let m_max = (10 * max_scale).min(n);
        // One shared length covering linear (not circular) convolution for
        // every scale; power of two keeps the FFTs cheap.
        let padded = (n + m_max - 1).next_power_of_two();

        let mut planner = FftPlanner::new();
        let fwd = planner.plan_fft_forward(padded);
        let inv = planner.plan_fft_inverse(padded);

        let norm = std::f64::consts::PI.powf(-0.25);
        let mut kernels = Vec::with_capacity(max_scale);
        for scale in 1..=max_scale {
            let m = (10 * scale).min(n);
            let s = scale as f64;
            let amp = norm / s.sqrt();

            let mut buf = vec![Complex64::new(0.0, 0.0); padded];
            for (k, slot) in buf.iter_mut().enumerate().take(m) {
                let x = (k as f64 - (m as f64 - 1.0) / 2.0) / s;
                let env = amp * (-0.5 * x * x).exp();
                let phase = w * x;
                // Conjugated sample: the transform convolves against conj(psi).
                *slot = Complex64::new(env * phase.cos(), -env * phase.sin());
            }
            fwd.process(&mut buf);
            kernels.push((m, buf));
        }

        Ok(Self {
            n,
            padded,
            fwd,
            inv,
            kernels,
        })
    }

    /// Signal length this bank was built for.
    pub fn signal_len(&self) -> usize {
        self.n
    }

    /// Peak CWT magnitude of `signal` across all scales and shifts.
    pub fn peak_amplitude(&self, signal: &[f64]) -> Result<f64, AppError> {
        if signal.len() != self.n {
            return Err(AppError::new(
                ErrorKind::InvalidSignal,
                format!(
                    "Signal length {} does not match the bank's expected length {}.",
                    signal.len(),
                    self.n
                ),
            ));
        }

        let mut sig = vec![Complex64::new(0.0, 0.0); self.padded];
        for (slot, &v) in sig.iter_mut().zip(signal) {
            *slot = Complex64::new(v, 0.0);
        }
        self.fwd.process(&mut sig);

        // rustfft's inverse is unnormalized; fold the 1/L into the readout.
        let inv_scale = 1.0 / self.padded as f64;
        let mut peak = 0.0_f64;
        let mut buf = vec![Complex64::new(0.0, 0.0); self.padded];
        for (m, spectrum) in &self.kernels {
            for (slot, (&a, &b)) in buf.iter_mut().zip(sig.iter().zip(spectrum.iter())) {
                *slot = a * b;
            }
            self.inv.process(&mut buf);

            // "same"-mode window of the linear convolution.
            let start = (m - 1) / 2;
            for c in &buf[start..start + self.n] {
                let mag = c.norm() * inv_scale;
                if mag > peak {
                    peak = mag;
                }
            }
        }
        Ok(peak)
    }
}
