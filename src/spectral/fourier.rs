//! Fourier peak analytic.
//!
//! The analytic reduces a real signal to the maximum magnitude of its
//! spectrum. We run a full complex FFT and read the first `n/2 + 1` bins,
//! which is exactly the real-input (rfft) magnitude set; the mirrored upper
//! half carries no extra information for a real signal.

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

/// Peak spectral magnitude of a real signal.
///
/// Returns 0.0 for an empty signal. For sweeps, plan once and call
/// [`fourier_peak_with_plan`] instead.
pub fn fourier_peak(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(signal.len());
    fourier_peak_with_plan(fft.as_ref(), signal)
}

/// Peak spectral magnitude using a pre-planned FFT of matching length.
pub fn fourier_peak_with_plan(fft: &dyn Fft<f64>, signal: &[f64]) -> f64 {
    let mut buf: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    fft.process(&mut buf);

    let half = buf.len() / 2;
    buf[..=half].iter().map(|c| c.norm()).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_signal_peaks_at_dc() {
        let signal = vec![1.0; 64];
        // All energy in bin 0: magnitude n.
        assert!((fourier_peak(&signal) - 64.0).abs() < 1e-9);
    }

    #[test]
    fn pure_cosine_peaks_at_half_n() {
        // cos on an exact bin: two bins of magnitude n/2, one in each half;
        // the rfft half sees exactly one.
        let n = 128;
        let signal: Vec<f64> = (0..n)
            .map(|k| (2.0 * std::f64::consts::PI * 8.0 * k as f64 / n as f64).cos())
            .collect();
        assert!((fourier_peak(&signal) - 64.0).abs() < 1e-9);
    }

    #[test]
    fn stronger_damping_lowers_the_peak() {
        use crate::spectral::signal::{damped_oscillator, time_axis};
        let ts = time_axis(10.0, 512).unwrap();
        let light = fourier_peak(&damped_oscillator(&ts, 2.0, 0.1));
        let heavy = fourier_peak(&damped_oscillator(&ts, 2.0, 1.5));
        assert!(light > heavy);
    }

    #[test]
    fn empty_signal_is_zero() {
        assert_eq!(fourier_peak(&[]), 0.0);
    }
}
