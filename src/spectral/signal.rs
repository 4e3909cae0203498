//! Damped harmonic oscillator signals.
//!
//! Law: `y'' + 2*gamma*y' + omega0^2*y = 0`, represented by the underdamped
//! solution `y(t) = exp(-gamma*t) * cos(2*pi*omega0*t)` (unit amplitude,
//! zero phase). The same time axis is shared by every cell of a sweep.

use crate::error::{AppError, ErrorKind};
use crate::math::lin_space;

/// Uniform time axis `[0, t_max]` with `n` samples.
pub fn time_axis(t_max: f64, n: usize) -> Result<Vec<f64>, AppError> {
    if !(t_max.is_finite() && t_max > 0.0) {
        return Err(AppError::new(
            ErrorKind::InvalidSignal,
            format!("Invalid signal duration: {t_max} (must be finite and > 0)."),
        ));
    }
    if n < 2 {
        return Err(AppError::new(
            ErrorKind::InvalidSignal,
            format!("Signals need at least 2 samples, got {n}."),
        ));
    }
    lin_space(0.0, t_max, n)
}

/// Sample `exp(-gamma*t) * cos(2*pi*omega0*t)` on the given time axis.
pub fn damped_oscillator(ts: &[f64], omega0: f64, gamma: f64) -> Vec<f64> {
    ts.iter()
        .map(|&t| (-gamma * t).exp() * (2.0 * std::f64::consts::PI * omega0 * t).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn time_axis_spans_the_duration() {
        let ts = time_axis(10.0, 4000).unwrap();
        assert_eq!(ts.len(), 4000);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[3999], 10.0);
    }

    #[test]
    fn time_axis_rejects_degenerate_requests() {
        assert_eq!(
            time_axis(0.0, 100).unwrap_err().kind(),
            ErrorKind::InvalidSignal
        );
        assert_eq!(
            time_axis(10.0, 1).unwrap_err().kind(),
            ErrorKind::InvalidSignal
        );
    }

    #[test]
    fn oscillator_starts_at_unit_amplitude_and_decays() {
        let ts = time_axis(10.0, 1000).unwrap();
        let y = damped_oscillator(&ts, 2.0, 0.5);
        assert_eq!(y[0], 1.0);
        // The envelope bounds every sample.
        for (&t, &v) in ts.iter().zip(&y) {
            assert!(v.abs() <= (-0.5 * t).exp() + 1e-12);
        }
    }

    #[test]
    fn undamped_oscillator_does_not_decay() {
        let ts = time_axis(1.0, 9).unwrap();
        let y = damped_oscillator(&ts, 1.0, 0.0);
        // omega0 = 1 over one second: cos hits +1 at t = 0 and t = 1.
        assert!((y[0] - 1.0).abs() < 1e-12);
        assert!((y[8] - 1.0).abs() < 1e-9);
    }
}
