//! Ridge/fault analytics over sampled fields.
//!
//! Definitions:
//!
//! - ridge: locus of near-stationary points, gradient magnitude at or below
//!   `ridge_tol` (so an exactly flat field is ridge everywhere, even at
//!   `ridge_tol = 0`)
//! - fault: locus of abrupt change, gradient magnitude strictly above the
//!   `fault_quantile`-th quantile of all finite magnitudes (the top
//!   `1 - fault_quantile` fraction of steepest local jumps)
//!
//! Non-finite magnitudes are neither ridge nor fault and never enter the
//! quantile ranking.
//!
//! The detection rules are exposed as standalone functions over any sampled
//! field, so alternative detectors can recompute masks without re-sampling.

use nalgebra::DMatrix;

use crate::domain::{MorphicSurface, SurfaceField};
use crate::error::{AppError, ErrorKind};
use crate::math::{gradient_magnitude, quantile_finite};

/// Ridge mask from a precomputed gradient-magnitude matrix.
pub fn ridge_mask(grad: &DMatrix<f64>, ridge_tol: f64) -> DMatrix<bool> {
    grad.map(|g| g.is_finite() && g <= ridge_tol)
}

/// Fault mask from a precomputed gradient-magnitude matrix.
///
/// With no finite magnitudes at all there is no threshold to exceed and the
/// mask is empty.
pub fn fault_mask(grad: &DMatrix<f64>, fault_quantile: f64) -> Result<DMatrix<bool>, AppError> {
    if !(fault_quantile >= 0.0 && fault_quantile <= 1.0) {
        return Err(AppError::new(
            ErrorKind::InvalidQuantile,
            format!("Invalid fault quantile: {fault_quantile} (must lie in [0, 1])."),
        ));
    }

    let Some(threshold) = quantile_finite(grad.iter().copied(), fault_quantile) else {
        return Ok(DMatrix::from_element(grad.nrows(), grad.ncols(), false));
    };

    Ok(grad.map(|g| g.is_finite() && g > threshold))
}

/// Derive both masks for a sampled field and bundle the result.
pub fn analyze_field(
    field: SurfaceField,
    ridge_tol: f64,
    fault_quantile: f64,
) -> Result<MorphicSurface, AppError> {
    let grad = gradient_magnitude(&field.z, field.grid.dx(), field.grid.dy());
    let ridge = ridge_mask(&grad, ridge_tol);
    let fault = fault_mask(&grad, fault_quantile)?;

    Ok(MorphicSurface {
        field,
        ridge,
        fault,
        ridge_tol,
        fault_quantile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SurfaceConfig;
    use crate::surface::sampler::compute_morphic_surface;

    fn config(nx: usize, ny: usize, ridge_tol: f64, fault_quantile: f64) -> SurfaceConfig {
        SurfaceConfig {
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            nx,
            ny,
            ridge_tol,
            fault_quantile,
        }
    }

    #[test]
    fn constant_field_is_all_ridge_no_fault() {
        // Zero gradient everywhere: ridge holds for any tol >= 0, including 0,
        // and no cell exceeds the quantile threshold.
        let surface = compute_morphic_surface(&config(8, 6, 0.0, 0.5), |_, _| 42.0).unwrap();
        assert!(surface.ridge.iter().all(|&r| r));
        assert!(surface.fault.iter().all(|&f| !f));
    }

    #[test]
    fn fault_quantile_one_marks_nothing() {
        let surface = compute_morphic_surface(&config(8, 6, 0.0, 1.0), |x, y| x * x + y).unwrap();
        assert!(surface.fault.iter().all(|&f| !f));
    }

    #[test]
    fn step_function_faults_at_the_jump_only() {
        // One sharp jump along x at x = 0.5; everything else is flat. The top
        // decile of gradient magnitudes must be exactly the jump neighborhood.
        let nx = 20;
        let surface = compute_morphic_surface(&config(nx, 6, 1e-9, 0.9), |x, _| {
            if x < 0.5 { 0.0 } else { 1.0 }
        })
        .unwrap();

        let jump_cols: Vec<usize> = (0..nx)
            .filter(|&j| (0..6).any(|i| surface.fault[(i, j)]))
            .collect();
        assert!(!jump_cols.is_empty(), "no fault cells marked");
        // The jump sits between columns 9 and 10 on this grid; only the
        // columns whose stencil straddles it may be marked.
        for &j in &jump_cols {
            assert!((9..=11).contains(&j), "unexpected fault column {j}");
        }
        // Flat regions away from the jump stay clean.
        for i in 0..6 {
            assert!(!surface.fault[(i, 0)]);
            assert!(!surface.fault[(i, nx - 1)]);
        }
    }

    #[test]
    fn ridge_tracks_stationary_locus_of_smooth_field() {
        // z = (x - 0.5)^2 has a stationary line at x = 0.5; with a loose
        // tolerance the ridge mask concentrates around it.
        let surface =
            compute_morphic_surface(&config(21, 5, 0.06, 0.99), |x, _| (x - 0.5) * (x - 0.5))
                .unwrap();
        // Column 10 is x = 0.5 exactly.
        for i in 0..5 {
            assert!(surface.ridge[(i, 10)]);
            assert!(!surface.ridge[(i, 0)]);
            assert!(!surface.ridge[(i, 20)]);
        }
    }

    #[test]
    fn non_finite_cells_are_neither_ridge_nor_fault() {
        let surface = compute_morphic_surface(&config(7, 7, 100.0, 0.0), |x, y| {
            if x == 0.0 && y == 0.0 { f64::NAN } else { 0.0 }
        })
        .unwrap();
        // The poisoned corner has a non-finite gradient: excluded from both
        // masks even though ridge_tol is huge and the quantile is 0.
        assert!(!surface.ridge[(0, 0)]);
        assert!(!surface.fault[(0, 0)]);
        // Cells with finite zero gradient are still ridge.
        assert!(surface.ridge[(3, 3)]);
    }

    #[test]
    fn all_non_finite_field_yields_empty_masks() {
        let surface = compute_morphic_surface(&config(4, 4, 1.0, 0.5), |_, _| f64::NAN).unwrap();
        assert!(surface.ridge.iter().all(|&r| !r));
        assert!(surface.fault.iter().all(|&f| !f));
    }

    #[test]
    fn masks_share_the_surface_shape() {
        let surface = compute_morphic_surface(&config(12, 9, 1e-2, 0.95), |x, y| x * y).unwrap();
        assert_eq!(surface.ridge.shape(), surface.field.z.shape());
        assert_eq!(surface.fault.shape(), surface.field.z.shape());
    }
}
