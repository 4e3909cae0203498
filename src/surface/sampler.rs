//! Surface sampling: evaluate a scalar field on a uniform grid.
//!
//! `z_direct` is any pure scalar function of (x, y); the grid is the full
//! cross product of the two axes (meshgrid semantics), so the sampled matrix
//! has shape (ny, nx) with `z[(i, j)] = f(xs[j], ys[i])`.
//!
//! Validation happens before any field evaluation. Non-finite field values
//! are never errors here; the analytics absorb them (neither ridge nor fault).

use nalgebra::DMatrix;

use crate::domain::{MorphicSurface, SurfaceConfig, SurfaceField, SurfaceGrid};
use crate::error::{AppError, ErrorKind};
use crate::math::lin_space;
use crate::surface::analytics::analyze_field;

/// Sample `z_direct` on the configured grid without computing analytics.
pub fn sample_field<F>(config: &SurfaceConfig, z_direct: F) -> Result<SurfaceField, AppError>
where
    F: Fn(f64, f64) -> f64,
{
    let (x_min, x_max) = config.x_range;
    let (y_min, y_max) = config.y_range;
    let xs = lin_space(x_min, x_max, config.nx)?;
    let ys = lin_space(y_min, y_max, config.ny)?;

    let z = DMatrix::from_fn(config.ny, config.nx, |i, j| z_direct(xs[j], ys[i]));

    Ok(SurfaceField {
        grid: SurfaceGrid { xs, ys },
        z,
    })
}

/// Sample `z_direct` and derive the ridge/fault masks.
///
/// Deterministic: re-evaluating `z_direct` on the returned grid reproduces
/// the surface bit-for-bit (given a deterministic field).
pub fn compute_morphic_surface<F>(
    config: &SurfaceConfig,
    z_direct: F,
) -> Result<MorphicSurface, AppError>
where
    F: Fn(f64, f64) -> f64,
{
    // Reject a bad quantile before spending any time on evaluation.
    if !(config.fault_quantile >= 0.0 && config.fault_quantile <= 1.0) {
        return Err(AppError::new(
            ErrorKind::InvalidQuantile,
            format!(
                "Invalid fault quantile: {} (must lie in [0, 1]).",
                config.fault_quantile
            ),
        ));
    }

    let field = sample_field(config, z_direct)?;
    analyze_field(field, config.ridge_tol, config.fault_quantile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn base_config() -> SurfaceConfig {
        SurfaceConfig {
            x_range: (-2.0, 2.0),
            y_range: (-1.0, 3.0),
            nx: 9,
            ny: 5,
            ridge_tol: 1e-3,
            fault_quantile: 0.9,
        }
    }

    #[test]
    fn sampled_surface_has_meshgrid_shape_and_endpoints() {
        let field = sample_field(&base_config(), |x, y| x + 10.0 * y).unwrap();
        assert_eq!(field.z.shape(), (5, 9));
        assert_eq!(field.grid.xs[0], -2.0);
        assert_eq!(field.grid.xs[8], 2.0);
        assert_eq!(field.grid.ys[0], -1.0);
        assert_eq!(field.grid.ys[4], 3.0);
        // z[(i, j)] = f(xs[j], ys[i]).
        assert_eq!(field.z[(0, 0)], -2.0 + 10.0 * -1.0);
        assert_eq!(field.z[(4, 8)], 2.0 + 10.0 * 3.0);
    }

    #[test]
    fn resampling_reproduces_surface_exactly() {
        let f = |x: f64, y: f64| (x * y).sin() + x * x;
        let surface = compute_morphic_surface(&base_config(), f).unwrap();
        for (i, &y) in surface.field.grid.ys.iter().enumerate() {
            for (j, &x) in surface.field.grid.xs.iter().enumerate() {
                assert_eq!(surface.field.z[(i, j)], f(x, y));
            }
        }
    }

    #[test]
    fn reversed_range_is_invalid_range() {
        let mut config = base_config();
        config.x_range = (2.0, -2.0);
        let err = compute_morphic_surface(&config, |x, _| x).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn single_sample_axis_is_invalid_grid_size() {
        let mut config = base_config();
        config.nx = 1;
        let err = compute_morphic_surface(&config, |x, _| x).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGridSize);
    }

    #[test]
    fn out_of_bounds_quantile_is_invalid_quantile() {
        let mut config = base_config();
        config.fault_quantile = 1.5;
        let err = compute_morphic_surface(&config, |x, _| x).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantile);
    }

    #[test]
    fn quantile_is_checked_before_field_evaluation() {
        let mut config = base_config();
        config.fault_quantile = -0.1;
        let evaluated = std::cell::Cell::new(false);
        let err = compute_morphic_surface(&config, |x, _| {
            evaluated.set(true);
            x
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantile);
        assert!(!evaluated.get());
    }

    #[test]
    fn non_finite_field_values_do_not_fail() {
        let surface = compute_morphic_surface(&base_config(), |x, y| {
            if x == 0.0 { f64::NAN } else { y / x }
        })
        .unwrap();
        assert_eq!(surface.field.z.shape(), (5, 9));
    }
}
