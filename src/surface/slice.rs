//! 1D cross-sections of sampled surfaces.

use crate::domain::{MorphicSurface, SurfaceField, SurfaceSlice};
use crate::error::{AppError, ErrorKind};
use crate::math::nearest_index;

/// Extract the grid row nearest `y_value`.
///
/// Ties break toward the lower index; out-of-range targets clamp to the
/// boundary row rather than erroring. A NaN `y_value` selects the first row
/// (no distance comparison succeeds). The returned slice owns copies of the
/// coordinate and value rows.
pub fn slice_at_y(field: &SurfaceField, y_value: f64) -> Result<SurfaceSlice, AppError> {
    let Some(row) = nearest_index(&field.grid.ys, y_value) else {
        return Err(AppError::new(
            ErrorKind::EmptySurface,
            "Cannot slice a surface with no grid rows.",
        ));
    };

    let z = field.z.row(row).iter().copied().collect();
    Ok(SurfaceSlice {
        row,
        y: field.grid.ys[row],
        xs: field.grid.xs.clone(),
        z,
    })
}

impl MorphicSurface {
    /// Convenience wrapper over [`slice_at_y`] for a full analytics bundle.
    pub fn slice_at_y(&self, y_value: f64) -> Result<SurfaceSlice, AppError> {
        slice_at_y(&self.field, y_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SurfaceConfig, SurfaceGrid};
    use crate::error::ErrorKind;
    use crate::surface::sampler::sample_field;
    use nalgebra::DMatrix;

    fn field() -> SurfaceField {
        let config = SurfaceConfig {
            x_range: (0.0, 4.0),
            y_range: (0.0, 3.0),
            nx: 5,
            ny: 4,
            ridge_tol: 0.0,
            fault_quantile: 0.5,
        };
        // z = x + 100*y makes each row recognizable.
        sample_field(&config, |x, y| x + 100.0 * y).unwrap()
    }

    #[test]
    fn exact_grid_y_returns_that_row() {
        let slice = slice_at_y(&field(), 2.0).unwrap();
        assert_eq!(slice.row, 2);
        assert_eq!(slice.y, 2.0);
        assert_eq!(slice.xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(slice.z, vec![200.0, 201.0, 202.0, 203.0, 204.0]);
    }

    #[test]
    fn nearest_row_wins_with_low_tie() {
        // 0.5 is equidistant from rows at y=0 and y=1.
        let slice = slice_at_y(&field(), 0.5).unwrap();
        assert_eq!(slice.row, 0);
    }

    #[test]
    fn out_of_range_clamps_to_boundary_rows() {
        let below = slice_at_y(&field(), -10.0).unwrap();
        assert_eq!(below.row, 0);
        let above = slice_at_y(&field(), 10.0).unwrap();
        assert_eq!(above.row, 3);
        assert_eq!(above.y, 3.0);
    }

    #[test]
    fn slicing_does_not_mutate_the_field() {
        let f = field();
        let before = f.clone();
        let mut slice = slice_at_y(&f, 1.0).unwrap();
        slice.z[0] = -999.0;
        slice.xs[0] = -999.0;
        assert_eq!(f, before);
    }

    #[test]
    fn rowless_surface_is_empty_surface_error() {
        let empty = SurfaceField {
            grid: SurfaceGrid {
                xs: vec![0.0, 1.0],
                ys: vec![],
            },
            z: DMatrix::zeros(0, 2),
        };
        let err = slice_at_y(&empty, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySurface);
    }
}
