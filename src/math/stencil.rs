//! Finite-difference stencils over sampled fields.
//!
//! Gradients use central differences in the interior and one-sided differences
//! on boundary rows/columns, so derived masks cover the full grid instead of
//! shrinking by one cell per side.
//!
//! Non-finite field values poison every stencil that touches them; the
//! resulting non-finite magnitudes are the caller's signal to exclude those
//! cells from thresholding.

use nalgebra::DMatrix;

/// Elementwise gradient magnitude `sqrt((dz/dx)^2 + (dz/dy)^2)`.
///
/// `dx`/`dy` are the uniform grid spacings. For a single-column (or
/// single-row) field the missing direction contributes zero.
pub fn gradient_magnitude(z: &DMatrix<f64>, dx: f64, dy: f64) -> DMatrix<f64> {
    let (ny, nx) = z.shape();
    DMatrix::from_fn(ny, nx, |i, j| {
        let gx = if nx < 2 {
            0.0
        } else if j == 0 {
            (z[(i, 1)] - z[(i, 0)]) / dx
        } else if j == nx - 1 {
            (z[(i, nx - 1)] - z[(i, nx - 2)]) / dx
        } else {
            (z[(i, j + 1)] - z[(i, j - 1)]) / (2.0 * dx)
        };

        let gy = if ny < 2 {
            0.0
        } else if i == 0 {
            (z[(1, j)] - z[(0, j)]) / dy
        } else if i == ny - 1 {
            (z[(ny - 1, j)] - z[(ny - 2, j)]) / dy
        } else {
            (z[(i + 1, j)] - z[(i - 1, j)]) / (2.0 * dy)
        };

        (gx * gx + gy * gy).sqrt()
    })
}
