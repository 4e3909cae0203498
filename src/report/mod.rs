//! Reporting utilities: surface statistics and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the sampling/analytics code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod ascii;

pub use ascii::*;

use crate::domain::MorphicSurface;

/// Aggregate statistics for a computed surface.
#[derive(Debug, Clone)]
pub struct SurfaceStats {
    pub nx: usize,
    pub ny: usize,
    /// Extrema over finite values only; NaN when nothing is finite.
    pub z_min: f64,
    pub z_max: f64,
    pub n_nonfinite: usize,
    pub ridge_cells: usize,
    pub fault_cells: usize,
}

/// Compute summary statistics for a surface.
pub fn surface_stats(surface: &MorphicSurface) -> SurfaceStats {
    let mut z_min = f64::INFINITY;
    let mut z_max = f64::NEG_INFINITY;
    let mut n_nonfinite = 0usize;
    for &v in surface.field.z.iter() {
        if v.is_finite() {
            z_min = z_min.min(v);
            z_max = z_max.max(v);
        } else {
            n_nonfinite += 1;
        }
    }
    if !z_min.is_finite() {
        z_min = f64::NAN;
        z_max = f64::NAN;
    }

    SurfaceStats {
        nx: surface.field.grid.nx(),
        ny: surface.field.grid.ny(),
        z_min,
        z_max,
        n_nonfinite,
        ridge_cells: surface.ridge.iter().filter(|&&m| m).count(),
        fault_cells: surface.fault.iter().filter(|&&m| m).count(),
    }
}

/// Format the full run summary (grid + value stats + mask coverage).
pub fn format_surface_summary(title: &str, surface: &MorphicSurface) -> String {
    let stats = surface_stats(surface);
    let cells = (stats.nx * stats.ny).max(1) as f64;
    let xs = &surface.field.grid.xs;
    let ys = &surface.field.grid.ys;

    let mut out = String::new();
    out.push_str(&format!("=== morphic - {title} ===\n"));
    out.push_str(&format!(
        "Grid: {}x{} | x=[{:.3}, {:.3}] | y=[{:.3}, {:.3}]\n",
        stats.nx,
        stats.ny,
        xs.first().copied().unwrap_or(f64::NAN),
        xs.last().copied().unwrap_or(f64::NAN),
        ys.first().copied().unwrap_or(f64::NAN),
        ys.last().copied().unwrap_or(f64::NAN),
    ));
    out.push_str(&format!(
        "Z: [{:.4}, {:.4}] | non-finite cells: {}\n",
        stats.z_min, stats.z_max, stats.n_nonfinite
    ));
    out.push_str(&format!(
        "Ridge: {} cells ({:.2}%) at tol={}\n",
        stats.ridge_cells,
        100.0 * stats.ridge_cells as f64 / cells,
        surface.ridge_tol
    ));
    out.push_str(&format!(
        "Fault: {} cells ({:.2}%) above q={}\n",
        stats.fault_cells,
        100.0 * stats.fault_cells as f64 / cells,
        surface.fault_quantile
    ));
    out
}
