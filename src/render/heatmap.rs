//! PNG heatmap rendering for sampled surfaces.
//!
//! Output mirrors the shipped demo imagery: a dense value-colored raster with
//! optional ridge/fault overlays. Bitmaps are label-free; we run Plotters
//! without its font stack (see Cargo.toml), so axis annotation is left to
//! downstream tooling.

use std::path::Path;

use nalgebra::DMatrix;
use plotters::prelude::*;

use crate::domain::{MorphicSurface, SurfaceField};
use crate::error::{AppError, ErrorKind};

/// Overlay colors: high-contrast against the value ramp.
const RIDGE_COLOR: RGBColor = RGBColor(255, 255, 255);
const FAULT_COLOR: RGBColor = RGBColor(255, 48, 48);
/// Cells whose value is non-finite.
const HOLE_COLOR: RGBColor = RGBColor(96, 96, 96);

/// Rendering options for heatmap output.
#[derive(Debug, Clone)]
pub struct HeatmapStyle {
    pub width: u32,
    pub height: u32,
    pub show_ridges: bool,
    pub show_faults: bool,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            show_ridges: true,
            show_faults: true,
        }
    }
}

/// Render the raw field raster (no mask overlays).
pub fn render_field_png(
    field: &SurfaceField,
    path: &Path,
    style: &HeatmapStyle,
) -> Result<(), AppError> {
    render(field, None, None, path, style)
}

/// Render the field raster with ridge/fault overlays per the style flags.
pub fn render_surface_png(
    surface: &MorphicSurface,
    path: &Path,
    style: &HeatmapStyle,
) -> Result<(), AppError> {
    render(
        &surface.field,
        style.show_ridges.then_some(&surface.ridge),
        style.show_faults.then_some(&surface.fault),
        path,
        style,
    )
}

fn render(
    field: &SurfaceField,
    ridge: Option<&DMatrix<bool>>,
    fault: Option<&DMatrix<bool>>,
    path: &Path,
    style: &HeatmapStyle,
) -> Result<(), AppError> {
    let xs = &field.grid.xs;
    let ys = &field.grid.ys;
    if xs.len() < 2 || ys.len() < 2 {
        return Err(AppError::new(
            ErrorKind::Render,
            "Cannot render a surface with fewer than 2 samples per axis.",
        ));
    }

    let dx = field.grid.dx();
    let dy = field.grid.dy();
    let x0 = xs[0] - dx / 2.0;
    let x1 = xs[xs.len() - 1] + dx / 2.0;
    let y0 = ys[0] - dy / 2.0;
    let y1 = ys[ys.len() - 1] + dy / 2.0;
    if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0
    {
        return Err(AppError::new(
            ErrorKind::Render,
            "Degenerate surface bounds; nothing to render.",
        ));
    }

    // Color scale over the finite values only; holes get a flat gray.
    let mut z_min = f64::INFINITY;
    let mut z_max = f64::NEG_INFINITY;
    for &v in field.z.iter() {
        if v.is_finite() {
            z_min = z_min.min(v);
            z_max = z_max.max(v);
        }
    }
    let z_span = if z_min.is_finite() && z_max > z_min {
        z_max - z_min
    } else {
        1.0
    };

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::new(ErrorKind::Render, format!("Failed to clear bitmap: {e}")))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(8)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(|e| AppError::new(ErrorKind::Render, format!("Failed to build chart: {e}")))?;

    let cell = |i: usize, j: usize| {
        let x = xs[j];
        let y = ys[i];
        [(x - dx / 2.0, y - dy / 2.0), (x + dx / 2.0, y + dy / 2.0)]
    };

    let (ny, nx) = field.z.shape();
    let mut raster = Vec::with_capacity(ny * nx);
    for i in 0..ny {
        for j in 0..nx {
            let v = field.z[(i, j)];
            let color = if v.is_finite() {
                value_ramp((v - z_min) / z_span)
            } else {
                HOLE_COLOR
            };
            raster.push(Rectangle::new(cell(i, j), color.filled()));
        }
    }
    chart
        .draw_series(raster)
        .map_err(|e| AppError::new(ErrorKind::Render, format!("Failed to draw raster: {e}")))?;

    // Overlays sit on top of the raster; faults last so they stay visible
    // where both masks fire.
    for (mask, color) in [(ridge, RIDGE_COLOR), (fault, FAULT_COLOR)] {
        let Some(mask) = mask else {
            continue;
        };
        let mut cells = Vec::new();
        for i in 0..ny.min(mask.nrows()) {
            for j in 0..nx.min(mask.ncols()) {
                if mask[(i, j)] {
                    cells.push(Rectangle::new(cell(i, j), color.mix(0.65).filled()));
                }
            }
        }
        chart
            .draw_series(cells)
            .map_err(|e| AppError::new(ErrorKind::Render, format!("Failed to draw overlay: {e}")))?;
    }

    root.present().map_err(|e| {
        AppError::new(
            ErrorKind::Render,
            format!("Failed to write '{}': {e}", path.display()),
        )
    })
}

/// Compact dark-to-warm color ramp built from linear segments.
fn value_ramp(t: f64) -> RGBColor {
    const STOPS: [(f64, (u8, u8, u8)); 4] = [
        (0.0, (12, 8, 42)),
        (0.35, (121, 28, 109)),
        (0.7, (240, 105, 60)),
        (1.0, (250, 250, 190)),
    ];

    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    for w in STOPS.windows(2) {
        let (t0, c0) = w[0];
        let (t1, c1) = w[1];
        if t <= t1 {
            let u = (t - t0) / (t1 - t0);
            return RGBColor(
                lerp(c0.0, c1.0, u),
                lerp(c0.1, c1.1, u),
                lerp(c0.2, c1.2, u),
            );
        }
    }
    let (_, c) = STOPS[STOPS.len() - 1];
    RGBColor(c.0, c.1, c.2)
}

fn lerp(a: u8, b: u8, u: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * u)
        .round()
        .clamp(0.0, 255.0) as u8
}
