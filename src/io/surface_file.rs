//! Read/write surface JSON files.
//!
//! Surface JSON is the "portable" representation of a computed morphic
//! surface:
//! - grid vectors (x and y axes)
//! - row-major field values
//! - both masks and the thresholds they were computed with
//!
//! The schema is defined by `domain::SurfaceFile`.

use std::fs::File;
use std::path::Path;

use nalgebra::DMatrix;

use crate::domain::{MorphicSurface, SurfaceField, SurfaceFile, SurfaceGrid};
use crate::error::{AppError, ErrorKind};

/// Write a surface JSON file.
///
/// `serde_json` would emit `null` for non-finite values, and nulls can never
/// be read back into `f64` fields; we refuse up front rather than writing a
/// file that cannot round-trip.
pub fn write_surface_json(path: &Path, surface: &MorphicSurface) -> Result<(), AppError> {
    if surface.field.z.iter().any(|v| !v.is_finite()) {
        return Err(AppError::new(
            ErrorKind::Io,
            "Surface contains non-finite values and cannot be exported to JSON.",
        ));
    }

    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create surface JSON '{}': {e}", path.display()),
        )
    })?;

    let schema = to_schema(surface);
    serde_json::to_writer_pretty(file, &schema)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write surface JSON: {e}")))?;

    Ok(())
}

/// Read a surface JSON file.
pub fn read_surface_json(path: &Path) -> Result<MorphicSurface, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to open surface JSON '{}': {e}", path.display()),
        )
    })?;
    let schema: SurfaceFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Invalid surface JSON: {e}")))?;
    from_schema(schema)
}

fn to_schema(surface: &MorphicSurface) -> SurfaceFile {
    SurfaceFile {
        tool: "morphic".to_string(),
        ridge_tol: surface.ridge_tol,
        fault_quantile: surface.fault_quantile,
        xs: surface.field.grid.xs.clone(),
        ys: surface.field.grid.ys.clone(),
        z: matrix_rows(&surface.field.z),
        ridge: matrix_rows(&surface.ridge),
        fault: matrix_rows(&surface.fault),
    }
}

fn from_schema(schema: SurfaceFile) -> Result<MorphicSurface, AppError> {
    let ny = schema.ys.len();
    let nx = schema.xs.len();

    let z = rows_to_matrix(&schema.z, ny, nx, "z")?;
    let ridge = rows_to_matrix(&schema.ridge, ny, nx, "ridge")?;
    let fault = rows_to_matrix(&schema.fault, ny, nx, "fault")?;

    Ok(MorphicSurface {
        field: SurfaceField {
            grid: SurfaceGrid {
                xs: schema.xs,
                ys: schema.ys,
            },
            z,
        },
        ridge,
        fault,
        ridge_tol: schema.ridge_tol,
        fault_quantile: schema.fault_quantile,
    })
}

fn matrix_rows<T: nalgebra::Scalar + Copy>(m: &DMatrix<T>) -> Vec<Vec<T>> {
    (0..m.nrows())
        .map(|i| m.row(i).iter().copied().collect())
        .collect()
}

fn rows_to_matrix<T: nalgebra::Scalar + Copy>(
    rows: &[Vec<T>],
    ny: usize,
    nx: usize,
    label: &str,
) -> Result<DMatrix<T>, AppError> {
    if rows.len() != ny || rows.iter().any(|r| r.len() != nx) {
        return Err(AppError::new(
            ErrorKind::Io,
            format!("Malformed surface JSON: '{label}' shape does not match the grid ({ny}x{nx})."),
        ));
    }
    Ok(DMatrix::from_fn(ny, nx, |i, j| rows[i][j]))
}
