//! Export slices to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! plotting scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::SurfaceSlice;
use crate::error::{AppError, ErrorKind};

/// Write a slice to a CSV file with `x,z` columns.
pub fn write_slice_csv(path: &Path, slice: &SurfaceSlice) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create slice CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "x,z")
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write slice CSV header: {e}")))?;

    for (&x, &z) in slice.xs.iter().zip(&slice.z) {
        writeln!(file, "{x:.10},{z:.10}")
            .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write slice CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let slice = SurfaceSlice {
            row: 1,
            y: 0.5,
            xs: vec![0.0, 0.5, 1.0],
            z: vec![1.0, 2.0, 3.0],
        };
        let path =
            std::env::temp_dir().join(format!("morphic_slice_{}.csv", std::process::id()));
        write_slice_csv(&path, &slice).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "x,z");
        assert!(lines[1].starts_with("0.0000000000,1.0000000000"));
    }
}
