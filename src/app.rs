//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - samples the requested scene or sweep
//! - derives ridge/fault analytics
//! - prints summaries and ASCII slices
//! - writes optional PNG/JSON/CSV outputs

use clap::Parser;

use crate::cli::{Command, SceneArgs, SliceArgs, SpectralArgs};
use crate::domain::{MorphicSurface, SpectralAnalytic, SurfaceConfig, SweepConfig};
use crate::error::{AppError, ErrorKind};
use crate::render::HeatmapStyle;

/// Entry point for the `morphic` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Cubic(args) => handle_scene(
            "cubic family",
            crate::scenes::cubic_config(),
            crate::scenes::cubic_family,
            &[],
            &args,
        ),
        Command::Relativity(args) => handle_scene(
            "quantum-relativity",
            crate::scenes::relativity_config(),
            crate::scenes::quantum_relativity,
            &crate::scenes::RELATIVITY_SLICE_YS,
            &args,
        ),
        Command::Spectral(args) => handle_spectral(&args),
        Command::Slice(args) => handle_slice(&args),
    }
}

fn handle_scene(
    title: &str,
    defaults: SurfaceConfig,
    field_fn: fn(f64, f64) -> f64,
    guided_slices: &[f64],
    args: &SceneArgs,
) -> Result<(), AppError> {
    let config = scene_config(defaults, args);
    let surface = crate::surface::compute_morphic_surface(&config, field_fn)?;

    println!("{}", crate::report::format_surface_summary(title, &surface));

    // Explicit --slice-y flags replace the scene's guided slices.
    let slice_ys: &[f64] = if args.slice_ys.is_empty() {
        guided_slices
    } else {
        &args.slice_ys
    };
    for &y in slice_ys {
        let slice = surface.slice_at_y(y)?;
        println!("{}", crate::report::render_ascii_slice(&slice, 72, 20));
    }

    write_outputs(&surface, args)
}

/// Apply CLI overrides on top of a scene's default configuration.
fn scene_config(mut config: SurfaceConfig, args: &SceneArgs) -> SurfaceConfig {
    config.nx = args.nx;
    config.ny = args.ny;
    if let Some(v) = args.x_min {
        config.x_range.0 = v;
    }
    if let Some(v) = args.x_max {
        config.x_range.1 = v;
    }
    if let Some(v) = args.y_min {
        config.y_range.0 = v;
    }
    if let Some(v) = args.y_max {
        config.y_range.1 = v;
    }
    if let Some(v) = args.ridge_tol {
        config.ridge_tol = v;
    }
    if let Some(v) = args.fault_quantile {
        config.fault_quantile = v;
    }
    config
}

fn write_outputs(surface: &MorphicSurface, args: &SceneArgs) -> Result<(), AppError> {
    if let Some(path) = &args.out {
        let style = HeatmapStyle {
            width: args.plot_width,
            height: args.plot_height,
            ..Default::default()
        };
        crate::render::render_surface_png(surface, path, &style)?;
        println!("Saved {}", path.display());
    }
    if let Some(path) = &args.export {
        crate::io::write_surface_json(path, surface)?;
        println!("Exported {}", path.display());
    }
    Ok(())
}

fn handle_spectral(args: &SpectralArgs) -> Result<(), AppError> {
    let sweep = SweepConfig {
        freq_range: (args.freq_min, args.freq_max),
        gamma_range: (args.gamma_min, args.gamma_max),
        n_freq: args.n_freq,
        n_gamma: args.n_gamma,
        t_max: args.t_max,
        n_samples: args.n_samples,
        ..Default::default()
    };

    let analytics: Vec<SpectralAnalytic> = match args.analytic {
        Some(a) => vec![a],
        None => vec![SpectralAnalytic::Fourier, SpectralAnalytic::Wavelet],
    };

    std::fs::create_dir_all(&args.out_dir).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create output dir '{}': {e}", args.out_dir.display()),
        )
    })?;

    for analytic in analytics {
        let field = crate::spectral::compute_spectral_surface(&sweep, analytic)?;
        let surface = crate::surface::analyze_field(field, args.ridge_tol, args.fault_quantile)?;

        println!(
            "{}",
            crate::report::format_surface_summary(analytic.display_name(), &surface)
        );

        let png = args.out_dir.join(format!("{}.png", analytic.file_stem()));
        let style = HeatmapStyle {
            width: args.plot_width,
            height: args.plot_height,
            ..Default::default()
        };
        crate::render::render_surface_png(&surface, &png, &style)?;
        println!("Saved {}", png.display());

        if args.export {
            let json = args.out_dir.join(format!("{}.json", analytic.file_stem()));
            crate::io::write_surface_json(&json, &surface)?;
            println!("Exported {}", json.display());
        }
    }

    Ok(())
}

fn handle_slice(args: &SliceArgs) -> Result<(), AppError> {
    let surface = crate::io::read_surface_json(&args.input)?;
    let slice = surface.slice_at_y(args.y)?;

    println!(
        "{}",
        crate::report::render_ascii_slice(&slice, args.plot_width, args.plot_height)
    );

    if let Some(path) = &args.export {
        crate::io::write_slice_csv(path, &slice)?;
        println!("Exported {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn scene_args(argv: &[&str]) -> SceneArgs {
        let cli = crate::cli::Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Cubic(args) => args,
            _ => panic!("expected cubic command"),
        }
    }

    #[test]
    fn scene_config_keeps_defaults_without_overrides() {
        let args = scene_args(&["morphic", "cubic"]);
        let config = scene_config(crate::scenes::cubic_config(), &args);
        assert_eq!(config.x_range, (-2.0, 2.0));
        assert_eq!(config.ridge_tol, 5e-3);
        assert_eq!(config.fault_quantile, 0.98);
    }

    #[test]
    fn scene_config_applies_overrides() {
        let args = scene_args(&[
            "morphic",
            "cubic",
            "--nx",
            "64",
            "--ny",
            "32",
            "--x-min",
            "-1.0",
            "--x-max",
            "1.0",
            "--ridge-tol",
            "0.1",
            "--fault-quantile",
            "0.5",
        ]);
        let config = scene_config(crate::scenes::cubic_config(), &args);
        assert_eq!((config.nx, config.ny), (64, 32));
        assert_eq!(config.x_range, (-1.0, 1.0));
        assert_eq!(config.ridge_tol, 0.1);
        assert_eq!(config.fault_quantile, 0.5);
    }
}
