//! Command-line parsing for the morphic graphing tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the sampling/analytics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::SpectralAnalytic;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "morphic",
    version,
    about = "Morphic graphing: scalar surfaces with ridge/fault and spectral analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sample the cubic family scene (z = x^3 - y*x) and derive analytics.
    Cubic(SceneArgs),
    /// Sample the quantum-relativity toy surface and derive analytics.
    Relativity(SceneArgs),
    /// Sweep the damped oscillator through spectral analytics.
    Spectral(SpectralArgs),
    /// Slice a previously exported surface JSON at a fixed y.
    Slice(SliceArgs),
}

/// Common options for the built-in scenes.
///
/// Window and threshold flags default to the scene's own configuration, so
/// a bare `morphic cubic` reproduces the shipped demo.
#[derive(Debug, Parser, Clone)]
pub struct SceneArgs {
    /// Grid resolution along x.
    #[arg(long, default_value_t = 200)]
    pub nx: usize,

    /// Grid resolution along y.
    #[arg(long, default_value_t = 200)]
    pub ny: usize,

    /// Override the scene's x window minimum.
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// Override the scene's x window maximum.
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Override the scene's y window minimum.
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    /// Override the scene's y window maximum.
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Ridge tolerance (scene default if omitted).
    #[arg(long)]
    pub ridge_tol: Option<f64>,

    /// Fault quantile (scene default if omitted).
    #[arg(long)]
    pub fault_quantile: Option<f64>,

    /// Print an ASCII slice at this y (repeatable; replaces the scene's
    /// guided slices).
    #[arg(long = "slice-y", allow_negative_numbers = true)]
    pub slice_ys: Vec<f64>,

    /// Write a PNG heatmap here.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Export the surface JSON here.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Heatmap width in pixels.
    #[arg(long, default_value_t = 800)]
    pub plot_width: u32,

    /// Heatmap height in pixels.
    #[arg(long, default_value_t = 600)]
    pub plot_height: u32,
}

/// Options for the damped-oscillator spectral sweep.
#[derive(Debug, Parser, Clone)]
pub struct SpectralArgs {
    /// Which analytic to sweep (omit to run both).
    #[arg(long, value_enum)]
    pub analytic: Option<SpectralAnalytic>,

    /// Sweep resolution along natural frequency.
    #[arg(long, default_value_t = 80)]
    pub n_freq: usize,

    /// Sweep resolution along damping.
    #[arg(long, default_value_t = 80)]
    pub n_gamma: usize,

    /// Natural frequency window minimum.
    #[arg(long, default_value_t = 1.0)]
    pub freq_min: f64,

    /// Natural frequency window maximum.
    #[arg(long, default_value_t = 5.0)]
    pub freq_max: f64,

    /// Damping window minimum.
    #[arg(long, default_value_t = 0.1)]
    pub gamma_min: f64,

    /// Damping window maximum.
    #[arg(long, default_value_t = 1.5)]
    pub gamma_max: f64,

    /// Signal duration in seconds.
    #[arg(long, default_value_t = 10.0)]
    pub t_max: f64,

    /// Time samples per signal.
    #[arg(long, default_value_t = 4000)]
    pub n_samples: usize,

    /// Ridge tolerance applied to the sweep surface.
    #[arg(long, default_value_t = 1e-2)]
    pub ridge_tol: f64,

    /// Fault quantile applied to the sweep surface.
    #[arg(long, default_value_t = 0.98)]
    pub fault_quantile: f64,

    /// Output directory for PNG/JSON files.
    #[arg(long, default_value = "assets")]
    pub out_dir: PathBuf,

    /// Also export each sweep surface as JSON next to its PNG.
    #[arg(long, default_value_t = false)]
    pub export: bool,

    /// Heatmap width in pixels.
    #[arg(long, default_value_t = 800)]
    pub plot_width: u32,

    /// Heatmap height in pixels.
    #[arg(long, default_value_t = 600)]
    pub plot_height: u32,
}

/// Options for slicing a saved surface.
#[derive(Debug, Parser, Clone)]
pub struct SliceArgs {
    /// Surface JSON to slice.
    pub input: PathBuf,

    /// Target y (nearest grid row wins; out-of-range clamps to the boundary).
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub y: f64,

    /// Export the slice as CSV here.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// ASCII plot width in characters.
    #[arg(long, default_value_t = 72)]
    pub plot_width: usize,

    /// ASCII plot height in characters.
    #[arg(long, default_value_t = 20)]
    pub plot_height: usize,
}
