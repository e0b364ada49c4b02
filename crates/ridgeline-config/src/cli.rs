//! Command-line argument parsing for the terrain tool.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terrain tool command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "ridgeline", about = "Fault-formation terrain generator")]
pub struct CliArgs {
    /// Grid edge length.
    #[arg(long)]
    pub size: Option<usize>,

    /// Number of fault iterations.
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Displacement applied by the final fault.
    #[arg(long)]
    pub min_height: Option<i32>,

    /// Displacement applied by the first fault.
    #[arg(long)]
    pub max_height: Option<i32>,

    /// Smoothing filter weight (0.0 - 1.0).
    #[arg(long)]
    pub weight: Option<f32>,

    /// Extra smoothing passes after the fault loop.
    #[arg(long)]
    pub post_smoothing: Option<u32>,

    /// Seed for reproducible terrain.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seed from the system clock instead of the configured seed.
    #[arg(long)]
    pub random: bool,

    /// Load a raw heightfield file instead of generating one.
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Write a grayscale PNG preview of the heightfield.
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Print the height grid to stdout as CSV rows.
    #[arg(long)]
    pub dump: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.size {
            self.terrain.size = size;
        }
        if let Some(iterations) = args.iterations {
            self.terrain.iterations = iterations;
        }
        if let Some(min_height) = args.min_height {
            self.terrain.min_height = min_height;
        }
        if let Some(max_height) = args.max_height {
            self.terrain.max_height = max_height;
        }
        if let Some(weight) = args.weight {
            self.terrain.filter_weight = weight;
        }
        if let Some(passes) = args.post_smoothing {
            self.terrain.post_smoothing_passes = passes;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
