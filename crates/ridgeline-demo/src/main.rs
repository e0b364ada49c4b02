//! Demo binary that generates (or loads) a fault-formation heightfield,
//! triangulates it, and reports statistics.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p ridgeline-demo -- --size 128 --seed 42`
//! or add `--preview terrain.png` to write a grayscale snapshot.

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ridgeline_config::{CliArgs, Config};
use ridgeline_mesh::{MeshScale, build_terrain_mesh};
use ridgeline_terrain::{
    FaultFormationParams, HeightGrid, TerrainError, generate_fault_formation,
    render_height_preview,
};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config: {err}; using defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    logging::init_logging(&config);

    let grid = match build_grid(&args, &config) {
        Ok(grid) => grid,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some((min, max)) = grid.height_range() {
        info!(
            "heightfield {0}x{0}, elevation range {min:.1}..{max:.1}",
            grid.size()
        );
    }

    if args.dump {
        dump_grid(&grid);
    }

    let scale = MeshScale {
        x: config.mesh.scale_x,
        y: config.mesh.scale_y,
        z: config.mesh.scale_z,
    };
    let mesh = build_terrain_mesh(&grid, scale);
    info!("triangulated {} triangles", mesh.triangle_count());

    if let Some(path) = &args.preview {
        if let Err(err) = write_preview(&grid, path) {
            error!("failed to write preview: {err}");
            return ExitCode::FAILURE;
        }
        info!("wrote preview to {}", path.display());
    }

    ExitCode::SUCCESS
}

/// Load a raw heightfield when `--load` is given, otherwise generate one.
fn build_grid(args: &CliArgs, config: &Config) -> Result<HeightGrid, TerrainError> {
    if let Some(path) = &args.load {
        info!("loading heightfield from {}", path.display());
        return HeightGrid::load_raw(path, config.terrain.size);
    }
    generate_fault_formation(&fault_params(args.random, config))
}

fn fault_params(random: bool, config: &Config) -> FaultFormationParams {
    FaultFormationParams {
        iterations: config.terrain.iterations,
        size: config.terrain.size,
        min_height: config.terrain.min_height,
        max_height: config.terrain.max_height,
        filter_weight: config.terrain.filter_weight,
        post_smoothing_passes: config.terrain.post_smoothing_passes,
        seed: if random {
            None
        } else {
            Some(config.terrain.seed)
        },
    }
}

/// Print the grid to stdout, one CSV line per row.
fn dump_grid(grid: &HeightGrid) {
    for row in 0..grid.size() {
        let line: Vec<String> = (0..grid.size())
            .map(|col| grid.height(row, col).to_string())
            .collect();
        println!("{}", line.join(","));
    }
}

fn write_preview(grid: &HeightGrid, path: &Path) -> Result<(), image::ImageError> {
    let preview = render_height_preview(grid);
    image::save_buffer(
        path,
        &preview.pixels,
        preview.width,
        preview.height,
        image::ExtendedColorType::L8,
    )
}
