//! Headless globe mesher: generates the cube-sphere globe, reports mesh quality,
//! uploads it to the GPU when an adapter is available, and optionally exports OBJ.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p globe-demo -- --resolution 500 --export globe.obj`.

mod obj;
mod stats;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use globe_config::{CliArgs, Config};
use globe_cubesphere::{CubeSphere, ProjectionMethod};
use globe_render::{BufferAllocator, create_headless_device};
use tracing::{error, info, warn};

use crate::stats::MeshStats;

fn resolve_config_dir(args: &CliArgs) -> PathBuf {
    args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("globe-viewer")
    })
}

fn run(config: &Config) -> ExitCode {
    let projection = ProjectionMethod::from(config.mesh.projection);
    let started = Instant::now();
    let sphere = match CubeSphere::with_projection(config.mesh.resolution, projection) {
        Ok(sphere) => sphere,
        Err(e) => {
            error!("Cannot generate globe: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mesh = sphere.merge();
    info!(
        "Generated globe at resolution {} ({projection:?}) in {:.2?}",
        sphere.resolution(),
        started.elapsed()
    );

    let stats = MeshStats::measure(&mesh);
    info!(
        vertices = stats.vertices,
        triangles = stats.triangles,
        max_radius_error = stats.max_radius_error,
        area_ratio = stats.area_ratio(),
        "Mesh statistics"
    );

    match create_headless_device() {
        Some((device, _queue)) => {
            let buffer = BufferAllocator::new(&device).upload_sphere("globe", &mesh);
            info!(
                "Uploaded globe: {} vertex bytes, {} indices as {:?}",
                buffer.vertex_buffer.size(),
                buffer.index_count,
                buffer.index_format
            );
        }
        None => warn!("No GPU adapter available, skipping upload"),
    }

    if let Some(path) = &config.export.obj_path {
        if let Err(e) = obj::export_obj(&mesh, path) {
            error!("Failed to export {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        info!("Exported globe to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let config_dir = resolve_config_dir(&args);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    globe_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    info!("Config directory: {}", config_dir.display());

    run(&config)
}
