//! Command-line argument parsing for the globe viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ProjectionKind};

/// Globe viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "globe", about = "Cube-sphere globe mesh generator")]
pub struct CliArgs {
    /// Vertices per cube-face side (at least 2).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Cube-to-sphere projection.
    #[arg(long, value_enum)]
    pub projection: Option<ProjectionKind>,

    /// Write the merged mesh as Wavefront OBJ to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,

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
        if let Some(resolution) = args.resolution {
            self.mesh.resolution = resolution;
        }
        if let Some(projection) = args.projection {
            self.mesh.projection = projection;
        }
        if let Some(ref path) = args.export {
            self.export.obj_path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            resolution: Some(500),
            export: Some(PathBuf::from("out/globe.obj")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.mesh.resolution, 500);
        assert_eq!(config.export.obj_path, Some(PathBuf::from("out/globe.obj")));
        // Non-overridden fields retain defaults
        assert_eq!(config.mesh.projection, ProjectionKind::Everitt);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "globe",
            "--resolution",
            "50",
            "--projection",
            "normalize",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.resolution, Some(50));
        assert_eq!(args.projection, Some(ProjectionKind::Normalize));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config, None);
    }
}
