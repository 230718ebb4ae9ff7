//! Configuration for the globe viewer.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and are compared on reload to detect changes.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ExportConfig, MeshConfig, ProjectionKind};
pub use error::ConfigError;
