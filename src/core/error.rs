//! Application error type shared by the CLI commands.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
    #[error("No config directory available")]
    NoConfigDir,
    #[error("{0} is empty")]
    EmptyInput(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
