//! CLI error type.

use std::path::PathBuf;

use sortgrid::error::{ConfigError, SortError};
use thiserror::Error;

/// Anything that can stop the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid table definition: {0}")]
    Definition(#[from] serde_json::Error),
    #[error(transparent)]
    Table(#[from] sortgrid::Error),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Table(err.into())
    }
}

impl From<SortError> for CliError {
    fn from(err: SortError) -> Self {
        CliError::Table(err.into())
    }
}
