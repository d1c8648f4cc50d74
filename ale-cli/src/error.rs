use crate::discovery::DiscoveryError;
use ale_babel::FormatError;
use ale_parser::{BatchError, LoaderError, MappingError};
use std::path::PathBuf;
use thiserror::Error;

/// Everything that ends a command with exit status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("config: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: LoaderError,
    },

    #[error("{}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
