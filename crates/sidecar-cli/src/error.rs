//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Store error: {0}")]
    Store(#[from] sidecar_core::CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("General error: {0}")]
    General(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::General(err.to_string())
    }
}

impl From<sidecar_store::StoreError> for CliError {
    fn from(err: sidecar_store::StoreError) -> Self {
        Self::Store(err.into())
    }
}

impl From<sidecar_server::ServerError> for CliError {
    fn from(err: sidecar_server::ServerError) -> Self {
        Self::General(err.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
