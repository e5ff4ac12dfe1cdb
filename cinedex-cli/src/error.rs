use thiserror::Error;

use cinedex_lib::{LibError, StoreError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Storage operation failed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Application-layer error
    #[error("{0}")]
    Lib(LibError),

    /// Interactive input ended or could not be used
    #[error("Input error: {0}")]
    Input(String),

    /// Logging setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Store(inner) => Self::Store(inner),
            other => Self::Lib(other),
        }
    }
}

impl CliError {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
