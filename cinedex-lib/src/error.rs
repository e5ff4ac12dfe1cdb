use thiserror::Error;

use cinedex_core::StoreError;

/// Errors from the application layer.
#[derive(Debug, Error)]
pub enum LibError {
    /// Storage operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),

    /// No profile with this name
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// Histogram image could not be written
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The operation needs at least one rated movie
    #[error("No movies available in the movie database.")]
    EmptyCollection,
}

impl LibError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
