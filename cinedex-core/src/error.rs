use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned by [`MovieStore`](crate::MovieStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist
    #[error("Store file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No record with this title
    #[error("Movie not found: {0}")]
    TitleNotFound(String),

    /// A record with this title is already stored
    #[error("Movie already exists: {0}")]
    AlreadyExists(String),

    /// The file content does not parse into a collection
    #[error("Malformed data in {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Coarse error classes shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    MalformedData,
    Io,
}

impl StoreError {
    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error, mapping a missing file to [`StoreError::NotFound`].
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound(_) | StoreError::TitleNotFound(_) => ErrorKind::NotFound,
            StoreError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            StoreError::MalformedData { .. } => ErrorKind::MalformedData,
            StoreError::Io { .. } => ErrorKind::Io,
        }
    }

    /// True for a missing file as well as a missing title.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
