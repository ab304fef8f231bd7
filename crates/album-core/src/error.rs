//! Error types for album operations.
//!
//! Range and holiday selection are total and never produce these errors.
//! They come from ingestion (order validation), input parsing and storage.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::{AlbumId, PhotoId};

/// The unified error type for album operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The album violates its ordering invariants.
    #[error("data ordering violation: {0}")]
    Ordering(#[from] OrderingError),

    /// Input validation errors (offsets, timestamps).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Album storage errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Violations of the album ordering invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// A photo is timestamped earlier than the photo before it.
    #[error("photo at index {index} ({current}) is earlier than the previous photo ({previous})")]
    OutOfOrder {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    /// Two photos in the same album share an id.
    #[error("duplicate photo id {id}")]
    DuplicatePhotoId { id: PhotoId },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid UTC offset format.
    #[error("invalid UTC offset '{value}': {reason}")]
    UtcOffset { value: String, reason: String },

    /// Invalid timestamp format.
    #[error("invalid timestamp '{value}': {reason}")]
    Timestamp { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// Errors from reading or writing stored albums.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("IO error at {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// Stored content is not a valid album.
    #[error("cannot parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// A stored album's id disagrees with the id in its file name.
    #[error("stored id {stored} does not match file name {}", .path.display())]
    IdMismatch { path: PathBuf, stored: AlbumId },

    /// An album could not be encoded for writing.
    #[error("cannot serialize album {id}: {message}")]
    Serialize { id: AlbumId, message: String },

    /// No album with this id exists.
    #[error("album {id} not found")]
    AlbumNotFound { id: AlbumId },
}

impl StorageError {
    /// Wrap an IO error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Wrap a JSON error together with the path of the offending file.
    pub fn parse(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        StorageError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
