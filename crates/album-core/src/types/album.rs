//! Album type.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Photo;
use crate::Result;
use crate::error::{InvalidInputError, OrderingError};

/// Identifier of an album.
pub type AlbumId = u64;

/// A named collection of photos sorted by time.
///
/// Range queries rely on `photos` being sorted non-decreasing by
/// `date_time`. The queries themselves never check this; use
/// [`Album::check_order`] once at ingestion if the source is untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Identifier of this album.
    pub id: AlbumId,

    /// Display name, not required to be unique.
    pub name: String,

    /// Photos, oldest first.
    pub photos: Vec<Photo>,
}

impl Album {
    /// Create a new album. The photos are taken as given.
    pub fn new(id: AlbumId, name: impl Into<String>, photos: Vec<Photo>) -> Self {
        Self {
            id,
            name: name.into(),
            photos,
        }
    }

    /// Parse an album from JSON and validate its ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an album, or if the photos are
    /// out of order or share an id.
    pub fn from_json(s: &str) -> Result<Self> {
        let album: Album = serde_json::from_str(s).map_err(|e| InvalidInputError::Other {
            message: e.to_string(),
        })?;
        album.check_order()?;
        Ok(album)
    }

    /// Returns the photos as a slice.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Number of photos in the album.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Whether the album has no photos.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Whether the photos are sorted non-decreasing by time.
    pub fn is_sorted_by_time(&self) -> bool {
        self.photos.is_sorted_by_key(|p| p.date_time)
    }

    /// Validate the album invariants.
    ///
    /// Equal timestamps are allowed. Reports the first photo that is
    /// earlier than its predecessor, or the first repeated photo id.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::OutOfOrder`] or
    /// [`OrderingError::DuplicatePhotoId`].
    pub fn check_order(&self) -> Result<()> {
        for (index, pair) in self.photos.windows(2).enumerate() {
            if pair[1].date_time < pair[0].date_time {
                return Err(OrderingError::OutOfOrder {
                    index: index + 1,
                    previous: pair[0].date_time,
                    current: pair[1].date_time,
                }
                .into());
            }
        }

        let mut seen = HashSet::with_capacity(self.photos.len());
        for photo in &self.photos {
            if !seen.insert(photo.id) {
                return Err(OrderingError::DuplicatePhotoId { id: photo.id }.into());
            }
        }

        Ok(())
    }

    /// Summarize the album without its photos.
    pub fn summary(&self) -> AlbumSummary {
        AlbumSummary {
            id: self.id,
            name: self.name.clone(),
            photo_count: self.photos.len(),
            first: self.photos.first().map(|p| p.date_time),
            last: self.photos.last().map(|p| p.date_time),
        }
    }
}

/// Lightweight description of an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: AlbumId,
    pub name: String,
    pub photo_count: usize,

    /// Timestamp of the oldest photo, if any.
    pub first: Option<DateTime<Utc>>,

    /// Timestamp of the newest photo, if any.
    pub last: Option<DateTime<Utc>>,
}
