//! Photo type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a photo, unique within its album.
pub type PhotoId = u64;

/// A photo taken at a particular time.
///
/// The name is given by the user and is not required to be unique.
/// Timestamps with any offset are accepted when deserializing and are
/// normalized to UTC, so photos from different sources compare correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Photo {
    /// Identifier of this photo within its album.
    pub id: PhotoId,

    /// Display name.
    pub name: String,

    /// When the photo was taken.
    #[serde(alias = "timestamp")]
    pub date_time: DateTime<Utc>,
}

impl Photo {
    /// Create a new photo.
    pub fn new(id: PhotoId, name: impl Into<String>, date_time: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            date_time,
        }
    }
}
