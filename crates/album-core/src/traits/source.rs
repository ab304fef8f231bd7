//! Album source trait.

use async_trait::async_trait;

use crate::Result;
use crate::holiday::holiday_photos_in;
use crate::types::{Album, AlbumId, AlbumSummary, Photo, UtcOffset};

/// A place albums are loaded from.
///
/// Implementations must hand out albums whose photos are sorted by time;
/// range queries on the returned albums trust that ordering.
#[async_trait]
pub trait AlbumSource: Send + Sync {
    /// List the albums this source holds.
    async fn list(&self) -> Result<Vec<AlbumSummary>>;

    /// Load a single album.
    async fn load(&self, id: AlbumId) -> Result<Album>;

    /// Load an album and return owned copies of its holiday photos.
    async fn holiday_photos(
        &self,
        id: AlbumId,
        year: i32,
        offset: UtcOffset,
    ) -> Result<Vec<Photo>> {
        let album = self.load(id).await?;
        Ok(holiday_photos_in(&album, year, offset).to_vec())
    }
}
