//! File-backed album source.

use std::path::Path;

use async_trait::async_trait;

use album_core::Result;
use album_core::traits::AlbumSource;
use album_core::types::{Album, AlbumId, AlbumSummary};

use crate::store::AlbumStore;

/// [`AlbumSource`] over an [`AlbumStore`] directory.
#[derive(Debug, Clone)]
pub struct FileAlbumSource {
    store: AlbumStore,
}

impl FileAlbumSource {
    /// Create a new source reading from the store at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            store: AlbumStore::new(root),
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &AlbumStore {
        &self.store
    }
}

#[async_trait]
impl AlbumSource for FileAlbumSource {
    async fn list(&self) -> Result<Vec<AlbumSummary>> {
        self.store.list_albums().await
    }

    async fn load(&self, id: AlbumId) -> Result<Album> {
        self.store.load_album(id).await
    }
}
