//! Filesystem storage for albums.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, instrument, warn};

use album_core::Result;
use album_core::error::StorageError;
use album_core::types::{Album, AlbumId, AlbumSummary};

/// Filesystem-backed album storage.
///
/// Album `N` is stored as pretty-printed JSON at `<root>/albums/N.json`.
/// Every album is validated with [`Album::check_order`] on the way in and
/// on the way out, so range queries on loaded albums can trust the order.
#[derive(Debug, Clone)]
pub struct AlbumStore {
    root: PathBuf,
}

impl AlbumStore {
    /// Create a new album store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the albums directory.
    fn albums_dir(&self) -> PathBuf {
        self.root.join("albums")
    }

    /// Get the path for a specific album.
    pub fn album_path(&self, id: AlbumId) -> PathBuf {
        self.albums_dir().join(format!("{}.json", id))
    }

    /// Validate and store an album, replacing any album with the same id.
    #[instrument(skip(self, album), fields(album = album.id))]
    pub async fn save_album(&self, album: &Album) -> Result<PathBuf> {
        album.check_order()?;

        let dir = self.albums_dir();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::io(&dir, e))?;

        let content =
            serde_json::to_string_pretty(album).map_err(|e| StorageError::Serialize {
                id: album.id,
                message: e.to_string(),
            })?;

        let path = self.album_path(album.id);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)
            .await
            .map_err(|e| StorageError::io(&temp_path, e))?;
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StorageError::io(&path, e))?;

        debug!(path = %path.display(), photos = album.len(), "Saved album");

        Ok(path)
    }

    /// Load a stored album.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlbumNotFound`] if no album has this id,
    /// [`StorageError::IdMismatch`] if the file holds a different album, and
    /// an ordering error if the stored photos are not sorted.
    #[instrument(skip(self))]
    pub async fn load_album(&self, id: AlbumId) -> Result<Album> {
        let path = self.album_path(id);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::AlbumNotFound { id }.into());
            }
            Err(e) => return Err(StorageError::io(&path, e).into()),
        };

        let album = parse_stored_album(&path, &content)?;

        debug!(photos = album.len(), "Loaded album");

        Ok(album)
    }

    /// Load and validate an album from an arbitrary JSON file.
    #[instrument]
    pub async fn load_album_file(path: &Path) -> Result<Album> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| StorageError::io(path, e))?;
        parse_album(path, &content)
    }

    /// List stored albums, ordered by id.
    ///
    /// Files that cannot be read or parsed, or whose name does not match the
    /// album id they hold, are skipped with a warning.
    #[instrument(skip(self))]
    pub async fn list_albums(&self) -> Result<Vec<AlbumSummary>> {
        let dir = self.albums_dir();

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&dir, e).into()),
        };

        let mut summaries = Vec::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::io(&dir, e))?
        {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }

            let content = match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable album");
                    continue;
                }
            };

            match parse_stored_album(&path, &content) {
                Ok(album) => summaries.push(album.summary()),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping invalid album"),
            }
        }

        summaries.sort_by_key(|s| s.id);

        Ok(summaries)
    }

    /// Delete a stored album.
    #[instrument(skip(self))]
    pub async fn remove_album(&self, id: AlbumId) -> Result<()> {
        let path = self.album_path(id);

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed album");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::AlbumNotFound { id }.into())
            }
            Err(e) => Err(StorageError::io(&path, e).into()),
        }
    }
}

/// Parse an album stored at `<id>.json`, rejecting files whose name and
/// album id disagree.
fn parse_stored_album(path: &Path, content: &str) -> Result<Album> {
    let album = parse_album(path, content)?;

    let file_id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse::<AlbumId>().ok());

    if file_id != Some(album.id) {
        return Err(StorageError::IdMismatch {
            path: path.to_path_buf(),
            stored: album.id,
        }
        .into());
    }

    Ok(album)
}

fn parse_album(path: &Path, content: &str) -> Result<Album> {
    let album: Album =
        serde_json::from_str(content).map_err(|e| StorageError::parse(path, e))?;
    album.check_order()?;
    Ok(album)
}
