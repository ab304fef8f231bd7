//! Store location resolution.

use std::env;
use std::path::{Path, PathBuf};

use album_file::AlbumStore;
use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Environment variable naming the store directory.
pub const STORE_ENV: &str = "ALBUM_STORE";

/// Open the album store.
///
/// The `--store` flag wins, then `$ALBUM_STORE`, then the platform data
/// directory. Nothing is created until an album is saved.
pub fn open_store(flag: Option<&Path>) -> Result<AlbumStore> {
    Ok(AlbumStore::new(store_root(flag)?))
}

fn store_root(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = env::var_os(STORE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let dirs =
        ProjectDirs::from("", "", "album").context("Could not determine data directory")?;

    Ok(dirs.data_dir().to_path_buf())
}
