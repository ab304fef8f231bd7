//! Subcommand implementations.

pub mod holiday;
pub mod import;
pub mod list;
pub mod photos;
pub mod remove;
pub mod show;

use std::path::PathBuf;

use album_core::{Album, AlbumId};
use album_file::AlbumStore;
use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Commands;

/// Selects the album a query runs against: a stored album by id, or an
/// album JSON file read directly.
#[derive(Args, Debug)]
pub struct AlbumArgs {
    /// Stored album ID
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub id: Option<AlbumId>,

    /// Album JSON file (alternative to ID)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl AlbumArgs {
    pub async fn load(&self, store: &AlbumStore) -> Result<Album> {
        if let Some(path) = &self.file {
            return AlbumStore::load_album_file(path)
                .await
                .with_context(|| format!("Failed to load album from {}", path.display()));
        }

        let id = self.id.context("Either an album ID or --file is required")?;

        store
            .load_album(id)
            .await
            .with_context(|| format!("Failed to load album {}", id))
    }
}

pub async fn handle(command: Commands, store: &AlbumStore) -> Result<()> {
    match command {
        Commands::Import(args) => import::run(args, store).await,
        Commands::List(args) => list::run(args, store).await,
        Commands::Show(args) => show::run(args, store).await,
        Commands::Photos(args) => photos::run(args, store).await,
        Commands::Holiday(args) => holiday::run(args, store).await,
        Commands::Remove(args) => remove::run(args, store).await,
    }
}
