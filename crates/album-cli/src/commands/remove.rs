//! Remove command implementation.

use album_core::AlbumId;
use album_file::AlbumStore;
use anyhow::{Context, Result};
use clap::Args;

use crate::output;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Stored album ID
    pub id: AlbumId,
}

pub async fn run(args: RemoveArgs, store: &AlbumStore) -> Result<()> {
    store
        .remove_album(args.id)
        .await
        .with_context(|| format!("Failed to remove album {}", args.id))?;

    output::success(&format!("Removed album {}", args.id));

    Ok(())
}
