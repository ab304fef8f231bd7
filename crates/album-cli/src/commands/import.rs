//! Import command implementation.

use std::io::{self, Read};
use std::path::PathBuf;

use album_core::Album;
use album_file::AlbumStore;
use anyhow::{Context, Result};
use clap::Args;

use crate::output;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Album JSON file (use - for stdin)
    pub file: PathBuf,
}

pub async fn run(args: ImportArgs, store: &AlbumStore) -> Result<()> {
    let content = if args.file.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(&args.file)
            .await
            .with_context(|| format!("Failed to read {}", args.file.display()))?
    };

    let album = Album::from_json(&content).context("Invalid album")?;

    let path = store
        .save_album(&album)
        .await
        .context("Failed to save album")?;

    println!("{}", path.display());
    output::success(&format!(
        "Imported album {} ({}) with {} photos",
        album.id,
        album.name,
        album.len()
    ));

    Ok(())
}
