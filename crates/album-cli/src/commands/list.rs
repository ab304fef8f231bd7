//! List command implementation.

use album_file::AlbumStore;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print one JSON summary per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, store: &AlbumStore) -> Result<()> {
    let albums = store.list_albums().await.context("Failed to list albums")?;

    if albums.is_empty() {
        eprintln!("{}", "No albums found.".dimmed());
        return Ok(());
    }

    for album in &albums {
        if args.json {
            output::json(album)?;
        } else {
            println!(
                "{}  {}  {}",
                album.id.to_string().bold(),
                album.name,
                format!("({} photos)", album.photo_count).dimmed()
            );
        }
    }

    Ok(())
}
