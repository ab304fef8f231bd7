//! Photos command implementation.

use album_core::parse_timestamp;
use album_file::AlbumStore;
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use tracing::info;

use super::AlbumArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct PhotosArgs {
    #[command(flatten)]
    pub album: AlbumArgs,

    /// Start of the range, inclusive (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub start: DateTime<Utc>,

    /// End of the range, exclusive (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub end: DateTime<Utc>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: PhotosArgs, store: &AlbumStore) -> Result<()> {
    let album = args.album.load(store).await?;

    let selected = album.photos_between(args.start, args.end);
    info!(
        album = album.id,
        start = %args.start,
        end = %args.end,
        count = selected.len(),
        "Selected photos"
    );

    output::photos(selected, args.pretty)
}
