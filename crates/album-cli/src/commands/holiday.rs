//! Holiday command implementation.

use album_core::{UtcOffset, holiday_photos_in};
use album_file::AlbumStore;
use anyhow::Result;
use clap::Args;
use tracing::info;

use super::AlbumArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct HolidayArgs {
    #[command(flatten)]
    pub album: AlbumArgs,

    /// Year to select June and December photos from
    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    /// Offset the month boundaries are anchored in (e.g. +02:00)
    #[arg(long, default_value = "Z")]
    pub utc_offset: UtcOffset,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: HolidayArgs, store: &AlbumStore) -> Result<()> {
    let album = args.album.load(store).await?;

    let selected = holiday_photos_in(&album, args.year, args.utc_offset);
    info!(
        album = album.id,
        year = args.year,
        june = selected.june().len(),
        december = selected.december().len(),
        "Selected holiday photos"
    );

    output::photos(selected, args.pretty)
}
