//! Show command implementation.

use album_file::AlbumStore;
use anyhow::Result;
use clap::Args;

use super::AlbumArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub album: AlbumArgs,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, store: &AlbumStore) -> Result<()> {
    let album = args.album.load(store).await?;
    let summary = album.summary();

    if args.json {
        return output::json_pretty(&summary);
    }

    let timestamp = |t: Option<chrono::DateTime<chrono::Utc>>| {
        t.map(|t| t.to_rfc3339()).unwrap_or_else(|| "-".to_string())
    };

    output::field("ID", &summary.id.to_string());
    output::field("Name", &summary.name);
    output::field("Photos", &summary.photo_count.to_string());
    output::field("First", &timestamp(summary.first));
    output::field("Last", &timestamp(summary.last));

    Ok(())
}
