//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{holiday, import, list, photos, remove, show};

/// Query photo albums by time.
#[derive(Parser, Debug)]
#[command(name = "album")]
#[command(author, version = env!("ALBUM_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Album store directory (defaults to $ALBUM_STORE, then the user data directory)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import an album JSON file into the store
    Import(import::ImportArgs),

    /// List stored albums
    List(list::ListArgs),

    /// Display an album summary
    Show(show::ShowArgs),

    /// Select photos taken in a time range
    Photos(photos::PhotosArgs),

    /// Select photos taken in June and December of a year
    Holiday(holiday::HolidayArgs),

    /// Remove an album from the store
    Remove(remove::RemoveArgs),
}
