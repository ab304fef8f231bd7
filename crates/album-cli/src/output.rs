//! Output formatting helpers.

use album_core::Photo;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print selected photos: one compact JSON object per line, or a single
/// pretty-printed array.
pub fn photos<'a, I>(photos: I, pretty: bool) -> Result<()>
where
    I: IntoIterator<Item = &'a Photo>,
{
    let photos: Vec<&Photo> = photos.into_iter().collect();

    if photos.is_empty() {
        eprintln!("{}", "No photos found.".dimmed());
        return Ok(());
    }

    if pretty {
        return json_pretty(&photos);
    }

    for photo in photos {
        json(photo)?;
    }

    Ok(())
}
