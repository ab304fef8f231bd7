//! Core traits for album loading.

mod source;

pub use source::AlbumSource;
