//! album-file - Filesystem-backed album store.

mod source;
mod store;

pub use source::FileAlbumSource;
pub use store::AlbumStore;
