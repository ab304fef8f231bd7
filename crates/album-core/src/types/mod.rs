//! Core album types.
//!
//! Photos and albums are plain data. Offsets and intervals validate at
//! construction so queries never see malformed bounds.

mod album;
mod interval;
mod photo;
mod timestamp;
mod utc_offset;

pub use album::{Album, AlbumId, AlbumSummary};
pub use interval::Interval;
pub use photo::{Photo, PhotoId};
pub use timestamp::parse_timestamp;
pub use utc_offset::UtcOffset;
