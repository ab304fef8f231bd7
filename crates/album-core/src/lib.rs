//! album-core - Photo album types and time-range queries.
//!
//! Albums hold photos sorted by time. [`select_range`] picks the run of
//! photos inside a half-open interval by binary search, and
//! [`holiday_photos`] combines two such runs for June and December.
//! Queries borrow from the album and never fail.

pub mod error;
pub mod holiday;
pub mod range;
pub mod traits;
pub mod types;

pub use error::Error;
pub use holiday::{HolidayPhotos, HolidayWindows, holiday_photos, holiday_photos_in};
pub use range::{range_bounds, select_interval, select_range};
pub use traits::AlbumSource;
pub use types::{
    Album, AlbumId, AlbumSummary, Interval, Photo, PhotoId, UtcOffset, parse_timestamp,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
