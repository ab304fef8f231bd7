//! Holiday photo selection.
//!
//! Holiday photos are those taken in June or December of a given year.
//! The result keeps June photos first and December photos second, each in
//! album order, without merging, deduplicating or re-sorting.

use std::iter::Chain;
use std::slice;

use serde::{Serialize, Serializer};
use tracing::{instrument, trace};

use crate::types::{Album, Interval, Photo, UtcOffset};

/// The two holiday windows of a year.
///
/// A window is `None` when one of its boundaries cannot be represented,
/// which only happens at the extreme ends of chrono's calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolidayWindows {
    /// `[June 1, July 1)`.
    pub june: Option<Interval>,
    /// `[December 1, January 1 of the next year)`.
    pub december: Option<Interval>,
}

impl HolidayWindows {
    /// Windows for `year` with midnights anchored in `offset`.
    pub fn for_year(year: i32, offset: UtcOffset) -> Self {
        Self {
            june: Interval::month(year, 6, offset),
            december: Interval::month(year, 12, offset),
        }
    }
}

/// Iterator over [`HolidayPhotos`].
pub type Iter<'a> = Chain<slice::Iter<'a, Photo>, slice::Iter<'a, Photo>>;

/// Photos selected by [`holiday_photos`].
///
/// Borrows two runs of the source album rather than copying them.
/// Iterates and serializes as a single sequence, June run first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolidayPhotos<'a> {
    june: &'a [Photo],
    december: &'a [Photo],
}

impl<'a> HolidayPhotos<'a> {
    /// Photos from the June window.
    pub fn june(&self) -> &'a [Photo] {
        self.june
    }

    /// Photos from the December window.
    pub fn december(&self) -> &'a [Photo] {
        self.december
    }

    /// Total number of selected photos.
    pub fn len(&self) -> usize {
        self.june.len() + self.december.len()
    }

    /// Whether neither window selected any photo.
    pub fn is_empty(&self) -> bool {
        self.june.is_empty() && self.december.is_empty()
    }

    /// June photos followed by December photos.
    pub fn iter(&self) -> Iter<'a> {
        self.june.iter().chain(self.december.iter())
    }

    /// Clone the selected photos into an owned vector.
    pub fn to_vec(&self) -> Vec<Photo> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for HolidayPhotos<'a> {
    type Item = &'a Photo;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for HolidayPhotos<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Photos from June and December of `year`, with UTC midnights.
///
/// # Example
///
/// ```
/// use album_core::{Album, Photo, holiday_photos};
/// use chrono::{TimeZone, Utc};
///
/// let album = Album::new(0, "Trips", vec![
///     Photo::new(0, "beach", Utc.with_ymd_and_hms(2021, 6, 12, 14, 0, 0).unwrap()),
///     Photo::new(1, "hike", Utc.with_ymd_and_hms(2021, 8, 11, 14, 0, 0).unwrap()),
///     Photo::new(2, "snow", Utc.with_ymd_and_hms(2021, 12, 11, 14, 0, 0).unwrap()),
/// ]);
///
/// let names: Vec<_> = holiday_photos(&album, 2021).iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["beach", "snow"]);
/// ```
pub fn holiday_photos(album: &Album, year: i32) -> HolidayPhotos<'_> {
    holiday_photos_in(album, year, UtcOffset::utc())
}

/// Photos from June and December of `year`, with midnights in `offset`.
#[instrument(level = "trace", skip(album), fields(album = album.id))]
pub fn holiday_photos_in(album: &Album, year: i32, offset: UtcOffset) -> HolidayPhotos<'_> {
    let windows = HolidayWindows::for_year(year, offset);

    let june = windows
        .june
        .map(|w| album.photos_in(&w))
        .unwrap_or_default();
    let december = windows
        .december
        .map(|w| album.photos_in(&w))
        .unwrap_or_default();

    trace!(
        june = june.len(),
        december = december.len(),
        "Selected holiday photos"
    );

    HolidayPhotos { june, december }
}
