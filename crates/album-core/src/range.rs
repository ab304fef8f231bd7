//! Time-range selection over sorted photos.
//!
//! All functions assume the photos are sorted non-decreasing by
//! `date_time` and return borrowed slices of the input. Nothing here
//! allocates, mutates or fails: degenerate inputs select nothing.

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::types::{Album, Interval, Photo};

/// Index range of the photos falling in `[start, end)`.
///
/// `i` is the first photo not before `start`; `j` is the first photo at or
/// after `i` not before `end`. Both are found by binary search.
pub fn range_bounds(photos: &[Photo], start: DateTime<Utc>, end: DateTime<Utc>) -> Range<usize> {
    let i = photos.partition_point(|p| p.date_time < start);
    let j = i + photos[i..].partition_point(|p| p.date_time < end);
    i..j
}

/// The contiguous run of photos falling in `[start, end)`.
///
/// A photo taken exactly at `start` is included; one taken exactly at
/// `end` is excluded. Returns an empty slice when `end <= start`, when
/// `photos` is empty, or when the interval misses all photos.
///
/// # Example
///
/// ```
/// use album_core::{Photo, select_range};
/// use chrono::{TimeZone, Utc};
///
/// let day = |d| Utc.with_ymd_and_hms(2021, 6, d, 0, 0, 0).unwrap();
/// let photos = vec![
///     Photo::new(0, "a", day(1)),
///     Photo::new(1, "b", day(2)),
///     Photo::new(2, "c", day(3)),
/// ];
///
/// let selected = select_range(&photos, day(2), day(3));
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].name, "b");
/// ```
pub fn select_range(photos: &[Photo], start: DateTime<Utc>, end: DateTime<Utc>) -> &[Photo] {
    &photos[range_bounds(photos, start, end)]
}

/// [`select_range`] over an [`Interval`].
pub fn select_interval<'a>(photos: &'a [Photo], interval: &Interval) -> &'a [Photo] {
    select_range(photos, interval.start(), interval.end())
}

impl Album {
    /// Returns the photos taken in `[start, end)`.
    pub fn photos_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> &[Photo] {
        select_range(&self.photos, start, end)
    }

    /// Returns the photos taken in `interval`.
    pub fn photos_in(&self, interval: &Interval) -> &[Photo] {
        select_interval(&self.photos, interval)
    }
}
