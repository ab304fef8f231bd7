//! Fixed UTC offset type.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated fixed offset from UTC.
///
/// Used to anchor calendar boundaries (such as the holiday windows) at a
/// local midnight. Boundaries are converted to UTC before any comparison,
/// so photo timestamps and window bounds always share a zone.
///
/// Accepted forms: `Z`, `UTC`, `+HH:MM`, `-HH:MM`, `+HHMM`, `-HHMM`.
///
/// # Example
///
/// ```
/// use album_core::UtcOffset;
///
/// let offset = UtcOffset::new("+02:00").unwrap();
/// assert_eq!(offset.seconds(), 7200);
/// assert_eq!(UtcOffset::utc().seconds(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcOffset(FixedOffset);

impl UtcOffset {
    /// Create a new offset from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid offset.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        Self::parse(s.as_ref()).map(Self)
    }

    /// The UTC offset itself.
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Returns the offset as a chrono [`FixedOffset`].
    pub fn fixed(&self) -> FixedOffset {
        self.0
    }

    /// Seconds east of UTC.
    pub fn seconds(&self) -> i32 {
        self.0.local_minus_utc()
    }

    fn invalid(s: &str, reason: &str) -> Error {
        InvalidInputError::UtcOffset {
            value: s.to_string(),
            reason: reason.to_string(),
        }
        .into()
    }

    fn parse(s: &str) -> Result<FixedOffset, Error> {
        if s == "Z" || s.eq_ignore_ascii_case("utc") {
            return Ok(Utc.fix());
        }

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(Self::invalid(s, "must start with '+' or '-'")),
        };

        if !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(Self::invalid(s, "contains invalid characters"));
        }

        let (hours, minutes) = match rest.split_once(':') {
            Some(parts) => parts,
            None if rest.len() == 4 => rest.split_at(2),
            None => return Err(Self::invalid(s, "expected HH:MM")),
        };

        if hours.len() != 2 || minutes.len() != 2 {
            return Err(Self::invalid(s, "expected HH:MM"));
        }

        let hours: i32 = hours
            .parse()
            .map_err(|_| Self::invalid(s, "invalid hours"))?;
        let minutes: i32 = minutes
            .parse()
            .map_err(|_| Self::invalid(s, "invalid minutes"))?;

        if hours > 23 {
            return Err(Self::invalid(s, "hours must be at most 23"));
        }
        if minutes > 59 {
            return Err(Self::invalid(s, "minutes must be at most 59"));
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .ok_or_else(|| Self::invalid(s, "out of range"))
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UtcOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UtcOffset {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<UtcOffset> for String {
    fn from(offset: UtcOffset) -> Self {
        offset.to_string()
    }
}

impl From<FixedOffset> for UtcOffset {
    fn from(offset: FixedOffset) -> Self {
        Self(offset)
    }
}
