//! Timestamp parsing.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, InvalidInputError};

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date meaning
/// midnight UTC. The result is normalized to UTC.
///
/// # Errors
///
/// Returns an error if the string is neither form.
///
/// # Example
///
/// ```
/// use album_core::parse_timestamp;
///
/// let a = parse_timestamp("2021-06-13T14:00:00+02:00").unwrap();
/// let b = parse_timestamp("2021-06-13T12:00:00Z").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, Error> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        InvalidInputError::Timestamp {
            value: s.to_string(),
            reason: format!("expected RFC 3339 or YYYY-MM-DD ({})", e),
        }
    })?;

    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            InvalidInputError::Timestamp {
                value: s.to_string(),
                reason: "not representable".to_string(),
            }
            .into()
        })
}
