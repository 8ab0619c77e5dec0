//! Anchoring of generated timestamps to a named timezone.
//!
//! The zone is resolved once and its offset at the anchor instant is kept for
//! every derived timestamp, so times generated hours later share the offset
//! even across a DST transition. Anchors are truncated to whole microseconds.

use jiff::tz::TimeZone;
use time::{OffsetDateTime, UtcOffset};

use crate::errors::GenerateError;

/// Current time expressed in `timezone`.
pub fn anchor_start_time(timezone: &str) -> Result<OffsetDateTime, GenerateError> {
    anchor_at(timezone, OffsetDateTime::now_utc())
}

/// `instant` expressed with the offset `timezone` has at that instant.
pub fn anchor_at(timezone: &str, instant: OffsetDateTime) -> Result<OffsetDateTime, GenerateError> {
    let offset = offset_at(timezone, instant)?;
    let micros = instant.replace_nanosecond(instant.nanosecond() / 1_000 * 1_000)?;
    Ok(micros.to_offset(offset))
}

fn offset_at(timezone: &str, instant: OffsetDateTime) -> Result<UtcOffset, GenerateError> {
    let unknown = |source: jiff::Error| GenerateError::UnknownTimezone {
        name: timezone.to_string(),
        source,
    };

    let zone = TimeZone::get(timezone).map_err(unknown)?;
    let timestamp = jiff::Timestamp::from_second(instant.unix_timestamp()).map_err(unknown)?;
    let seconds = timestamp.to_zoned(zone).offset().seconds();

    Ok(UtcOffset::from_whole_seconds(seconds)?)
}

#[cfg(test)]
mod tests {
    use time::macros::{datetime, offset};

    use super::*;

    #[test]
    fn test_summer_offset() {
        let anchored = anchor_at("America/Los_Angeles", datetime!(2024-07-01 12:00 UTC)).unwrap();
        assert_eq!(anchored.offset(), offset!(-7));
        assert_eq!(anchored, datetime!(2024-07-01 05:00 -7));
    }

    #[test]
    fn test_winter_offset() {
        let anchored = anchor_at("America/Los_Angeles", datetime!(2024-01-15 12:00 UTC)).unwrap();
        assert_eq!(anchored.offset(), offset!(-8));
    }

    #[test]
    fn test_anchor_truncated_to_microseconds() {
        let anchored = anchor_at("UTC", datetime!(2024-07-01 12:00:00.123456789 UTC)).unwrap();
        assert_eq!(anchored.nanosecond(), 123_456_000);
        assert_eq!(anchored, datetime!(2024-07-01 12:00:00.123456 UTC));
    }

    #[test]
    fn test_utc_zone() {
        let anchored = anchor_at("UTC", datetime!(2024-01-15 12:00 +2)).unwrap();
        assert_eq!(anchored.offset(), UtcOffset::UTC);
        assert_eq!(anchored, datetime!(2024-01-15 10:00 UTC));
    }

    #[test]
    fn test_unknown_zone_fails() {
        let err = anchor_start_time("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, GenerateError::UnknownTimezone { ref name, .. } if name == "Mars/Olympus_Mons"));
    }
}
