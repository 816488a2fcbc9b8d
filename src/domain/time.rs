//! Fixed-timezone helpers.
//!
//! Day boundaries and schedule times are evaluated in one fixed offset.
//! The default is UTC+08:00 (Asia/Taipei, which observes no DST).

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// Default offset from UTC, in hours.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

/// Build a fixed offset from whole hours. `None` when out of range.
pub fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
}

/// The default UTC+08:00 offset.
pub fn taipei() -> FixedOffset {
    offset_from_hours(DEFAULT_UTC_OFFSET_HOURS).expect("UTC+8 is a valid offset")
}

/// Convert a unix timestamp (seconds) into the given offset.
pub fn from_unix(secs: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset.timestamp_opt(secs, 0).single()
}

/// Current instant in the given offset.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Calendar date of an instant, as seen in its own offset.
pub fn local_date(at: DateTime<FixedOffset>) -> NaiveDate {
    at.date_naive()
}

/// Display format used in chat messages.
pub fn format_timestamp(at: DateTime<FixedOffset>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_eight_am_in_taipei() {
        let at = from_unix(0, taipei()).unwrap();
        assert_eq!(format_timestamp(at), "1970-01-01 08:00:00");
    }

    #[test]
    fn late_utc_evening_is_next_local_day() {
        // 2024-03-01 17:00 UTC == 2024-03-02 01:00 UTC+8
        let at = from_unix(1_709_312_400, taipei()).unwrap();
        assert_eq!(local_date(at), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        assert!(offset_from_hours(24).is_none());
        assert!(offset_from_hours(-24).is_none());
        assert!(offset_from_hours(-5).is_some());
    }
}
