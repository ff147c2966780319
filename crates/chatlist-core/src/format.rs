//! Date formatting for thread entries.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Formats a timestamp as `"Mar 7 at 3:04:05 PM"`.
///
/// Short month name, day of month, then 12-hour time with seconds. The
/// comma that separates date and time in the usual `"Mar 7, 3:04:05 PM"`
/// form is replaced by `" at"` (first comma only). The value is formatted
/// in whatever zone it carries; no conversion happens here.
pub fn format_day<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format("%b %-d, %-I:%M:%S %p")
        .to_string()
        .replacen(',', " at", 1)
}

/// Zone in which thread times are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayZone {
    /// The system's local time zone.
    #[default]
    Local,
    Utc,
}

impl DisplayZone {
    /// Converts a stored UTC timestamp into this zone and formats it.
    pub fn format_day(self, date: DateTime<Utc>) -> String {
        match self {
            DisplayZone::Local => format_day(&date.with_timezone(&Local)),
            DisplayZone::Utc => format_day(&date),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn test_format_day_afternoon() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap();
        assert_eq!(format_day(&date), "Mar 7 at 3:04:05 PM");
    }

    #[test]
    fn test_format_day_midnight_and_noon() {
        let midnight = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 9).unwrap();
        assert_eq!(format_day(&midnight), "Dec 25 at 12:00:09 AM");

        let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(format_day(&noon), "Jan 1 at 12:30:00 PM");
    }

    #[test]
    fn test_format_day_replaces_single_comma() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap();
        let out = format_day(&date);
        assert!(!out.contains(','));
        assert_eq!(out.matches(" at ").count(), 1);
    }

    #[test]
    fn test_format_day_uses_carried_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = Utc
            .with_ymd_and_hms(2024, 3, 7, 23, 4, 5)
            .unwrap()
            .with_timezone(&tz);
        assert_eq!(format_day(&date), "Mar 8 at 1:04:05 AM");
    }

    #[test]
    fn test_display_zone_utc() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap();
        assert_eq!(DisplayZone::Utc.format_day(date), "Mar 7 at 3:04:05 PM");
    }
}
