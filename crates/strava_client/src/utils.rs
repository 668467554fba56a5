//! Date helpers for activity timestamps.

use chrono::{DateTime, TimeZone};

/// Format an RFC 3339 `start_date` as a short calendar date (`M/D/YYYY`) in
/// the given time zone.
///
/// Returns `None` when the timestamp does not parse.
pub fn format_short_date<Tz>(start_date: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let dt = DateTime::parse_from_rfc3339(start_date).ok()?;
    Some(dt.with_timezone(tz).format("%-m/%-d/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn format_short_date_utc() {
        let result = format_short_date("2025-03-01T07:15:00Z", &Utc);
        assert_eq!(result.unwrap(), "3/1/2025");
    }

    #[test]
    fn format_short_date_shifts_into_zone() {
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let result = format_short_date("2025-12-15T03:00:00Z", &pacific);
        assert_eq!(result.unwrap(), "12/14/2025");
    }

    #[test]
    fn format_short_date_rejects_invalid() {
        assert!(format_short_date("not-a-date", &Utc).is_none());
    }
}
