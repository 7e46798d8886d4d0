//! Formatting helpers for the UI layer.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Offset-less datetime shapes, with and without seconds.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse the API's appointment timestamp into the viewer's timezone `tz`.
///
/// Accepts RFC 3339 (`2024-06-12T09:35:00.000Z`), a naive datetime with or
/// without seconds (read as wall time in `tz`) or a bare date (midnight UTC).
pub fn parse_appointment_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        // Skipped wall times (DST gaps) have no instant; show them raw.
        return tz.from_local_datetime(&naive).earliest();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

/// Format a timestamp as "6/12/2024, 9:35:00 AM" in the given timezone.
///
/// Unparseable input is shown as-is.
pub fn format_appointment_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match parse_appointment_date_in(raw, tz) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

/// Format a timestamp in the viewer's local timezone.
pub fn format_appointment_date(raw: &str) -> String {
    format_appointment_date_in(raw, &Local)
}
