use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];
const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses an ISO 8601 date from a form value.
///
/// Accepts a calendar date (`2001-09-11` or `20010911`), a local date-time without offset
/// (`2001-09-11T08:46`), or a full RFC 3339 timestamp. For date-times only the date portion
/// is kept.
///
/// # Arguments
/// - `value` - Trimmed form value to parse
///
/// # Returns
/// - `Some(NaiveDate)` - Successfully parsed date
/// - `None` - The value is not an ISO 8601 date
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            LOCAL_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Parses an entity id from a form value.
///
/// # Returns
/// - `Some(i32)` - Successfully parsed id
/// - `None` - The value is not a valid id
pub fn parse_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}
