//! Defensive date formatting for record fields
//!
//! The backend stores free-form date strings (user-entered dates and
//! `isoformat()` timestamps). Formatting failure is explicit: `Err` hands
//! the raw input back so callers cannot mistake a fallback for a format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// `Ok` is the formatted text; `Err` is the raw input unchanged.
pub type FormatResult = Result<String, Option<String>>;

/// Render a date-only value, e.g. "March 5, 2024".
pub fn format_date(raw: Option<&str>) -> FormatResult {
    match raw.and_then(parse) {
        Some(dt) => Ok(dt.format("%B %-d, %Y").to_string()),
        None => Err(raw.map(str::to_string)),
    }
}

/// Render a timestamp, e.g. "Mar 5, 2024, 02:30 PM".
pub fn format_date_time(raw: Option<&str>) -> FormatResult {
    match raw.and_then(parse) {
        Some(dt) => Ok(dt.format("%b %-d, %Y, %I:%M %p").to_string()),
        None => Err(raw.map(str::to_string)),
    }
}

/// Collapse a format result to display text: fallback shows the raw input,
/// and a missing input shows nothing.
pub fn display_value(result: FormatResult) -> String {
    match result {
        Ok(text) => text,
        Err(Some(raw)) => raw,
        Err(None) => String::new(),
    }
}

fn parse(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    // `datetime.now().isoformat()` has no offset and fractional seconds
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-05")), Ok("March 5, 2024".into()));
        assert_eq!(
            format_date(Some("2024-03-05T14:30:00")),
            Ok("March 5, 2024".into())
        );
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time(Some("2024-03-05T14:30:00")),
            Ok("Mar 5, 2024, 02:30 PM".into())
        );
        assert_eq!(
            format_date_time(Some("2024-03-05T14:30:00.123456")),
            Ok("Mar 5, 2024, 02:30 PM".into())
        );
        assert_eq!(
            format_date_time(Some("2024-03-05T09:05:00")),
            Ok("Mar 5, 2024, 09:05 AM".into())
        );
    }

    #[test]
    fn test_garbage_passes_through_unchanged() {
        assert_eq!(
            format_date(Some("next tuesday")),
            Err(Some("next tuesday".into()))
        );
        assert_eq!(
            format_date_time(Some("not a date")),
            Err(Some("not a date".into()))
        );
    }

    #[test]
    fn test_missing_input_passes_through() {
        assert_eq!(format_date(None), Err(None));
        assert_eq!(format_date_time(None), Err(None));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(Ok("March 5, 2024".into())), "March 5, 2024");
        assert_eq!(display_value(Err(Some("raw".into()))), "raw");
        assert_eq!(display_value(Err(None)), "");
    }
}
