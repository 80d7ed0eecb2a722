/// Utilities for date and time formatting
///
/// The API sends timestamps either as RFC 3339 (`2024-03-15T14:02:26Z`) or as a
/// zone-less local date time (`2024-03-15T14:02:26.123`).
use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d %b %Y, %H:%M";

/// Format an API timestamp for display; "-" when absent
///
/// Unparseable values are shown as received.
/// Example: "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_created_at(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return "-".to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(
            format_created_at(Some("2024-03-15T14:02:26.123Z")),
            "15 Mar 2024, 14:02"
        );
        assert_eq!(
            format_created_at(Some("2024-12-31T23:59:59+05:30")),
            "31 Dec 2024, 23:59"
        );
    }

    #[test]
    fn test_format_local_datetime() {
        assert_eq!(
            format_created_at(Some("2024-03-15T14:02:26.123456")),
            "15 Mar 2024, 14:02"
        );
        assert_eq!(format_created_at(Some("2024-03-15T14:02:26")), "15 Mar 2024, 14:02");
    }

    #[test]
    fn test_missing_or_invalid() {
        assert_eq!(format_created_at(None), "-");
        assert_eq!(format_created_at(Some("  ")), "-");
        assert_eq!(format_created_at(Some("yesterday")), "yesterday");
    }
}
