//! Small display helpers shared by the list views.

use chrono::{DateTime, NaiveDateTime};

/// Render a backend ISO-8601 timestamp as a short date, e.g. `Mar 1, 2024`.
///
/// The backend sends timestamps both with and without a UTC offset; a
/// value that parses as neither is shown verbatim.
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %-d, %Y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

/// Render a monetary amount, two decimal places.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_offset_timestamps() {
        assert_eq!(format_date("2024-03-01T09:30:00Z"), "Mar 1, 2024");
    }

    #[test]
    fn formats_naive_timestamps() {
        assert_eq!(format_date("2024-12-24T18:05:00"), "Dec 24, 2024");
        assert_eq!(format_date("2024-12-24T18:05:00.123456"), "Dec 24, 2024");
    }

    #[test]
    fn passes_through_unparseable_values() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(19.9), "$19.90");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
