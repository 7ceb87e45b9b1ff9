//! Display formatting for the backend's date strings.
//!
//! The backend emits timestamps as "dd.MM.yyyy H:mm:ss" strings and the
//! client never does arithmetic on them, so they stay strings end to end.
//! A string that does not parse is shown unmodified rather than turned into
//! an error.

use chrono::NaiveDateTime;

const WIRE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Date part of a backend timestamp ("23.06.2025 13:53:45" becomes
/// "23.06.2025"); the input unchanged when it does not parse.
pub fn readable_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw.trim(), WIRE_FORMAT) {
        Ok(parsed) => parsed.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Date and minutes of a backend timestamp ("23.06.2025 13:53:45" becomes
/// "23.06.2025 13:53"); the input unchanged when it does not parse.
pub fn readable_date_time(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw.trim(), WIRE_FORMAT) {
        Ok(parsed) => parsed.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_timestamps() {
        assert_eq!(readable_date("23.06.2025 13:53:45"), "23.06.2025");
        assert_eq!(readable_date_time("23.06.2025 13:53:45"), "23.06.2025 13:53");
    }

    #[test]
    fn accepts_single_digit_hours() {
        assert_eq!(readable_date("21.11.2025 0:00:00"), "21.11.2025");
        assert_eq!(readable_date_time("21.11.2025 0:00:00"), "21.11.2025 00:00");
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(readable_date("soon"), "soon");
        assert_eq!(readable_date_time(""), "");
        assert_eq!(readable_date("2025-06-23"), "2025-06-23");
    }
}
