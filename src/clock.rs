//! Clock-time parsing
//!
//! Survey answers record times loosely (`7:30 PM`, `19:30`, `around 7:30 pm.`).
//! Parsing finds the first `H:MM` time in the answer and turns it into
//! decimal hours in [0, 24); answers with no such time, or one outside the
//! day, yield `None` so the caller can skip the record.

use regex::Regex;
use std::sync::OnceLock;

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+):(\d+)(?::(\d+))?\s*(AM|PM)?")
            .expect("clock pattern is a valid regex")
    })
}

/// Parse the first `H:MM[:SS] [AM|PM]` in `input` into decimal hours
///
/// PM adds 12 to hours below 12 and 12 AM is midnight, so `19:30 PM` reads
/// as 19.5. Seconds are ignored. Text around the time is ignored too.
pub fn parse_clock_hours(input: &str) -> Option<f64> {
    let caps = clock_pattern().captures(input)?;

    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = caps.get(2)?.as_str().parse().ok()?;

    match caps.get(4).map(|m| m.as_str().to_ascii_uppercase()).as_deref() {
        Some("PM") if hour < 12 => hour += 12,
        Some("AM") if hour == 12 => hour = 0,
        _ => {}
    }

    let hours = f64::from(hour) + f64::from(minutes) / 60.0;
    (0.0..24.0).contains(&hours).then_some(hours)
}

/// Format decimal hours as a 12-hour label (`7PM`, `7:30PM`, `12AM`)
pub fn format_clock_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let hour = total_minutes.div_euclid(60).rem_euclid(24);
    let minutes = total_minutes.rem_euclid(60);

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    if minutes > 0 {
        format!("{}:{:02}{}", display_hour, minutes, meridiem)
    } else {
        format!("{}{}", display_hour, meridiem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meridiem_conversion() {
        assert_eq!(parse_clock_hours("7:30 PM"), Some(19.5));
        assert_eq!(parse_clock_hours("12:00 AM"), Some(0.0));
        assert_eq!(parse_clock_hours("12:15 PM"), Some(12.25));
        assert_eq!(parse_clock_hours("9:00 am"), Some(9.0));
        assert_eq!(parse_clock_hours("8:45:00 pm"), Some(20.75));
        assert_eq!(parse_clock_hours("6:00PM"), Some(18.0));
    }

    #[test]
    fn test_twenty_four_hour_clock() {
        assert_eq!(parse_clock_hours("19:30"), Some(19.5));
        assert_eq!(parse_clock_hours(" 0:15 "), Some(0.25));
        assert_eq!(parse_clock_hours("24:00"), None);
    }

    #[test]
    fn test_loose_answers() {
        assert_eq!(parse_clock_hours("19:30 PM"), Some(19.5));
        assert_eq!(parse_clock_hours("13:00 PM"), Some(13.0));
        assert_eq!(parse_clock_hours("0:30 AM"), Some(0.5));
        assert_eq!(parse_clock_hours("7:30 PM."), Some(19.5));
        assert_eq!(parse_clock_hours("around 7:30 PM"), Some(19.5));
        assert_eq!(parse_clock_hours("07:30:00 PM"), Some(19.5));
        // first time wins
        assert_eq!(parse_clock_hours("6:00 PM or 8:00 PM"), Some(18.0));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_clock_hours("garbage"), None);
        assert_eq!(parse_clock_hours(""), None);
        assert_eq!(parse_clock_hours("7 PM"), None);
        assert_eq!(parse_clock_hours("23:75"), None);
        assert_eq!(parse_clock_hours("25:00 PM"), None);
    }

    #[test]
    fn test_result_in_day_range() {
        for input in ["12:00 AM", "11:59 PM", "23:59", "0:00"] {
            let h = parse_clock_hours(input).unwrap();
            assert!((0.0..24.0).contains(&h), "{input} -> {h}");
        }
    }

    #[test]
    fn test_format_clock_hours() {
        assert_eq!(format_clock_hours(19.0), "7PM");
        assert_eq!(format_clock_hours(19.5), "7:30PM");
        assert_eq!(format_clock_hours(0.0), "12AM");
        assert_eq!(format_clock_hours(12.25), "12:15PM");
    }
}
