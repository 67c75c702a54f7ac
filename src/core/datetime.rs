//! Date and time-of-day strings for solve and session timestamps.
//!
//! Hosts usually offer a short time format (no seconds, maybe a meridiem
//! marker) and a long one (with seconds). We show the short form with the
//! seconds of the long form spliced in, and exactly one meridiem marker.

use crate::domain::ports::LocaleFormatter;
use crate::utils::error::{Result, StatsError};
use chrono::NaiveDateTime;

/// Combines the host's date and time renderings into `date time:SS [marker]`.
pub fn format_date_time<F: LocaleFormatter>(
    timestamp: NaiveDateTime,
    formatter: &F,
) -> Result<String> {
    let date = formatter.format_date(&timestamp);
    let short_time = formatter.format_short_time(&timestamp);
    let long_time = formatter.format_long_time(&timestamp);

    if date.trim().is_empty() || short_time.trim().is_empty() {
        return Err(StatsError::invalid_argument(
            "host formatter returned an empty date or time",
        ));
    }

    let (short_time, short_marker) = split_meridiem(&short_time);
    let (long_time, long_marker) = split_meridiem(&long_time);

    let seconds = trailing_chars(long_time, 3).ok_or_else(|| {
        StatsError::invalid_argument(format!(
            "long time '{}' has no seconds to splice in",
            long_time
        ))
    })?;

    let mut combined = format!("{} {}{}", date.trim(), short_time, seconds);

    // 以短格式決定是否顯示上午/下午，標記文字以長格式為準
    if let Some(marker) = short_marker {
        combined.push(' ');
        combined.push_str(long_marker.unwrap_or(marker));
    }

    tracing::trace!(%timestamp, result = %combined, "formatted date time");
    Ok(combined)
}

/// Splits a trailing non-digit run off a time string.
fn split_meridiem(time: &str) -> (&str, Option<&str>) {
    let time = time.trim();
    match time.chars().last() {
        Some(last) if !last.is_ascii_digit() => {
            let body = time.trim_end_matches(|c: char| !c.is_ascii_digit());
            let marker = time[body.len()..].trim();
            (body.trim_end(), Some(marker).filter(|m| !m.is_empty()))
        }
        _ => (time, None),
    }
}

fn trailing_chars(s: &str, count: usize) -> Option<&str> {
    let start = s.char_indices().rev().nth(count - 1)?.0;
    Some(&s[start..])
}

/// Host formatter built on chrono format strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoLocaleFormat {
    pub date_pattern: String,
    pub hour12: bool,
}

impl Default for ChronoLocaleFormat {
    fn default() -> Self {
        Self {
            date_pattern: "%Y-%m-%d".to_string(),
            hour12: false,
        }
    }
}

impl ChronoLocaleFormat {
    pub fn new(date_pattern: impl Into<String>, hour12: bool) -> Self {
        Self {
            date_pattern: date_pattern.into(),
            hour12,
        }
    }
}

impl LocaleFormatter for ChronoLocaleFormat {
    fn format_date(&self, timestamp: &NaiveDateTime) -> String {
        timestamp.format(&self.date_pattern).to_string()
    }

    fn format_short_time(&self, timestamp: &NaiveDateTime) -> String {
        let pattern = if self.hour12 { "%-I:%M %p" } else { "%H:%M" };
        timestamp.format(pattern).to_string()
    }

    fn format_long_time(&self, timestamp: &NaiveDateTime) -> String {
        let pattern = if self.hour12 { "%-I:%M:%S %p" } else { "%H:%M:%S" };
        timestamp.format(pattern).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FakeFormatter {
        date: &'static str,
        short: &'static str,
        long: &'static str,
    }

    impl LocaleFormatter for FakeFormatter {
        fn format_date(&self, _timestamp: &NaiveDateTime) -> String {
            self.date.to_string()
        }

        fn format_short_time(&self, _timestamp: &NaiveDateTime) -> String {
            self.short.to_string()
        }

        fn format_long_time(&self, _timestamp: &NaiveDateTime) -> String {
            self.long.to_string()
        }
    }

    fn evening() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, 14)
            .unwrap()
            .and_hms_opt(22, 13, 20)
            .unwrap()
    }

    fn stitch(date: &'static str, short: &'static str, long: &'static str) -> Result<String> {
        format_date_time(evening(), &FakeFormatter { date, short, long })
    }

    #[test]
    fn test_twelve_hour_marker_appears_once() {
        let out = stitch("11/14/23", "10:13 PM", "Nov 14, 2023 10:13:20 PM").unwrap();
        assert_eq!(out, "11/14/23 10:13:20 PM");
        assert_eq!(out.matches("PM").count(), 1);
    }

    #[test]
    fn test_twenty_four_hour_has_no_marker() {
        let out = stitch("14.11.23", "22:13", "14.11.2023 22:13:20").unwrap();
        assert_eq!(out, "14.11.23 22:13:20");
    }

    #[test]
    fn test_short_marker_kept_when_long_form_has_none() {
        let out = stitch("11/14/23", "10:13 p.m.", "22:13:20").unwrap();
        assert_eq!(out, "11/14/23 10:13:20 p.m.");
    }

    #[test]
    fn test_long_marker_text_wins_when_both_present() {
        let out = stitch("11/14/23", "10:13 PM", "10:13:20 pm").unwrap();
        assert_eq!(out, "11/14/23 10:13:20 pm");
    }

    #[test]
    fn test_long_marker_dropped_when_short_form_is_24h() {
        let out = stitch("11/14/23", "22:13", "10:13:20 PM").unwrap();
        assert_eq!(out, "11/14/23 22:13:20");
    }

    #[test]
    fn test_empty_host_output_is_rejected() {
        assert!(stitch("", "10:13 PM", "10:13:20 PM").is_err());
        assert!(stitch("11/14/23", "10:13", "PM").is_err());
    }

    #[test]
    fn test_chrono_formatter() {
        let twelve = ChronoLocaleFormat::new("%Y-%m-%d", true);
        assert_eq!(
            format_date_time(evening(), &twelve).unwrap(),
            "2023-11-14 10:13:20 PM"
        );

        let twenty_four = ChronoLocaleFormat::default();
        assert_eq!(
            format_date_time(evening(), &twenty_four).unwrap(),
            "2023-11-14 22:13:20"
        );
    }
}
