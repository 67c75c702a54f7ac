use chrono::NaiveDateTime;

/// Host-provided, locale-aware renderings of a local wall-clock instant.
///
/// Only the stitching of these pieces lives in this crate; the locale data
/// itself is the host's business.
pub trait LocaleFormatter {
    /// Short date, e.g. `11/14/23`.
    fn format_date(&self, timestamp: &NaiveDateTime) -> String;

    /// Time of day without seconds, e.g. `10:13 PM` or `22:13`.
    fn format_short_time(&self, timestamp: &NaiveDateTime) -> String;

    /// Time of day with seconds, e.g. `10:13:20 PM` or `22:13:20`.
    fn format_long_time(&self, timestamp: &NaiveDateTime) -> String;
}
