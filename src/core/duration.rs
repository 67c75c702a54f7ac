use crate::domain::model::DurationParts;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::validate_non_negative_nanos;
use regex::Regex;
use std::sync::LazyLock;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_CENTI: i64 = 10_000_000;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:(\d+):)?(\d+):)?(\d+)(?:\.(\d{1,9}))?$").expect("valid duration pattern")
});

/// Splits a duration into `H:MM:SS` / `M:SS` / `S` and its subsecond digits.
///
/// The subsecond digits are milliseconds (3 digits) when `include_millis` is
/// set, otherwise centiseconds (2 digits), rounded half up. A rounding carry
/// moves into the seconds so the digit count never grows. Hours wrap at 24;
/// there is no day component.
pub fn format_duration(nanoseconds: i64, include_millis: bool) -> Result<DurationParts> {
    validate_non_negative_nanos("duration", nanoseconds)?;

    let (unit, per_second, width) = if include_millis {
        (NANOS_PER_MILLI, NANOS_PER_SECOND / NANOS_PER_MILLI, 3)
    } else {
        (NANOS_PER_CENTI, NANOS_PER_SECOND / NANOS_PER_CENTI, 2)
    };

    let mut units = nanoseconds / unit;
    if nanoseconds % unit >= unit / 2 {
        units += 1;
    }

    let total_seconds = units / per_second;
    let fraction = units % per_second;

    let hours = (total_seconds / 60 / 60) % 24;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;

    let main = if hours != 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes != 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{}", seconds)
    };

    Ok(DurationParts {
        main,
        fractional: format!("{:0width$}", fraction, width = width),
    })
}

/// `main.fractional` in one string, e.g. `1:30.00`.
pub fn format_duration_string(nanoseconds: i64, include_millis: bool) -> Result<String> {
    Ok(format_duration(nanoseconds, include_millis)?.to_string())
}

/// Parses a hand-entered time such as `12.34`, `1:05.2` or `1:02:03.456`.
pub fn parse_duration(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let caps = DURATION_PATTERN.captures(trimmed).ok_or_else(|| {
        StatsError::invalid_argument(format!("'{}' is not a time like 1:02.34", input))
    })?;

    let number = |idx: usize| -> Result<i64> {
        caps.get(idx)
            .map(|m| m.as_str().parse::<i64>())
            .transpose()
            .map(|v| v.unwrap_or(0))
            .map_err(|e| StatsError::invalid_argument(format!("'{}': {}", input, e)))
    };

    let hours = number(1)?;
    let minutes = number(2)?;
    let seconds = number(3)?;

    if caps.get(2).is_some() && seconds >= 60 {
        return Err(StatsError::invalid_argument(format!(
            "'{}': seconds must be below 60",
            input
        )));
    }
    if caps.get(1).is_some() && minutes >= 60 {
        return Err(StatsError::invalid_argument(format!(
            "'{}': minutes must be below 60",
            input
        )));
    }

    // 小數部分補齊到奈秒
    let fraction = match caps.get(4) {
        Some(m) => format!("{:0<9}", m.as_str())
            .parse::<i64>()
            .map_err(|e| StatsError::invalid_argument(format!("'{}': {}", input, e)))?,
        None => 0,
    };

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|s| s.checked_add(seconds))
        .and_then(|s| s.checked_mul(NANOS_PER_SECOND))
        .and_then(|ns| ns.checked_add(fraction))
        .ok_or_else(|| StatsError::invalid_argument(format!("'{}' is too large", input)))
}
