//! Day record parsing.
//!
//! A day record is a day code followed by a time range, e.g.
//! `MO10:00-12:00`. Only the hours of each time are kept.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkInterval;

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}:\d{2}").expect("time pattern is valid"));

/// Parses one day record token into a [`WorkInterval`].
///
/// The leading run of ASCII letters is the day code; it is kept as written
/// and not checked against the known codes. The rest of the token must hold
/// exactly two `HH:MM` times; any other text around them is ignored. An
/// end earlier than the start is reported as is, meaning the session
/// crosses midnight.
///
/// # Errors
///
/// Returns [`EngineError::MalformedRecord`] if the day code is missing, if
/// the token does not hold exactly two times, or if a time is out of range.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::parse_day_record;
///
/// let interval = parse_day_record("MO10:00-12:00").unwrap();
/// assert_eq!(interval.day, "MO");
/// assert_eq!(interval.start_hour, 10);
/// assert_eq!(interval.end_hour, 12);
/// ```
pub fn parse_day_record(token: &str) -> EngineResult<WorkInterval> {
    let token = token.trim();
    let malformed = |message: String| EngineError::MalformedRecord {
        token: token.to_string(),
        message,
    };

    let day_len = token
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(token.len());
    if day_len == 0 {
        return Err(malformed("missing day code".to_string()));
    }
    let (day, times) = token.split_at(day_len);

    let found: Vec<&str> = TIME_PATTERN.find_iter(times).map(|m| m.as_str()).collect();
    let [start, end] = found.as_slice() else {
        return Err(malformed(format!(
            "expected 2 time values, found {}",
            found.len()
        )));
    };

    let start_hour = parse_hour(start).map_err(&malformed)?;
    let end_hour = parse_hour(end).map_err(&malformed)?;

    debug!(day = %day, start_hour, end_hour, "Parsed day record");
    Ok(WorkInterval::new(day, start_hour, end_hour))
}

fn parse_hour(value: &str) -> Result<u32, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map(|time| time.hour())
        .map_err(|_| format!("'{}' is not a valid time of day", value))
}
