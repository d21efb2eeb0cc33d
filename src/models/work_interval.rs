//! Work interval model and day-of-week codes.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::shift_window::END_OF_DAY;

/// The day-of-week codes understood by the default rate table, Monday first.
pub const DAY_CODES: [&str; 7] = ["MO", "TU", "WE", "TH", "FR", "SA", "SU"];

/// Maps a two-letter day code to its weekday.
///
/// Codes are case-sensitive; anything else returns `None`.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use shift_payroll::models::weekday_for_code;
///
/// assert_eq!(weekday_for_code("SA"), Some(Weekday::Sat));
/// assert_eq!(weekday_for_code("sa"), None);
/// ```
pub fn weekday_for_code(code: &str) -> Option<Weekday> {
    match code {
        "MO" => Some(Weekday::Mon),
        "TU" => Some(Weekday::Tue),
        "WE" => Some(Weekday::Wed),
        "TH" => Some(Weekday::Thu),
        "FR" => Some(Weekday::Fri),
        "SA" => Some(Weekday::Sat),
        "SU" => Some(Weekday::Sun),
        _ => None,
    }
}

/// One continuous work session on a given day, in whole hours.
///
/// `end_hour < start_hour` means the session crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The day-of-week code as written in the record.
    pub day: String,
    /// The hour the session started.
    pub start_hour: u32,
    /// The hour the session ended.
    pub end_hour: u32,
}

impl WorkInterval {
    /// Creates a new interval.
    pub fn new(day: impl Into<String>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            day: day.into(),
            start_hour,
            end_hour,
        }
    }

    /// Returns true when the recorded end is earlier than the start.
    pub fn crosses_midnight(&self) -> bool {
        self.start_hour > self.end_hour
    }

    /// Returns the end hour used for allocation.
    ///
    /// A session crossing midnight is cut at the end of its own day; the
    /// hours after midnight are not carried into the next day.
    pub fn effective_end_hour(&self) -> u32 {
        if self.crosses_midnight() {
            END_OF_DAY
        } else {
            self.end_hour
        }
    }

    /// Returns the number of hours counted for this interval.
    pub fn duration_hours(&self) -> u32 {
        self.effective_end_hour().saturating_sub(self.start_hour)
    }
}
