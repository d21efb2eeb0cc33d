//! Shift window normalization and rate table coverage checks.
//!
//! Configuration writes windows as `HH:MM` pairs. Only the hour is kept and
//! an end of `00:00` becomes hour 24, so `18:01`–`00:00` is the window
//! `[18, 24)`.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{RateTable, RawShiftWindow};
use crate::error::{EngineError, EngineResult};
use crate::models::{END_OF_DAY, ShiftWindow};

/// Normalizes raw `HH:MM` windows into hour-based [`ShiftWindow`]s.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShiftWindow`] if a bound is not a valid
/// `HH:MM` time or if the normalized end is not after the start.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use shift_payroll::calculation::normalize_windows;
/// use shift_payroll::config::RawShiftWindow;
///
/// let mut raw = BTreeMap::new();
/// raw.insert("evening_shift".to_string(), RawShiftWindow::new("18:01", "00:00"));
///
/// let windows = normalize_windows(&raw).unwrap();
/// assert_eq!(windows["evening_shift"].start_hour(), 18);
/// assert_eq!(windows["evening_shift"].end_hour(), 24);
/// ```
pub fn normalize_windows(
    raw: &BTreeMap<String, RawShiftWindow>,
) -> EngineResult<BTreeMap<String, ShiftWindow>> {
    raw.iter()
        .map(|(name, window)| {
            let start = parse_hour(name, &window.start)?;
            let end = match parse_hour(name, &window.end)? {
                0 => END_OF_DAY,
                hour => hour,
            };
            let window = ShiftWindow::new(name.clone(), start, end)?;
            debug!(
                shift = %window.name(),
                start,
                end,
                width = window.width(),
                "Normalized shift window"
            );
            Ok((name.clone(), window))
        })
        .collect()
}

/// Parses the hour of an `HH:MM` string, discarding the minutes.
fn parse_hour(shift: &str, value: &str) -> EngineResult<u32> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|time| time.hour())
        .map_err(|e| EngineError::InvalidShiftWindow {
            shift: shift.to_string(),
            message: format!("'{}' is not a valid HH:MM time: {}", value, e),
        })
}

/// Largest hourly rate accepted from configuration.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Checks that every configured rate lies in `0..=MAX_HOURLY_RATE`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRate`] for the first rate out of range.
pub fn check_rates(rates: &RateTable) -> EngineResult<()> {
    for day in rates.days() {
        for (shift, rate) in rates.day(day).into_iter().flatten() {
            let message = if *rate < Decimal::ZERO {
                format!("rate {} is negative", rate)
            } else if *rate > MAX_HOURLY_RATE {
                format!("rate {} exceeds the maximum of {}", rate, MAX_HOURLY_RATE)
            } else {
                continue;
            };
            return Err(EngineError::InvalidRate {
                day: day.to_string(),
                shift: shift.clone(),
                message,
            });
        }
    }
    Ok(())
}

/// Finds configured shifts that have no rate on a configured day.
///
/// Such gaps are paid at rate zero. With `strict` set the first gap is an
/// error; otherwise each gap is logged and returned as `(day, shift)`.
pub fn check_rate_coverage(
    windows: &BTreeMap<String, ShiftWindow>,
    rates: &RateTable,
    strict: bool,
) -> EngineResult<Vec<(String, String)>> {
    let mut gaps = Vec::new();

    for day in rates.days() {
        for shift in windows.keys() {
            if rates.rate(day, shift).is_some() {
                continue;
            }
            if strict {
                return Err(EngineError::MissingRate {
                    day: day.to_string(),
                    shift: shift.clone(),
                });
            }
            warn!(day = %day, shift = %shift, "No rate configured, hours will be paid at 0");
            gaps.push((day.to_string(), shift.clone()));
        }
    }

    Ok(gaps)
}
