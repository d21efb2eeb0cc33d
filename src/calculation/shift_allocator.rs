//! Allocation of worked hours to shift windows.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{ShiftLoad, ShiftWindow, WorkInterval};

/// Splits a work interval's hours across the shift windows.
///
/// Each window `[w_start, w_end)` receives
/// `max(0, min(end, w_end) - max(start, w_start))` hours. An interval that
/// crosses midnight is cut at hour 24 of its own day; nothing is carried
/// into the next day. Every window appears in the result, zero or not.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::allocate;
/// use shift_payroll::config::ConfigLoader;
/// use shift_payroll::models::WorkInterval;
///
/// let config = ConfigLoader::builtin().unwrap().into_config();
/// let load = allocate(&WorkInterval::new("MO", 8, 10), config.windows());
///
/// assert_eq!(load.hours("night_shift"), 1);
/// assert_eq!(load.hours("day_shift"), 1);
/// assert_eq!(load.hours("evening_shift"), 0);
/// ```
pub fn allocate(interval: &WorkInterval, windows: &BTreeMap<String, ShiftWindow>) -> ShiftLoad {
    let start = interval.start_hour;
    let end = interval.effective_end_hour();

    let load: ShiftLoad = windows
        .values()
        .map(|window| (window.name().to_string(), window.overlap(start, end)))
        .collect();

    let duration = interval.duration_hours();
    debug!(
        day = %interval.day,
        start,
        end,
        duration,
        allocated = load.total_hours(),
        unallocated = duration.saturating_sub(load.total_hours()),
        "Allocated interval to shifts"
    );
    load
}
