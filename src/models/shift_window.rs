//! Shift window model.
//!
//! A shift window is a named time-of-day interval `[start_hour, end_hour)`
//! used to apportion worked hours. Windows are validated once when built and
//! never change afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The hour value that stands for midnight at the end of the day.
pub const END_OF_DAY: u32 = 24;

/// A named, half-open time-of-day interval in whole hours.
///
/// # Example
///
/// ```
/// use shift_payroll::models::ShiftWindow;
///
/// let evening = ShiftWindow::new("evening_shift", 18, 24).unwrap();
/// assert_eq!(evening.width(), 6);
/// assert_eq!(evening.overlap(20, 24), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    name: String,
    start_hour: u32,
    end_hour: u32,
}

impl ShiftWindow {
    /// Creates a window, checking `start_hour < end_hour <= 24`.
    pub fn new(name: impl Into<String>, start_hour: u32, end_hour: u32) -> EngineResult<Self> {
        let name = name.into();
        if end_hour > END_OF_DAY {
            return Err(EngineError::InvalidShiftWindow {
                shift: name,
                message: format!("end hour {} is past midnight", end_hour),
            });
        }
        if end_hour <= start_hour {
            return Err(EngineError::InvalidShiftWindow {
                shift: name,
                message: format!(
                    "end hour {} is not after start hour {}",
                    end_hour, start_hour
                ),
            });
        }
        Ok(Self {
            name,
            start_hour,
            end_hour,
        })
    }

    /// Returns the shift name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first hour of the window.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Returns the exclusive end hour of the window (24 for midnight).
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Returns the number of hours covered by the window.
    pub fn width(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    /// Returns the whole hours shared by `[start, end)` and this window.
    ///
    /// Computed as `max(0, min(end, window_end) - max(start, window_start))`.
    pub fn overlap(&self, start: u32, end: u32) -> u32 {
        end.min(self.end_hour)
            .saturating_sub(start.max(self.start_hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_window() {
        let window = ShiftWindow::new("day_shift", 9, 18).unwrap();
        assert_eq!(window.name(), "day_shift");
        assert_eq!(window.start_hour(), 9);
        assert_eq!(window.end_hour(), 18);
        assert_eq!(window.width(), 9);
    }

    #[test]
    fn test_new_rejects_empty_window() {
        let result = ShiftWindow::new("broken", 12, 12);
        match result {
            Err(EngineError::InvalidShiftWindow { shift, message }) => {
                assert_eq!(shift, "broken");
                assert!(message.contains("not after"));
            }
            _ => panic!("Expected InvalidShiftWindow error"),
        }
    }

    #[test]
    fn test_new_rejects_end_past_midnight() {
        assert!(ShiftWindow::new("late", 20, 25).is_err());
    }

    #[test]
    fn test_overlap_inside_window() {
        let window = ShiftWindow::new("day_shift", 9, 18).unwrap();
        assert_eq!(window.overlap(10, 12), 2);
    }

    #[test]
    fn test_overlap_partial() {
        let window = ShiftWindow::new("day_shift", 9, 18).unwrap();
        assert_eq!(window.overlap(7, 11), 2);
        assert_eq!(window.overlap(16, 22), 2);
    }

    #[test]
    fn test_overlap_disjoint_is_zero() {
        let window = ShiftWindow::new("day_shift", 9, 18).unwrap();
        assert_eq!(window.overlap(1, 3), 0);
        assert_eq!(window.overlap(20, 24), 0);
    }

    #[test]
    fn test_overlap_touching_boundary_is_zero() {
        // Half-open: [6, 9) and [9, 18) share no hour.
        let window = ShiftWindow::new("day_shift", 9, 18).unwrap();
        assert_eq!(window.overlap(6, 9), 0);
        assert_eq!(window.overlap(18, 20), 0);
    }
}
