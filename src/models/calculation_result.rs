//! Calculation result models.
//!
//! This module contains the [`PayCalculation`] type that captures the output
//! of a week calculation: the per-day breakdown and the total amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ShiftLoad;

/// The pay for one worked day.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{DayPay, ShiftLoad};
/// use rust_decimal::Decimal;
///
/// let mut hours = ShiftLoad::new();
/// hours.set("day_shift", 2);
///
/// let day = DayPay {
///     day: "MO".to_string(),
///     hours,
///     amount: Decimal::from(30),
/// };
/// assert_eq!(day.hours.total_hours(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPay {
    /// The day-of-week code.
    pub day: String,
    /// Hours worked in each shift on this day.
    pub hours: ShiftLoad,
    /// The amount paid for the day (zero if the day has no rate row).
    pub amount: Decimal,
}

/// The complete result of a week calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee name, when the record came from a `NAME=...` line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    /// The currency label of every amount.
    pub currency: String,
    /// Per-day amounts, Monday first; unknown day codes come last.
    pub days: Vec<DayPay>,
    /// The total amount for the week.
    pub total: Decimal,
}

impl PayCalculation {
    /// Total hours worked across all days and shifts.
    pub fn total_hours(&self) -> u32 {
        self.days.iter().map(|d| d.hours.total_hours()).sum()
    }

    /// Returns the pay for a day, if it was worked.
    pub fn day(&self, code: &str) -> Option<&DayPay> {
        self.days.iter().find(|d| d.day == code)
    }
}
