//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PayrollConfiguration`] built from them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftWindow;

/// A shift window as written in configuration, with `HH:MM` bounds.
///
/// An `end` of `"00:00"` stands for midnight at the end of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShiftWindow {
    /// Start time, `HH:MM`.
    pub start: String,
    /// End time, `HH:MM`.
    pub end: String,
}

impl RawShiftWindow {
    /// Creates a raw window from two `HH:MM` strings.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Hourly rates by day-of-week code, then by shift name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<String, BTreeMap<String, Decimal>>);

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate for a day and shift.
    pub fn insert(&mut self, day: impl Into<String>, shift: impl Into<String>, rate: Decimal) {
        self.0
            .entry(day.into())
            .or_default()
            .insert(shift.into(), rate);
    }

    /// Returns the rate row for a day, if the day is configured.
    pub fn day(&self, day: &str) -> Option<&BTreeMap<String, Decimal>> {
        self.0.get(day)
    }

    /// Returns the rate for a day and shift, if both are configured.
    pub fn rate(&self, day: &str, shift: &str) -> Option<Decimal> {
        self.day(day).and_then(|row| row.get(shift)).copied()
    }

    /// Iterates over the configured day codes.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// The payroll configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollFile {
    /// Currency label printed next to amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Shift windows by name.
    pub shifts: BTreeMap<String, RawShiftWindow>,
    /// Hourly rates by day and shift.
    pub rates: RateTable,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// The validated configuration shared by every calculation.
///
/// Built once and read-only afterwards; wrap it in an `Arc` to share it
/// between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollConfiguration {
    /// Shift windows by name.
    windows: BTreeMap<String, ShiftWindow>,
    /// Hourly rates by day and shift.
    rates: RateTable,
    /// Currency label.
    currency: String,
}

impl PayrollConfiguration {
    /// Creates a configuration from already normalized windows.
    pub fn new(
        windows: BTreeMap<String, ShiftWindow>,
        rates: RateTable,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            windows,
            rates,
            currency: currency.into(),
        }
    }

    /// Returns the shift windows.
    pub fn windows(&self) -> &BTreeMap<String, ShiftWindow> {
        &self.windows
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the currency label.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}
