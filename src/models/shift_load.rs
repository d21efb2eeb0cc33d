//! Shift load and weekly workload models.
//!
//! A [`ShiftLoad`] records how many hours fell into each shift; a
//! [`WeeklyWorkload`] groups loads by day-of-week code for one week record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hours worked per shift name.
///
/// Allocation always fills in every configured shift, so a shift with no
/// overlap is present with zero hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftLoad(BTreeMap<String, u32>);

impl ShiftLoad {
    /// Creates an empty load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hours for a shift, replacing any previous value.
    pub fn set(&mut self, shift: impl Into<String>, hours: u32) {
        self.0.insert(shift.into(), hours);
    }

    /// Returns the hours for a shift, or zero when the shift is absent.
    pub fn hours(&self, shift: &str) -> u32 {
        self.0.get(shift).copied().unwrap_or(0)
    }

    /// Returns true if the shift has an entry, even a zero one.
    pub fn contains(&self, shift: &str) -> bool {
        self.0.contains_key(shift)
    }

    /// Iterates over `(shift name, hours)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, hours)| (name.as_str(), *hours))
    }

    /// Returns the number of shift entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the load has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the hours summed over all shifts.
    pub fn total_hours(&self) -> u32 {
        self.0.values().fold(0, |total, hours| total.saturating_add(*hours))
    }

    /// Adds another load into this one, shift by shift.
    pub fn accumulate(&mut self, other: &ShiftLoad) {
        for (shift, hours) in other.iter() {
            let total = self.0.entry(shift.to_string()).or_insert(0);
            *total = total.saturating_add(hours);
        }
    }
}

impl FromIterator<(String, u32)> for ShiftLoad {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Shift loads keyed by day-of-week code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyWorkload(BTreeMap<String, ShiftLoad>);

impl WeeklyWorkload {
    /// Creates an empty workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a load to a day. A day seen more than once accumulates its hours.
    pub fn add(&mut self, day: impl Into<String>, load: &ShiftLoad) {
        self.0.entry(day.into()).or_default().accumulate(load);
    }

    /// Returns the load for a day, if the day was worked.
    pub fn get(&self, day: &str) -> Option<&ShiftLoad> {
        self.0.get(day)
    }

    /// Iterates over `(day code, load)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShiftLoad)> {
        self.0.iter().map(|(day, load)| (day.as_str(), load))
    }

    /// Returns the number of distinct days.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no day was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
