//! Calculation logic for the payroll engine.
//!
//! This module contains the steps of a week calculation: shift window
//! normalization, day record parsing, allocation of worked hours to shifts,
//! and rate lookup with aggregation into daily and weekly amounts.

mod interval_parser;
mod pay_aggregator;
mod schedule;
mod shift_allocator;

pub use interval_parser::parse_day_record;
pub use pay_aggregator::{amount_for_day, amount_for_week, lenient_rate};
pub use schedule::{MAX_HOURLY_RATE, check_rate_coverage, check_rates, normalize_windows};
pub use shift_allocator::allocate;
