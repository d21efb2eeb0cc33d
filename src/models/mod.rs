//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee_record;
mod shift_load;
mod shift_window;
mod work_interval;

pub use calculation_result::{DayPay, PayCalculation};
pub use employee_record::EmployeeRecord;
pub use shift_load::{ShiftLoad, WeeklyWorkload};
pub use shift_window::{END_OF_DAY, ShiftWindow};
pub use work_interval::{DAY_CODES, WorkInterval, weekday_for_code};
