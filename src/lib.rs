//! Shift Payroll Engine
//!
//! This crate computes weekly pay from compact work records such as
//! `MO10:00-12:00,SA14:00-18:00`: each interval is split across named shift
//! windows and paid at a per-day, per-shift hourly rate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod service;

pub use service::PayrollService;
