//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the shift windows, the rate
//! table and the currency label from a YAML file or from built-in defaults.
//!
//! # Example
//!
//! ```
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::builtin().unwrap().into_config();
//! assert_eq!(config.windows().len(), 3);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, LoadOptions};
pub use types::{PayrollConfiguration, PayrollFile, RateTable, RawShiftWindow};
