//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! reading work records and calculating pay.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Unknown day codes and unknown shift names are deliberately absent here:
/// rate lookups are lenient and such entries contribute a zero amount.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::MalformedRecord {
///     token: "MO10:00".to_string(),
///     message: "expected 2 time values, found 1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed work record 'MO10:00': expected 2 time values, found 1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift window definition is malformed or empty after normalization.
    #[error("Invalid shift window '{shift}': {message}")]
    InvalidShiftWindow {
        /// The name of the offending shift.
        shift: String,
        /// A description of what made the window invalid.
        message: String,
    },

    /// A day's rate row has no entry for a configured shift (strict mode only).
    #[error("No rate configured for shift '{shift}' on day '{day}'")]
    MissingRate {
        /// The day-of-week code of the rate row.
        day: String,
        /// The shift name that has no rate.
        shift: String,
    },

    /// A configured rate is negative or too large to pay with.
    #[error("Invalid rate for shift '{shift}' on day '{day}': {message}")]
    InvalidRate {
        /// The day-of-week code of the rate row.
        day: String,
        /// The shift name the rate belongs to.
        shift: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// A pay amount no longer fits the decimal range.
    #[error("Pay amount for day '{day}' is out of range")]
    AmountOverflow {
        /// The day whose amount overflowed.
        day: String,
    },

    /// A work record token could not be parsed.
    #[error("Malformed work record '{token}': {message}")]
    MalformedRecord {
        /// The token (or line) that failed to parse.
        token: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The input source could not be opened or read.
    #[error("Cannot read input '{path}': {message}")]
    InputSource {
        /// The path of the input source.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by an invalid payroll configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::ConfigNotFound { .. }
                | EngineError::ConfigParseError { .. }
                | EngineError::InvalidShiftWindow { .. }
                | EngineError::MissingRate { .. }
                | EngineError::InvalidRate { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
