//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/calculate/batch` endpoints.

use serde::{Deserialize, Serialize};

/// Request body for the `/calculate` endpoint.
///
/// # Example
///
/// ```
/// use shift_payroll::api::CalculationRequest;
///
/// let request: CalculationRequest =
///     serde_json::from_str(r#"{"record": "MO10:00-12:00"}"#).unwrap();
/// assert!(request.employee.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Optional employee name echoed back in the result.
    #[serde(default)]
    pub employee: Option<String>,
    /// The comma-separated week record, e.g. `MO10:00-12:00,TU10:00-12:00`.
    pub record: String,
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Input lines in `NAME=RECORD` form.
    pub lines: Vec<String>,
}
