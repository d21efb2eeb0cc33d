//! Employee record line model.
//!
//! One input line carries one employee: `NAME=MO10:00-12:00,TU10:00-12:00`.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An employee name paired with its raw week record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee name, as written before `=`.
    pub name: String,
    /// The comma-separated day records after `=`.
    pub record: String,
}

impl EmployeeRecord {
    /// Splits a `name=record` line.
    ///
    /// Surrounding whitespace (including the line terminator) is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::EmployeeRecord;
    ///
    /// let line = EmployeeRecord::parse("ASTRID=MO10:00-12:00\n").unwrap();
    /// assert_eq!(line.name, "ASTRID");
    /// assert_eq!(line.record, "MO10:00-12:00");
    /// ```
    pub fn parse(line: &str) -> EngineResult<Self> {
        let line = line.trim();
        let (name, record) = line
            .split_once('=')
            .ok_or_else(|| EngineError::MalformedRecord {
                token: line.to_string(),
                message: "expected NAME=RECORD".to_string(),
            })?;

        if record.contains('=') {
            return Err(EngineError::MalformedRecord {
                token: line.to_string(),
                message: "expected a single '=' between name and record".to_string(),
            });
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::MalformedRecord {
                token: line.to_string(),
                message: "employee name is empty".to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            record: record.trim().to_string(),
        })
    }
}
