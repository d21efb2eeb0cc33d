//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::service::PayrollService;

/// Shared application state.
///
/// The service holds its configuration behind an `Arc`, so cloning the
/// state for each request does not copy the rate table.
#[derive(Clone)]
pub struct AppState {
    service: PayrollService,
}

impl AppState {
    /// Creates a new application state around a payroll service.
    pub fn new(service: PayrollService) -> Self {
        Self { service }
    }

    /// Returns the payroll service.
    pub fn service(&self) -> &PayrollService {
        &self.service
    }
}
