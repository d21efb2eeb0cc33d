//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating weekly pay
//! from work records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, CalculationRequest};
pub use response::{ApiError, BatchItem, BatchResponse};
pub use state::AppState;
