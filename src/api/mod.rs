//! HTTP API module for the Payroll Engine.
//!
//! This module exposes the payroll run and health endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RunPayrollRequest;
pub use response::{ApiError, ApiErrorResponse, RunPayrollResponse};
pub use state::AppState;
