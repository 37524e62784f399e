//! Response types for the Payroll Engine API.
//!
//! This module defines the success and error response structures and maps
//! engine errors onto HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    AuditTrace, AuditWarning, CalculatedTotals, FlaggedEntry, PayrollEntry, PayrollMonth,
    PayrollRunResult,
};
use crate::payroll::format_amount;

/// Successful run response body.
///
/// Amounts serialize as decimal strings, not JSON numbers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPayrollResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Identifier of the summary transaction.
    pub transaction_id: String,
    /// The processed month.
    pub period: PayrollMonth,
    /// Amount recorded on the summary transaction, as a decimal string.
    pub total_amount: Decimal,
    /// Number of employees paid.
    pub employee_count: usize,
    /// Entries with a positive net salary.
    pub breakdown: Vec<PayrollEntry>,
    /// Entries left out because their net salary is not positive.
    pub flagged: Vec<FlaggedEntry>,
    /// Totals recomputed from the breakdown.
    pub calculated_totals: CalculatedTotals,
    /// Data problems an operator should correct.
    pub warnings: Vec<AuditWarning>,
    /// Calculation steps and warnings.
    pub audit_trace: AuditTrace,
}

impl RunPayrollResponse {
    /// Builds the response for a completed run.
    pub fn from_result(result: PayrollRunResult, currency: &str) -> Self {
        let message = format!(
            "Payroll processed for {}: {} employee(s), total {} {}",
            result.period.label(),
            result.employee_count,
            currency,
            format_amount(result.total_amount)
        );

        Self {
            success: true,
            message,
            transaction_id: result.transaction_id,
            period: result.period,
            total_amount: result.total_amount,
            employee_count: result.employee_count,
            breakdown: result.breakdown,
            flagged: result.flagged,
            calculated_totals: result.calculated_totals,
            warnings: result.audit_trace.warnings.clone(),
            audit_trace: result.audit_trace,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            EngineError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EngineError::AlreadyProcessed { .. } => (StatusCode::CONFLICT, "ALREADY_PROCESSED"),
            EngineError::NoEligibleEmployees => {
                (StatusCode::UNPROCESSABLE_ENTITY, "NO_ELIGIBLE_EMPLOYEES")
            }
            EngineError::ZeroTotal => (StatusCode::UNPROCESSABLE_ENTITY, "ZERO_TOTAL"),
            EngineError::CalculationOverflow { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "CALCULATION_OVERFLOW")
            }
            EngineError::UpstreamReadFailure { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_READ_FAILURE")
            }
            EngineError::WriteFailure { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "WRITE_FAILURE")
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}
