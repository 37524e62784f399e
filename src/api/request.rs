//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structure for the `/payroll/run`
//! endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/payroll/run` endpoint.
///
/// Both fields are optional; the current month is processed unless both are
/// supplied. Values are signed so out-of-range input reaches validation and
/// gets a descriptive error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPayrollRequest {
    /// Calendar year to process.
    #[serde(default)]
    pub year: Option<i32>,
    /// Calendar month to process, 1-12.
    #[serde(default)]
    pub month: Option<i32>,
}
