//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a payroll run. None of these are retried
//! automatically; an operator re-triggers the run after fixing the cause.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// Every failure is reported before the single summary write happens, so no
/// variant implies partially committed data.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::AlreadyProcessed {
///     period: "October 2026".to_string(),
/// };
/// assert_eq!(error.to_string(), "Payroll has already been processed for October 2026");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested year or month is out of range.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The request field that was rejected.
        field: String,
        /// A description of the accepted range.
        message: String,
    },

    /// A payroll expense already exists for the requested month.
    #[error("Payroll has already been processed for {period}")]
    AlreadyProcessed {
        /// Human-readable month label, e.g. "October 2026".
        period: String,
    },

    /// The employee directory returned no active employees.
    #[error("No active users found to process payroll for")]
    NoEligibleEmployees,

    /// Every computed net salary summed to zero.
    #[error("Total salaries amount is zero; no expense was created")]
    ZeroTotal,

    /// A directory or ledger read failed.
    #[error("Failed to read from {source_name}: {message}")]
    UpstreamReadFailure {
        /// The collaborator that failed.
        source_name: String,
        /// The underlying failure.
        message: String,
    },

    /// Persisting the summary transaction failed.
    #[error("Failed to record payroll transaction: {message}")]
    WriteFailure {
        /// The underlying failure.
        message: String,
    },

    /// A salary amount exceeded the representable decimal range.
    #[error("Calculation overflowed during {operation}")]
    CalculationOverflow {
        /// The step that overflowed, including the employee when known.
        operation: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
