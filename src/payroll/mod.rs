//! Payroll run orchestration for the Payroll Engine.
//!
//! This module validates run requests, resolves the target month, drives the
//! per-employee calculations and commits the single summary transaction.

mod breakdown;
mod runner;
mod validator;

pub use breakdown::{format_amount, render_breakdown};
pub use runner::{
    PayrollRunner, WARNING_NON_POSITIVE_NET_SALARY, WARNING_UNPARSEABLE_START_DATE,
};
pub use validator::{DEFAULT_MINIMUM_YEAR, resolve_target_month, validate_run_request};
