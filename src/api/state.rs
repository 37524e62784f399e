//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::payroll::PayrollRunner;

/// Shared application state.
///
/// Holds the payroll runner, which in turn owns the injected collaborators.
#[derive(Clone)]
pub struct AppState {
    runner: Arc<PayrollRunner>,
}

impl AppState {
    /// Creates a new application state around a runner.
    pub fn new(runner: PayrollRunner) -> Self {
        Self {
            runner: Arc::new(runner),
        }
    }

    /// Returns a reference to the payroll runner.
    pub fn runner(&self) -> &PayrollRunner {
        &self.runner
    }
}
