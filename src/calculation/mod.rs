//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure, per-employee calculation steps of a payroll
//! run: salary proration by start date, aggregation of infraction deductions
//! and bonuses, and resolution of the net salary entry.

mod adjustments;
mod net_salary;
mod proration;

pub use adjustments::{AdjustmentResult, aggregate_adjustments, bonus_value, deduction_value};
pub use net_salary::{NetSalaryResult, proration_note, resolve_net_salary};
pub use proration::{ProrationOutcome, ProrationResult, prorate};
