//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod instant;
mod ledger;
mod payroll_month;
mod payroll_result;
mod transaction;

pub use employee::Employee;
pub use instant::RawInstant;
pub use ledger::{Bonus, BonusKind, Infraction, PERCENTAGE_KIND};
pub use payroll_month::PayrollMonth;
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, CalculatedTotals, FlaggedEntry, PayrollEntry,
    PayrollRunResult,
};
pub use transaction::{TransactionKind, TransactionPeriod, TransactionRecord};
