//! Monthly Payroll Engine
//!
//! This crate computes monthly salaries for active employees, applying
//! start-date proration, infraction deductions and bonuses, and records a
//! single summary expense transaction per calendar month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod store;
