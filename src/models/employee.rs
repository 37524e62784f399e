//! Employee model as supplied by the employee directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RawInstant;

/// An employee record, read-only to the payroll engine.
///
/// A `base_salary` of zero means the employee is not on payroll. An absent
/// `start_date` means the employee started before any processed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name used in the run breakdown.
    pub name: String,
    /// Monthly base salary.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Employment start date, in whatever shape the directory stored it.
    #[serde(default)]
    pub start_date: Option<RawInstant>,
    /// Whether the employee is currently active.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Returns true if the employee has a salary to process.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ada Obi".to_string(),
    ///     base_salary: Decimal::new(300_000, 0),
    ///     start_date: None,
    ///     active: true,
    /// };
    /// assert!(employee.is_on_payroll());
    /// ```
    pub fn is_on_payroll(&self) -> bool {
        self.base_salary > Decimal::ZERO
    }
}
