//! Net salary resolution.
//!
//! Combines proration and adjustments into one employee's payroll entry.
//! Pure composition with no I/O.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee, PayrollEntry};

use super::{AdjustmentResult, ProrationResult};

/// The resolved entry for an employee, with its audit step.
#[derive(Debug, Clone)]
pub struct NetSalaryResult {
    /// The employee's payroll entry.
    pub entry: PayrollEntry,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Formats the proration annotation shown next to a prorated entry.
///
/// ```
/// use payroll_engine::calculation::proration_note;
///
/// assert_eq!(proration_note(20, 30), "(Prorated: 20 of 30 days)");
/// ```
pub fn proration_note(days_worked: u32, total_days_in_month: u32) -> String {
    format!(
        "(Prorated: {} of {} days)",
        days_worked, total_days_in_month
    )
}

/// Resolves `net = prorated base - deductions + bonuses` into an entry.
///
/// Proration fields and the annotation are only populated when proration
/// actually applied. Fails with `CalculationOverflow` if the net leaves the
/// `Decimal` range.
pub fn resolve_net_salary(
    employee: &Employee,
    proration: &ProrationResult,
    adjustments: &AdjustmentResult,
    step_number: u32,
) -> EngineResult<NetSalaryResult> {
    let net_salary = proration
        .prorated_base
        .checked_sub(adjustments.total_deductions)
        .and_then(|net| net.checked_add(adjustments.total_bonuses))
        .ok_or_else(|| EngineError::CalculationOverflow {
            operation: format!("net salary for {}", employee.id),
        })?;

    let (original_base_salary, days_worked, total_days_in_month, note) = if proration.was_prorated
    {
        (
            Some(proration.original_base),
            Some(proration.days_worked),
            Some(proration.total_days_in_month),
            Some(proration_note(
                proration.days_worked,
                proration.total_days_in_month,
            )),
        )
    } else {
        (None, None, None, None)
    };

    let entry = PayrollEntry {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        prorated_base_salary: proration.prorated_base,
        original_base_salary,
        days_worked,
        total_days_in_month,
        proration_note: note,
        total_deductions: adjustments.total_deductions,
        total_bonuses: adjustments.total_bonuses,
        net_salary,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        employee_id: employee.id.clone(),
        input: serde_json::json!({
            "prorated_base": proration.prorated_base.to_string(),
            "total_deductions": adjustments.total_deductions.to_string(),
            "total_bonuses": adjustments.total_bonuses.to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.to_string()
        }),
        reasoning: format!(
            "{} - {} + {} = {}",
            proration.prorated_base,
            adjustments.total_deductions,
            adjustments.total_bonuses,
            net_salary
        ),
    };

    Ok(NetSalaryResult { entry, audit_step })
}
