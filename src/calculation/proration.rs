//! Salary proration by employment start date.
//!
//! This module determines how much of a monthly base salary an employee earned
//! in the processed month, given when they started.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PayrollMonth, RawInstant};

/// The salary earned by an employee who worked at least part of the month.
#[derive(Debug, Clone)]
pub struct ProrationResult {
    /// Base salary attributable to the days employed.
    pub prorated_base: Decimal,
    /// The full monthly base salary.
    pub original_base: Decimal,
    /// Days employed in the month, inclusive of the start day.
    pub days_worked: u32,
    /// Calendar days in the month.
    pub total_days_in_month: u32,
    /// Whether the base was reduced for a mid-month start.
    pub was_prorated: bool,
    /// The start date was present but could not be parsed.
    pub start_date_unparseable: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Outcome of proration.
///
/// An employee who has not started yet is excluded from the run entirely;
/// this is distinct from earning a zero salary.
#[derive(Debug, Clone)]
pub enum ProrationOutcome {
    /// The employee earned some or all of the month's salary.
    Earned(ProrationResult),
    /// The employee starts after the month ends.
    NotYetStarted {
        /// The parsed start date.
        start_date: DateTime<Utc>,
        /// The audit step recording the exclusion.
        audit_step: AuditStep,
    },
}

/// Computes the salary fraction earned in `month`.
///
/// Fails with `CalculationOverflow` only if the scaled base leaves the
/// `Decimal` range.
///
/// - No start date, an unparseable one, or one at or before the month start:
///   the full base is earned.
/// - A start date after the month end: [`ProrationOutcome::NotYetStarted`].
/// - Otherwise the base is scaled by `days_worked / total_days_in_month`,
///   where `days_worked` counts whole days from the start date to the end of
///   the month plus one.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{prorate, ProrationOutcome};
/// use payroll_engine::models::{PayrollMonth, RawInstant};
/// use rust_decimal::Decimal;
///
/// let month = PayrollMonth::new(2026, 4).unwrap();
/// let start = RawInstant::from("2026-04-11");
///
/// let ProrationOutcome::Earned(result) =
///     prorate("emp_001", Decimal::new(300_000, 0), Some(&start), &month, 1).unwrap()
/// else {
///     panic!("employee started within the month");
/// };
/// assert_eq!(result.days_worked, 20);
/// assert_eq!(result.prorated_base, Decimal::new(200_000, 0));
/// ```
pub fn prorate(
    employee_id: &str,
    base_salary: Decimal,
    start_date: Option<&RawInstant>,
    month: &PayrollMonth,
    step_number: u32,
) -> EngineResult<ProrationOutcome> {
    let month_start = month.month_start();
    let month_end = month.month_end();
    let total_days = month.days_in_month();
    let parsed = start_date.map(RawInstant::to_utc);

    let step = |output: serde_json::Value, reasoning: String| AuditStep {
        step_number,
        rule_id: "salary_proration".to_string(),
        rule_name: "Salary Proration".to_string(),
        employee_id: employee_id.to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "start_date": start_date,
            "month_start": month_start.to_rfc3339(),
            "month_end": month_end.to_rfc3339()
        }),
        output,
        reasoning,
    };

    let outcome = match parsed {
        Some(Some(start)) if start > month_end => ProrationOutcome::NotYetStarted {
            start_date: start,
            audit_step: step(
                serde_json::json!({ "excluded": true }),
                format!(
                    "Start date {} is after {}; employee excluded from this run",
                    start.date_naive(),
                    month.label()
                ),
            ),
        },
        Some(Some(start)) if start > month_start => {
            let whole_days = (month_end - start).num_days() + 1;
            let days_worked = u32::try_from(whole_days)
                .unwrap_or(total_days)
                .clamp(1, total_days);
            let prorated_base = base_salary
                .checked_mul(Decimal::from(days_worked))
                .and_then(|scaled| scaled.checked_div(Decimal::from(total_days)))
                .ok_or_else(|| EngineError::CalculationOverflow {
                    operation: format!("salary proration for {}", employee_id),
                })?;

            ProrationOutcome::Earned(ProrationResult {
                prorated_base,
                original_base: base_salary,
                days_worked,
                total_days_in_month: total_days,
                was_prorated: true,
                start_date_unparseable: false,
                audit_step: step(
                    serde_json::json!({
                        "prorated_base": prorated_base.to_string(),
                        "days_worked": days_worked,
                        "total_days_in_month": total_days
                    }),
                    format!(
                        "Started {}; {} x {} / {} = {}",
                        start.date_naive(),
                        base_salary,
                        days_worked,
                        total_days,
                        prorated_base
                    ),
                ),
            })
        }
        _ => {
            let start_date_unparseable = matches!(parsed, Some(None));
            let reasoning = if start_date_unparseable {
                "Start date could not be parsed; treating as employed for the full month"
                    .to_string()
            } else {
                format!("Employed for all of {}; full base salary", month.label())
            };

            ProrationOutcome::Earned(ProrationResult {
                prorated_base: base_salary,
                original_base: base_salary,
                days_worked: total_days,
                total_days_in_month: total_days,
                was_prorated: false,
                start_date_unparseable,
                audit_step: step(
                    serde_json::json!({
                        "prorated_base": base_salary.to_string(),
                        "was_prorated": false
                    }),
                    reasoning,
                ),
            })
        }
    };

    Ok(outcome)
}
