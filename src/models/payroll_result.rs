//! Payroll run result models.
//!
//! This module contains the [`PayrollRunResult`] type and its associated
//! structures that capture the outputs of a payroll run: per-employee entries,
//! flagged entries, cross-check totals and the audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollMonth;

/// One employee's computed salary for the month.
///
/// Not persisted individually; the summary transaction carries a rendered
/// breakdown instead.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollEntry;
/// use rust_decimal::Decimal;
///
/// let entry = PayrollEntry {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Ada Obi".to_string(),
///     prorated_base_salary: Decimal::new(300_000, 0),
///     original_base_salary: None,
///     days_worked: None,
///     total_days_in_month: None,
///     proration_note: None,
///     total_deductions: Decimal::new(30_000, 0),
///     total_bonuses: Decimal::new(20_000, 0),
///     net_salary: Decimal::new(290_000, 0),
/// };
/// assert!(!entry.was_prorated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    /// The employee this entry is for.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Base salary attributable to the days employed this month.
    pub prorated_base_salary: Decimal,
    /// Full monthly base, present only if proration applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_base_salary: Option<Decimal>,
    /// Days employed this month, present only if proration applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_worked: Option<u32>,
    /// Calendar days in the month, present only if proration applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days_in_month: Option<u32>,
    /// Annotation such as "(Prorated: 20 of 30 days)".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proration_note: Option<String>,
    /// Sum of all infraction deductions.
    pub total_deductions: Decimal,
    /// Sum of all bonus values.
    pub total_bonuses: Decimal,
    /// prorated base - deductions + bonuses.
    pub net_salary: Decimal,
}

impl PayrollEntry {
    /// Returns true if the base salary was prorated.
    pub fn was_prorated(&self) -> bool {
        self.original_base_salary.is_some()
    }
}

/// An entry left out of the persisted breakdown because its net salary is not
/// positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedEntry {
    /// The computed entry.
    pub entry: PayrollEntry,
    /// Why the entry was flagged.
    pub reason: String,
}

/// Totals recomputed from the breakdown for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedTotals {
    /// Sum of prorated base salaries.
    pub total_base: Decimal,
    /// Sum of deductions.
    pub total_deductions: Decimal,
    /// Sum of bonuses.
    pub total_bonuses: Decimal,
    /// Sum of net salaries.
    pub total_net: Decimal,
}

impl CalculatedTotals {
    /// Recomputes totals over a set of entries, or `None` if a column
    /// overflows.
    pub fn from_entries(entries: &[PayrollEntry]) -> Option<Self> {
        entries.iter().try_fold(Self::default(), |acc, entry| {
            Some(Self {
                total_base: acc.total_base.checked_add(entry.prorated_base_salary)?,
                total_deductions: acc.total_deductions.checked_add(entry.total_deductions)?,
                total_bonuses: acc.total_bonuses.checked_add(entry.total_bonuses)?,
                total_net: acc.total_net.checked_add(entry.net_salary)?,
            })
        })
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the step concerns.
    pub employee_id: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during a run.
///
/// Warnings flag data an operator should correct; they never stop the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
    /// The employee the warning concerns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

/// The complete audit trace for a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// The outcome of a successful payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRunResult {
    /// Identifier of the persisted summary transaction.
    pub transaction_id: String,
    /// The processed month.
    pub period: PayrollMonth,
    /// Amount recorded on the summary transaction.
    pub total_amount: Decimal,
    /// Number of employees in the breakdown.
    pub employee_count: usize,
    /// Entries with a positive net salary.
    pub breakdown: Vec<PayrollEntry>,
    /// Entries with a zero or negative net salary.
    pub flagged: Vec<FlaggedEntry>,
    /// Totals recomputed from the breakdown.
    pub calculated_totals: CalculatedTotals,
    /// Step-by-step record of the computation.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_entry(id: &str, base: &str, deductions: &str, bonuses: &str) -> PayrollEntry {
        let base = dec(base);
        let deductions = dec(deductions);
        let bonuses = dec(bonuses);
        PayrollEntry {
            employee_id: id.to_string(),
            employee_name: format!("Employee {}", id),
            prorated_base_salary: base,
            original_base_salary: None,
            days_worked: None,
            total_days_in_month: None,
            proration_note: None,
            total_deductions: deductions,
            total_bonuses: bonuses,
            net_salary: base - deductions + bonuses,
        }
    }

    #[test]
    fn test_calculated_totals_sum_every_column() {
        let entries = vec![
            create_entry("a", "300000", "30000", "20000"),
            create_entry("b", "200000", "0", "10000"),
        ];

        let totals = CalculatedTotals::from_entries(&entries).unwrap();
        assert_eq!(totals.total_base, dec("500000"));
        assert_eq!(totals.total_deductions, dec("30000"));
        assert_eq!(totals.total_bonuses, dec("30000"));
        assert_eq!(totals.total_net, dec("500000"));
    }

    #[test]
    fn test_calculated_totals_empty() {
        assert_eq!(
            CalculatedTotals::from_entries(&[]),
            Some(CalculatedTotals::default())
        );
    }

    #[test]
    fn test_calculated_totals_overflow_is_none() {
        let mut entry = create_entry("a", "0", "0", "0");
        entry.prorated_base_salary = Decimal::MAX;
        assert!(CalculatedTotals::from_entries(&[entry.clone(), entry]).is_none());
    }

    #[test]
    fn test_entry_omits_proration_fields_when_not_prorated() {
        let entry = create_entry("a", "300000", "0", "0");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("originalBaseSalary").is_none());
        assert!(json.get("daysWorked").is_none());
        assert_eq!(json["netSalary"], "300000");
    }

    #[test]
    fn test_entry_includes_proration_fields_when_prorated() {
        let mut entry = create_entry("a", "200000", "0", "0");
        entry.original_base_salary = Some(dec("300000"));
        entry.days_worked = Some(20);
        entry.total_days_in_month = Some(30);

        assert!(entry.was_prorated());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["daysWorked"], 20);
        assert_eq!(json["totalDaysInMonth"], 30);
    }
}
