//! Infraction deductions and bonus awards.
//!
//! Every adjustment is computed against the same prorated base. Deductions add
//! up independently rather than compounding on a running remainder, and no
//! floor or cap is applied.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Bonus, Infraction};

/// Totals of an employee's adjustments for the month.
#[derive(Debug, Clone)]
pub struct AdjustmentResult {
    /// Sum of all infraction deductions.
    pub total_deductions: Decimal,
    /// Sum of all bonus values.
    pub total_bonuses: Decimal,
    /// Number of infractions matched to the employee.
    pub infractions_applied: usize,
    /// Number of bonuses matched to the employee.
    pub bonuses_applied: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The amount one infraction deducts from `prorated_base`, or `None` on
/// overflow.
pub fn deduction_value(infraction: &Infraction, prorated_base: Decimal) -> Option<Decimal> {
    percentage_of(prorated_base, infraction.deduction_percentage)
}

fn percentage_of(base: Decimal, percentage: Decimal) -> Option<Decimal> {
    percentage
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|fraction| base.checked_mul(fraction))
}

/// The value of one bonus.
///
/// Percentage bonuses are a share of `prorated_base`; any other kind is a flat
/// amount added as-is, whatever its currency. Returns `None` on overflow.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::bonus_value;
/// use payroll_engine::models::{Bonus, BonusKind, RawInstant};
/// use rust_decimal::Decimal;
///
/// let base = Decimal::new(100_000, 0);
/// let mut bonus = Bonus {
///     id: "bonus_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     amount: Decimal::new(10, 0),
///     currency_or_kind: BonusKind::Percentage,
///     date_issued: RawInstant::from("2026-04-15"),
/// };
/// assert_eq!(bonus_value(&bonus, base), Some(Decimal::new(10_000, 0)));
///
/// bonus.amount = Decimal::new(5_000, 0);
/// bonus.currency_or_kind = BonusKind::Currency("NGN".to_string());
/// assert_eq!(bonus_value(&bonus, base), Some(Decimal::new(5_000, 0)));
/// ```
pub fn bonus_value(bonus: &Bonus, prorated_base: Decimal) -> Option<Decimal> {
    if bonus.is_percentage() {
        percentage_of(prorated_base, bonus.amount)
    } else {
        Some(bonus.amount)
    }
}

fn checked_total(values: impl IntoIterator<Item = Option<Decimal>>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value?))
}

/// Aggregates an employee's deductions and bonuses for the month.
///
/// Both ledgers must already be scoped to the month window; this function
/// only filters by employee. Fails with `CalculationOverflow` if a total
/// leaves the `Decimal` range.
pub fn aggregate_adjustments(
    employee_id: &str,
    prorated_base: Decimal,
    month_infractions: &[Infraction],
    month_bonuses: &[Bonus],
    step_number: u32,
) -> EngineResult<AdjustmentResult> {
    let overflow = |what: &str| EngineError::CalculationOverflow {
        operation: format!("{} for {}", what, employee_id),
    };

    let infractions: Vec<&Infraction> = month_infractions
        .iter()
        .filter(|i| i.employee_id == employee_id)
        .collect();
    let bonuses: Vec<&Bonus> = month_bonuses
        .iter()
        .filter(|b| b.employee_id == employee_id)
        .collect();

    let total_deductions =
        checked_total(infractions.iter().map(|i| deduction_value(i, prorated_base)))
            .ok_or_else(|| overflow("deduction total"))?;
    let total_bonuses = checked_total(bonuses.iter().map(|b| bonus_value(b, prorated_base)))
        .ok_or_else(|| overflow("bonus total"))?;

    let deduction_percentages: Vec<String> = infractions
        .iter()
        .map(|i| i.deduction_percentage.to_string())
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "adjustment_aggregation".to_string(),
        rule_name: "Deductions and Bonuses".to_string(),
        employee_id: employee_id.to_string(),
        input: serde_json::json!({
            "prorated_base": prorated_base.to_string(),
            "infraction_ids": infractions.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            "bonus_ids": bonuses.iter().map(|b| b.id.as_str()).collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "total_bonuses": total_bonuses.to_string()
        }),
        reasoning: format!(
            "{} infraction(s) at [{}]% of {} = {}; {} bonus(es) = {}",
            infractions.len(),
            deduction_percentages.join(", "),
            prorated_base,
            total_deductions,
            bonuses.len(),
            total_bonuses
        ),
    };

    Ok(AdjustmentResult {
        total_deductions,
        total_bonuses,
        infractions_applied: infractions.len(),
        bonuses_applied: bonuses.len(),
        audit_step,
    })
}
