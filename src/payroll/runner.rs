//! Payroll run orchestration.
//!
//! [`PayrollRunner`] validates a request, guards against processing a month
//! twice, loads the month's records, computes every employee's entry and
//! commits one summary expense.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{ProrationOutcome, aggregate_adjustments, prorate, resolve_net_salary};
use crate::config::PayrollSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Bonus, CalculatedTotals, Employee, FlaggedEntry,
    Infraction, PayrollEntry, PayrollMonth, PayrollRunResult, TransactionKind, TransactionPeriod,
    TransactionRecord,
};
use crate::store::{
    AppendOutcome, BonusLedger, EmployeeDirectory, InfractionLedger, StoreError,
    TransactionStore,
};

use super::breakdown::render_breakdown;
use super::validator::{resolve_target_month, validate_run_request};

/// Warning code for a start date that could not be parsed.
pub const WARNING_UNPARSEABLE_START_DATE: &str = "UNPARSEABLE_START_DATE";

/// Warning code for an entry left out because its net salary is not positive.
pub const WARNING_NON_POSITIVE_NET_SALARY: &str = "NON_POSITIVE_NET_SALARY";

/// Runs monthly payroll against injected collaborators.
pub struct PayrollRunner {
    employees: Arc<dyn EmployeeDirectory>,
    infractions: Arc<dyn InfractionLedger>,
    bonuses: Arc<dyn BonusLedger>,
    transactions: Arc<dyn TransactionStore>,
    settings: PayrollSettings,
}

/// Everything computed for one month before it is committed.
struct ComputedRun {
    breakdown: Vec<PayrollEntry>,
    flagged: Vec<FlaggedEntry>,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
    total: Decimal,
}

impl PayrollRunner {
    /// Creates a runner over the given collaborators.
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        infractions: Arc<dyn InfractionLedger>,
        bonuses: Arc<dyn BonusLedger>,
        transactions: Arc<dyn TransactionStore>,
        settings: PayrollSettings,
    ) -> Self {
        Self {
            employees,
            infractions,
            bonuses,
            transactions,
            settings,
        }
    }

    /// Returns the run settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Runs payroll for the given month, or the current one.
    pub async fn run_payroll(
        &self,
        year: Option<i32>,
        month: Option<i32>,
    ) -> EngineResult<PayrollRunResult> {
        self.run_payroll_at(year, month, Utc::now()).await
    }

    /// Runs payroll as if the current time were `now`.
    ///
    /// `now` decides the default month, the upper bound on the year and the
    /// transaction's creation time. Every failure is returned before the
    /// single write.
    pub async fn run_payroll_at(
        &self,
        year: Option<i32>,
        month: Option<i32>,
        now: DateTime<Utc>,
    ) -> EngineResult<PayrollRunResult> {
        let start_time = Instant::now();
        let today = now.date_naive();

        validate_run_request(year, month, self.settings.minimum_year, today)?;
        let period = resolve_target_month(year, month, today)?;
        let (month_start, month_end) = (period.month_start(), period.month_end());

        info!(period = %period.label(), category = %self.settings.category, "Starting payroll run");

        let already_processed = self
            .transactions
            .exists(&self.settings.category, month_start, month_end)
            .await
            .map_err(|e| read_failure("transaction store", e))?;
        if already_processed {
            warn!(period = %period.label(), "Payroll already processed");
            return Err(EngineError::AlreadyProcessed {
                period: period.label(),
            });
        }

        let (employees, infractions, bonuses) = tokio::try_join!(
            async {
                self.employees
                    .list_active()
                    .await
                    .map_err(|e| read_failure("employee directory", e))
            },
            async {
                self.infractions
                    .list_issued_between(month_start, month_end)
                    .await
                    .map_err(|e| read_failure("infraction ledger", e))
            },
            async {
                self.bonuses
                    .list_issued_between(month_start, month_end)
                    .await
                    .map_err(|e| read_failure("bonus ledger", e))
            },
        )?;

        if employees.is_empty() {
            warn!(period = %period.label(), "No active employees");
            return Err(EngineError::NoEligibleEmployees);
        }

        let computed = compute_entries(&period, &employees, &infractions, &bonuses)?;

        if computed.total.is_zero() {
            warn!(
                period = %period.label(),
                active_employees = employees.len(),
                "Total salaries amount is zero"
            );
            return Err(EngineError::ZeroTotal);
        }

        let calculated_totals = CalculatedTotals::from_entries(&computed.breakdown).ok_or_else(
            || EngineError::CalculationOverflow {
                operation: "calculated totals".to_string(),
            },
        )?;

        let record = TransactionRecord {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense,
            category: self.settings.category.clone(),
            amount: computed.total,
            currency: self.settings.currency.clone(),
            date: month_end,
            description: render_breakdown(&period, &computed.breakdown, &self.settings.currency),
            employee_count: computed.breakdown.len(),
            period: Some(TransactionPeriod {
                year: period.year(),
                month: period.month(),
            }),
            created_at: now,
        };

        let transaction_id = match self.transactions.append_if_absent(record).await {
            Ok(AppendOutcome::Appended(id)) => id,
            Ok(AppendOutcome::AlreadyExists) => {
                warn!(
                    period = %period.label(),
                    "Payroll committed by a concurrent run"
                );
                return Err(EngineError::AlreadyProcessed {
                    period: period.label(),
                });
            }
            Err(e) => {
                error!(period = %period.label(), error = %e, "Failed to record payroll transaction");
                return Err(EngineError::WriteFailure {
                    message: e.to_string(),
                });
            }
        };

        let duration = start_time.elapsed();
        info!(
            period = %period.label(),
            transaction_id = %transaction_id,
            employee_count = computed.breakdown.len(),
            flagged_count = computed.flagged.len(),
            total_amount = %computed.total,
            duration_us = duration.as_micros(),
            "Payroll run completed"
        );

        Ok(PayrollRunResult {
            transaction_id,
            period,
            total_amount: computed.total,
            employee_count: computed.breakdown.len(),
            breakdown: computed.breakdown,
            flagged: computed.flagged,
            calculated_totals,
            audit_trace: AuditTrace {
                steps: computed.steps,
                warnings: computed.warnings,
                duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            },
        })
    }
}

fn read_failure(source_name: &str, e: StoreError) -> EngineError {
    error!(source = source_name, error = %e, "Upstream read failed");
    EngineError::UpstreamReadFailure {
        source_name: source_name.to_string(),
        message: e.to_string(),
    }
}

/// Single pass over the employees: prorate, adjust, resolve, then sort each
/// entry into the breakdown or the flagged list.
fn compute_entries(
    period: &PayrollMonth,
    employees: &[Employee],
    infractions: &[Infraction],
    bonuses: &[Bonus],
) -> EngineResult<ComputedRun> {
    let mut run = ComputedRun {
        breakdown: Vec::new(),
        flagged: Vec::new(),
        steps: Vec::new(),
        warnings: Vec::new(),
        total: Decimal::ZERO,
    };
    let mut step_number: u32 = 1;

    for employee in employees.iter().filter(|e| e.is_on_payroll()) {
        let proration = match prorate(
            &employee.id,
            employee.base_salary,
            employee.start_date.as_ref(),
            period,
            step_number,
        )? {
            ProrationOutcome::Earned(result) => result,
            ProrationOutcome::NotYetStarted {
                start_date,
                audit_step,
            } => {
                info!(
                    employee_id = %employee.id,
                    start_date = %start_date,
                    "Employee starts after the month; excluded"
                );
                run.steps.push(audit_step);
                step_number += 1;
                continue;
            }
        };
        run.steps.push(proration.audit_step.clone());
        step_number += 1;

        if proration.start_date_unparseable {
            warn!(
                employee_id = %employee.id,
                start_date = ?employee.start_date,
                "Unparseable start date; paying full month"
            );
            run.warnings.push(AuditWarning {
                code: WARNING_UNPARSEABLE_START_DATE.to_string(),
                message: format!(
                    "Start date for {} could not be parsed; full month paid",
                    employee.name
                ),
                severity: "medium".to_string(),
                employee_id: Some(employee.id.clone()),
            });
        }

        let adjustments = aggregate_adjustments(
            &employee.id,
            proration.prorated_base,
            infractions,
            bonuses,
            step_number,
        )?;
        run.steps.push(adjustments.audit_step.clone());
        step_number += 1;

        let resolved = resolve_net_salary(employee, &proration, &adjustments, step_number)?;
        run.steps.push(resolved.audit_step);
        step_number += 1;

        let entry = resolved.entry;
        if entry.net_salary > Decimal::ZERO {
            run.total = run.total.checked_add(entry.net_salary).ok_or_else(|| {
                EngineError::CalculationOverflow {
                    operation: "payroll total".to_string(),
                }
            })?;
            run.breakdown.push(entry);
        } else {
            warn!(
                employee_id = %employee.id,
                net_salary = %entry.net_salary,
                "Non-positive net salary; excluded from payroll expense"
            );
            let reason = format!(
                "Net salary {} is not positive; excluded from the payroll expense",
                entry.net_salary
            );
            run.warnings.push(AuditWarning {
                code: WARNING_NON_POSITIVE_NET_SALARY.to_string(),
                message: format!("{}: {}", employee.name, reason),
                severity: "high".to_string(),
                employee_id: Some(employee.id.clone()),
            });
            run.flagged.push(FlaggedEntry { entry, reason });
        }
    }

    Ok(run)
}
