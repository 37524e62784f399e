//! Ledger transaction written at the end of a payroll run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a general ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money leaving the business.
    Expense,
    /// Money entering the business.
    Income,
}

/// The (year, month) a payroll transaction settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

/// A general ledger transaction.
///
/// A payroll run produces exactly one expense record dated at the last
/// instant of the processed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Identifier assigned when the record is built.
    pub id: Uuid,
    /// Expense or income.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category tag, e.g. "Salaries".
    pub category: String,
    /// Total amount.
    pub amount: Decimal,
    /// Currency of `amount`.
    pub currency: String,
    /// Effective date of the transaction.
    pub date: DateTime<Utc>,
    /// Human-readable breakdown.
    pub description: String,
    /// Number of employees included.
    pub employee_count: usize,
    /// Month settled by this transaction, if it is a payroll run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<TransactionPeriod>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
