//! In-memory collaborator implementations.
//!
//! Used by the server binary when seeded from configuration, and by tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::models::{
    Bonus, Employee, Infraction, PayrollMonth, RawInstant, TransactionKind, TransactionRecord,
};

use super::{
    AppendOutcome, BonusLedger, EmployeeDirectory, InfractionLedger, StoreError, StoreResult,
    TransactionStore,
};

fn issued_between(date_issued: &RawInstant, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    date_issued
        .to_utc()
        .is_some_and(|issued| issued >= start && issued <= end)
}

/// Employee directory backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeDirectory {
    /// Creates a directory holding `employees`.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn list_active(&self) -> StoreResult<Vec<Employee>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.active)
            .cloned()
            .collect())
    }
}

/// Infraction ledger backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryInfractionLedger {
    infractions: Vec<Infraction>,
}

impl InMemoryInfractionLedger {
    /// Creates a ledger holding `infractions`.
    pub fn new(infractions: Vec<Infraction>) -> Self {
        Self { infractions }
    }
}

#[async_trait]
impl InfractionLedger for InMemoryInfractionLedger {
    async fn list_issued_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Infraction>> {
        Ok(self
            .infractions
            .iter()
            .filter(|i| issued_between(&i.date_issued, start, end))
            .cloned()
            .collect())
    }
}

/// Bonus ledger backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryBonusLedger {
    bonuses: Vec<Bonus>,
}

impl InMemoryBonusLedger {
    /// Creates a ledger holding `bonuses`.
    pub fn new(bonuses: Vec<Bonus>) -> Self {
        Self { bonuses }
    }
}

#[async_trait]
impl BonusLedger for InMemoryBonusLedger {
    async fn list_issued_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Bonus>> {
        Ok(self
            .bonuses
            .iter()
            .filter(|b| issued_between(&b.date_issued, start, end))
            .cloned()
            .collect())
    }
}

/// General ledger held in memory.
///
/// All access goes through one mutex, which makes `append_if_absent` a single
/// atomic check-and-write.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    records: Mutex<Vec<TransactionRecord>>,
}

impl InMemoryTransactionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every persisted record.
    pub async fn records(&self) -> Vec<TransactionRecord> {
        self.records.lock().await.clone()
    }
}

fn has_expense(
    records: &[TransactionRecord],
    category: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    records.iter().any(|r| {
        r.kind == TransactionKind::Expense
            && r.category == category
            && r.date >= start
            && r.date <= end
    })
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn exists(
        &self,
        category: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<bool> {
        Ok(has_expense(&self.records.lock().await, category, start, end))
    }

    async fn append(&self, record: TransactionRecord) -> StoreResult<String> {
        let id = record.id.to_string();
        self.records.lock().await.push(record);
        Ok(id)
    }

    async fn append_if_absent(&self, record: TransactionRecord) -> StoreResult<AppendOutcome> {
        let month = PayrollMonth::current(record.date.date_naive()).map_err(|e| {
            StoreError::Rejected {
                store: "transaction store".to_string(),
                message: e.to_string(),
            }
        })?;

        let mut records = self.records.lock().await;
        if has_expense(
            &records,
            &record.category,
            month.month_start(),
            month.month_end(),
        ) {
            return Ok(AppendOutcome::AlreadyExists);
        }

        let id = record.id.to_string();
        records.push(record);
        Ok(AppendOutcome::Appended(id))
    }
}
