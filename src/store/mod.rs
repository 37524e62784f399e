//! Collaborator interfaces consumed by the payroll runner.
//!
//! The employee directory, both ledgers and the transaction store are owned by
//! other systems. The runner receives them as trait objects at construction
//! time; [`memory`] provides in-process implementations.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Bonus, Employee, Infraction, TransactionRecord};

pub use memory::{
    InMemoryBonusLedger, InMemoryEmployeeDirectory, InMemoryInfractionLedger,
    InMemoryTransactionStore,
};

/// Failure reported by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The collaborator could not be reached.
    #[error("{store} is unavailable: {message}")]
    Unavailable {
        /// Name of the collaborator.
        store: String,
        /// The underlying failure.
        message: String,
    },

    /// The collaborator refused the operation.
    #[error("{store} rejected the request: {message}")]
    Rejected {
        /// Name of the collaborator.
        store: String,
        /// The underlying failure.
        message: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result of a conditional append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The record was written under the returned id.
    Appended(String),
    /// A record for the same category and month already exists; nothing was
    /// written.
    AlreadyExists,
}

/// Source of employee records.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// All employees currently flagged active.
    async fn list_active(&self) -> StoreResult<Vec<Employee>>;
}

/// Source of infraction records.
#[async_trait]
pub trait InfractionLedger: Send + Sync {
    /// Infractions issued within `[start, end]`.
    async fn list_issued_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Infraction>>;
}

/// Source of bonus records.
#[async_trait]
pub trait BonusLedger: Send + Sync {
    /// Bonuses issued within `[start, end]`.
    async fn list_issued_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Bonus>>;
}

/// The general ledger that receives payroll runs.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Whether an expense with `category` is dated within `[start, end]`.
    async fn exists(
        &self,
        category: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<bool>;

    /// Unconditionally appends a record and returns its id.
    async fn append(&self, record: TransactionRecord) -> StoreResult<String>;

    /// Appends `record` only if no expense of the same category exists in the
    /// month containing `record.date`.
    ///
    /// Implementations must perform the check and the write atomically.
    async fn append_if_absent(&self, record: TransactionRecord) -> StoreResult<AppendOutcome>;
}
