//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Bonus, Employee, Infraction};
use crate::payroll::DEFAULT_MINIMUM_YEAR;

/// Settings that shape every payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// Category tag of the summary expense; also the idempotency key.
    #[serde(default = "default_category")]
    pub category: String,
    /// Currency label used in the breakdown and on the transaction.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Earliest year a run may target.
    #[serde(default = "default_minimum_year")]
    pub minimum_year: i32,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            category: default_category(),
            currency: default_currency(),
            minimum_year: default_minimum_year(),
        }
    }
}

fn default_category() -> String {
    "Salaries".to_string()
}

fn default_currency() -> String {
    "NGN".to_string()
}

fn default_minimum_year() -> i32 {
    DEFAULT_MINIMUM_YEAR
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address the server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Structure of `payroll.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollConfigFile {
    /// Run settings.
    #[serde(default)]
    pub payroll: PayrollSettings,
    /// Server settings.
    #[serde(default)]
    pub server: ServerSettings,
}

/// Structure of `seed.yaml`: initial contents of the in-memory collaborators.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Employee directory records.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Infraction ledger records.
    #[serde(default)]
    pub infractions: Vec<Infraction>,
    /// Bonus ledger records.
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
}
