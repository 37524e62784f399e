//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfigFile, PayrollSettings, SeedData, ServerSettings};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── payroll.yaml   # Run and server settings (required)
/// └── seed.yaml      # Directory and ledger records (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Payroll category: {}", loader.settings().category);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: PayrollSettings,
    server: ServerSettings,
    seed: SeedData,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `payroll.yaml` is missing, or if either file
    /// contains invalid YAML. A missing `seed.yaml` yields empty seed data.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let config_file = Self::load_yaml::<PayrollConfigFile>(&path.join("payroll.yaml"))?;

        let seed_path = path.join("seed.yaml");
        let seed = if seed_path.exists() {
            Self::load_yaml::<SeedData>(&seed_path)?
        } else {
            SeedData::default()
        };

        Ok(Self {
            settings: config_file.payroll,
            server: config_file.server,
            seed,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the run settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.server
    }

    /// Returns the seed records.
    pub fn seed(&self) -> &SeedData {
        &self.seed
    }

    /// Consumes the loader, returning the seed records.
    pub fn into_seed(self) -> SeedData {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BonusKind;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn temp_config_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_repository_config() {
        let loader = ConfigLoader::load("./config/payroll").unwrap();
        assert_eq!(loader.settings().category, "Salaries");
        assert_eq!(loader.settings().currency, "NGN");
        assert_eq!(loader.settings().minimum_year, 2000);
        assert!(!loader.seed().employees.is_empty());
    }

    #[test]
    fn test_missing_directory_is_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/payroll");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_defaults_apply_to_sparse_file() {
        let dir = temp_config_dir("sparse");
        fs::write(dir.join("payroll.yaml"), "payroll:\n  currency: USD\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.settings().currency, "USD");
        assert_eq!(loader.settings().category, "Salaries");
        assert_eq!(loader.server().bind_address, "127.0.0.1:3000");
        assert!(loader.seed().employees.is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = temp_config_dir("invalid");
        fs::write(dir.join("payroll.yaml"), "payroll: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_seed_file_is_parsed() {
        let dir = temp_config_dir("seed");
        fs::write(dir.join("payroll.yaml"), "payroll: {}\n").unwrap();
        fs::write(
            dir.join("seed.yaml"),
            r#"
employees:
  - id: emp_001
    name: Ada Obi
    baseSalary: 300000
    startDate: "2026-04-11"
bonuses:
  - id: bonus_001
    employeeId: emp_001
    amount: 5
    currencyOrKind: PERCENTAGE
    dateIssued: "2026-04-20"
"#,
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        let seed = loader.into_seed();
        assert_eq!(seed.employees.len(), 1);
        assert_eq!(seed.employees[0].base_salary, Decimal::new(300_000, 0));
        assert!(seed.employees[0].active);
        assert_eq!(seed.bonuses[0].currency_or_kind, BonusKind::Percentage);
        assert!(seed.infractions.is_empty());

        fs::remove_dir_all(dir).unwrap();
    }
}
