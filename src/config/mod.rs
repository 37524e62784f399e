//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load run settings, server settings
//! and optional seed records from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Paying salaries in {}", config.settings().currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfigFile, PayrollSettings, SeedData, ServerSettings};
