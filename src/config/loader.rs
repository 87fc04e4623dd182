//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{LevelTable, Roster};

use super::types::{EngineSettings, LevelsFile, PayrollConfig, RosterFile};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml   # trainee wage, margin of error, decimal precision
/// ├── levels.yaml     # level code -> technician percentage
/// └── roster.yaml     # employees in column order
/// ```
///
/// # Example
///
/// ```no_run
/// use job_split_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Roster size: {}", loader.config().roster().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing or contains invalid YAML, or
    /// if the loaded values fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("settings.yaml"))?;
        let levels_file = Self::load_yaml::<LevelsFile>(&path.join("levels.yaml"))?;
        let roster_file = Self::load_yaml::<RosterFile>(&path.join("roster.yaml"))?;

        let levels = LevelTable::new(levels_file.levels)?;
        let roster = Roster::new(roster_file.employees)?;
        let config = PayrollConfig::new(settings, levels, roster)?;

        debug!(
            path = %path.display(),
            levels = config.levels().levels().len(),
            employees = config.roster().len(),
            "Loaded payroll configuration"
        );

        Ok(Self { config })
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

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
