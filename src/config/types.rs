//! Configuration types for the job-splitting engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LevelDefinition, LevelTable, Roster};

/// Largest supported number of fractional digits for money values.
pub const MAX_DECIMAL_PRECISION: u32 = 10;

/// Numeric settings applied to every allocation in a run.
///
/// # Example
///
/// ```
/// use job_split_engine::config::EngineSettings;
/// use rust_decimal::Decimal;
///
/// let settings = EngineSettings {
///     trainee_hourly_wage: Decimal::new(20, 0),
///     margin_of_error: Decimal::new(25, 2),
///     decimal_precision: 2,
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Flat hourly rate paid to trainees.
    pub trainee_hourly_wage: Decimal,
    /// Logged-time tolerance, in the same unit as the time log (hours).
    pub margin_of_error: Decimal,
    /// Number of fractional digits money values are rounded to.
    pub decimal_precision: u32,
}

impl EngineSettings {
    /// Checks that every setting is non-negative and the precision is supported.
    pub fn validate(&self) -> EngineResult<()> {
        if self.trainee_hourly_wage < Decimal::ZERO {
            return Err(EngineError::InvalidSetting {
                field: "trainee_hourly_wage".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.margin_of_error < Decimal::ZERO {
            return Err(EngineError::InvalidSetting {
                field: "margin_of_error".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.decimal_precision > MAX_DECIMAL_PRECISION {
            return Err(EngineError::InvalidSetting {
                field: "decimal_precision".to_string(),
                message: format!("must be at most {}", MAX_DECIMAL_PRECISION),
            });
        }
        Ok(())
    }
}

/// `levels.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelsFile {
    /// Level rows.
    pub levels: Vec<LevelDefinition>,
}

/// `roster.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Employees in column order.
    pub employees: Vec<Employee>,
}

/// Everything an allocation needs besides the job itself.
///
/// Built once per run, then shared read-only by every allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPayrollConfig")]
pub struct PayrollConfig {
    settings: EngineSettings,
    levels: LevelTable,
    roster: Roster,
}

#[derive(Deserialize)]
struct RawPayrollConfig {
    settings: EngineSettings,
    levels: LevelTable,
    roster: Roster,
}

impl TryFrom<RawPayrollConfig> for PayrollConfig {
    type Error = EngineError;

    fn try_from(raw: RawPayrollConfig) -> EngineResult<Self> {
        Self::new(raw.settings, raw.levels, raw.roster)
    }
}

impl PayrollConfig {
    /// Creates a validated configuration.
    ///
    /// Every technician on the roster must have a row in the level table.
    pub fn new(settings: EngineSettings, levels: LevelTable, roster: Roster) -> EngineResult<Self> {
        settings.validate()?;

        if let Some(employee) = roster
            .employees()
            .iter()
            .find(|e| !e.is_trainee() && !levels.contains(&e.level))
        {
            return Err(EngineError::LevelNotFound {
                code: employee.level.to_string(),
            });
        }

        Ok(Self {
            settings,
            levels,
            roster,
        })
    }

    /// Returns the numeric settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the level table.
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LevelCode;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings() -> EngineSettings {
        EngineSettings {
            trainee_hourly_wage: dec("20"),
            margin_of_error: dec("0.25"),
            decimal_precision: 2,
        }
    }

    fn levels() -> LevelTable {
        LevelTable::new(vec![LevelDefinition {
            code: LevelCode::new("L4"),
            name: "Level 4".to_string(),
            percentage: dec("0.30"),
        }])
        .unwrap()
    }

    #[test]
    fn test_negative_wage_rejected() {
        let mut s = settings();
        s.trainee_hourly_wage = dec("-1");
        match s.validate() {
            Err(EngineError::InvalidSetting { field, .. }) => {
                assert_eq!(field, "trainee_hourly_wage")
            }
            other => panic!("Expected InvalidSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_margin_rejected() {
        let mut s = settings();
        s.margin_of_error = dec("-0.1");
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_precision_limit() {
        let mut s = settings();
        s.decimal_precision = 11;
        assert!(s.validate().is_err());
        s.decimal_precision = 0;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_config_requires_technician_levels() {
        let roster = Roster::new(vec![
            Employee::new("A", "L4"),
            Employee::new("B", "L3"),
        ])
        .unwrap();

        match PayrollConfig::new(settings(), levels(), roster) {
            Err(EngineError::LevelNotFound { code }) => assert_eq!(code, "L3"),
            other => panic!("Expected LevelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_trainee_level_does_not_need_a_percentage() {
        let roster = Roster::new(vec![
            Employee::new("A", "L4"),
            Employee::new("B", "L1"),
        ])
        .unwrap();

        let config = PayrollConfig::new(settings(), levels(), roster).unwrap();
        assert_eq!(config.roster().len(), 2);
        assert_eq!(config.settings().decimal_precision, 2);
    }

    #[test]
    fn test_deserialize_payroll_config_validates() {
        let json = r#"{
            "settings": {"trainee_hourly_wage": "20", "margin_of_error": "0.25", "decimal_precision": 2},
            "levels": [{"code": "L4", "percentage": "0.30"}],
            "roster": [{"name": "A", "level": "L4"}, {"name": "B", "level": "L2"}]
        }"#;
        assert!(serde_json::from_str::<PayrollConfig>(json).is_err());
    }
}
