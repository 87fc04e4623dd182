//! Level codes and the level-percentage table.
//!
//! Every employee carries a [`LevelCode`]. The trainee level (`L1`) is paid a
//! flat hourly wage; every other level is a technician level paid a percentage
//! of the job amount looked up in the [`LevelTable`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A level code such as `"L1"` or `"L4"`.
///
/// # Example
///
/// ```
/// use job_split_engine::models::LevelCode;
///
/// assert!(LevelCode::new("L1").is_trainee());
/// assert!(!LevelCode::new("L3").is_trainee());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LevelCode(String);

impl LevelCode {
    /// The distinguished trainee level.
    pub const TRAINEE: &'static str = "L1";

    /// Creates a level code. Codes are stored upper-cased.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    /// Returns the trainee level code.
    pub fn trainee() -> Self {
        Self(Self::TRAINEE.to_string())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the trainee level.
    pub fn is_trainee(&self) -> bool {
        self.0 == Self::TRAINEE
    }

    /// Checks the `L<digits>` format.
    pub fn validate(&self) -> EngineResult<()> {
        let well_formed = self
            .0
            .strip_prefix('L')
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));

        if well_formed {
            Ok(())
        } else {
            Err(EngineError::InvalidLevel {
                code: self.0.clone(),
                message: "level code must be in format L1, L2, L3, etc.".to_string(),
            })
        }
    }
}

impl fmt::Display for LevelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LevelCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LevelCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<LevelCode> for String {
    fn from(code: LevelCode) -> Self {
        code.0
    }
}

/// A single row of the level table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// The level code.
    pub code: LevelCode,
    /// Display name (e.g., "Trainee", "Level 4").
    #[serde(default)]
    pub name: String,
    /// Share of the job amount paid to a technician at this level, in `[0, 1]`.
    pub percentage: Decimal,
}

/// Mapping from level code to technician percentage.
///
/// # Example
///
/// ```
/// use job_split_engine::models::{LevelCode, LevelDefinition, LevelTable};
/// use rust_decimal::Decimal;
///
/// let table = LevelTable::new(vec![LevelDefinition {
///     code: LevelCode::new("L4"),
///     name: "Level 4".to_string(),
///     percentage: Decimal::new(30, 2),
/// }])
/// .unwrap();
///
/// assert_eq!(table.percentage(&LevelCode::new("L4")).unwrap(), Decimal::new(30, 2));
/// assert!(table.percentage(&LevelCode::new("L2")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelDefinition>", into = "Vec<LevelDefinition>")]
pub struct LevelTable {
    levels: Vec<LevelDefinition>,
}

impl LevelTable {
    /// Builds a validated level table.
    ///
    /// Fails if a code is malformed or duplicated, or a percentage lies
    /// outside `[0, 1]`.
    pub fn new(levels: Vec<LevelDefinition>) -> EngineResult<Self> {
        for (index, level) in levels.iter().enumerate() {
            level.code.validate()?;

            if level.percentage < Decimal::ZERO || level.percentage > Decimal::ONE {
                return Err(EngineError::InvalidLevel {
                    code: level.code.to_string(),
                    message: format!(
                        "percentage {} must be between 0 and 1",
                        level.percentage
                    ),
                });
            }

            if levels[..index].iter().any(|l| l.code == level.code) {
                return Err(EngineError::InvalidLevel {
                    code: level.code.to_string(),
                    message: "duplicate level code".to_string(),
                });
            }
        }

        Ok(Self { levels })
    }

    /// Looks up the technician percentage for a level.
    pub fn percentage(&self, code: &LevelCode) -> EngineResult<Decimal> {
        self.get(code)
            .map(|l| l.percentage)
            .ok_or_else(|| EngineError::LevelNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the definition for a level, if present.
    pub fn get(&self, code: &LevelCode) -> Option<&LevelDefinition> {
        self.levels.iter().find(|l| &l.code == code)
    }

    /// Returns true if the table has a row for the level.
    pub fn contains(&self, code: &LevelCode) -> bool {
        self.get(code).is_some()
    }

    /// Returns all level definitions in table order.
    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }
}

impl TryFrom<Vec<LevelDefinition>> for LevelTable {
    type Error = EngineError;

    fn try_from(levels: Vec<LevelDefinition>) -> EngineResult<Self> {
        Self::new(levels)
    }
}

impl From<LevelTable> for Vec<LevelDefinition> {
    fn from(table: LevelTable) -> Self {
        table.levels
    }
}
