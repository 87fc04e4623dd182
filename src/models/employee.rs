//! Employee model and the ordered roster.
//!
//! The roster fixes the column order of every allocation result: slot `i` of
//! the hours, wages and tips arrays always belongs to `roster.employees()[i]`.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::LevelCode;

/// Represents an employee who can be assigned to jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique name, matched against the names written in job time logs.
    pub name: String,
    /// The employee's level.
    pub level: LevelCode,
}

impl Employee {
    /// Creates an employee.
    pub fn new(name: impl Into<String>, level: impl Into<LevelCode>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }

    /// Returns true if the employee is at the trainee level.
    ///
    /// # Examples
    ///
    /// ```
    /// use job_split_engine::models::Employee;
    ///
    /// assert!(Employee::new("Joshua Ryan", "L1").is_trainee());
    /// assert!(!Employee::new("Henry Rios", "L4").is_trainee());
    /// ```
    pub fn is_trainee(&self) -> bool {
        self.level.is_trainee()
    }
}

/// The ordered list of employees a payroll run allocates across.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Employee>", into = "Vec<Employee>")]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Builds a roster, rejecting an empty list or duplicate names.
    pub fn new(employees: Vec<Employee>) -> EngineResult<Self> {
        if employees.is_empty() {
            return Err(EngineError::InvalidRoster {
                message: "roster must contain at least one employee".to_string(),
            });
        }

        for (index, employee) in employees.iter().enumerate() {
            if employee.name.trim().is_empty() {
                return Err(EngineError::InvalidRoster {
                    message: format!("employee at position {} has an empty name", index + 1),
                });
            }
            if employees[..index].iter().any(|e| e.name == employee.name) {
                return Err(EngineError::InvalidRoster {
                    message: format!("duplicate employee name '{}'", employee.name),
                });
            }
            employee.level.validate()?;
        }

        Ok(Self { employees })
    }

    /// Returns the employees in column order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the employee names in column order.
    pub fn names(&self) -> Vec<&str> {
        self.employees.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of roster columns.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Always false for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl TryFrom<Vec<Employee>> for Roster {
    type Error = EngineError;

    fn try_from(employees: Vec<Employee>) -> EngineResult<Self> {
        Self::new(employees)
    }
}

impl From<Roster> for Vec<Employee> {
    fn from(roster: Roster) -> Self {
        roster.employees
    }
}
