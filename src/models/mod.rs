//! Core data models for the job-splitting engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation_result;
mod employee;
mod job;
mod level;
mod payroll_period;
mod report;

pub use allocation_result::{AllocationResult, AuditStep, AuditTrace, AuditWarning, SplitRule};
pub use employee::{Employee, Roster};
pub use job::{JobRecord, parse_amount};
pub use level::{LevelCode, LevelDefinition, LevelTable};
pub use payroll_period::PayrollPeriod;
pub use report::{
    BusinessSummary, EmployeeTotals, JobFailure, JobLine, JobOutcome, OperatingExpenses,
    PayrollReport,
};
