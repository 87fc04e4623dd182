//! Allocation result models.
//!
//! This module contains the [`AllocationResult`] type produced for every job,
//! along with the [`SplitRule`] that decided it and the audit trace recording
//! each decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The branch of the splitting decision tree that produced an allocation.
///
/// # Example
///
/// ```
/// use job_split_engine::models::SplitRule;
///
/// assert_eq!(SplitRule::SeniorityTechnicianPair.rule_id(), "seniority_technician_pair");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    /// No time was logged; the job is paid outside the engine.
    ManualEntry,
    /// Exactly one employee worked the job.
    SingleWorker,
    /// One trainee and one technician.
    TraineeWithTechnician,
    /// Two technicians with equal hours and equal levels.
    EvenTechnicianPair,
    /// Two technicians with equal hours and different levels.
    SeniorityTechnicianPair,
    /// Technicians split the pool in proportion to their hours.
    HoursProportional,
}

impl SplitRule {
    /// Stable identifier used in audit steps and logs.
    pub fn rule_id(&self) -> &'static str {
        match self {
            SplitRule::ManualEntry => "manual_entry",
            SplitRule::SingleWorker => "single_worker",
            SplitRule::TraineeWithTechnician => "trainee_with_technician",
            SplitRule::EvenTechnicianPair => "even_technician_pair",
            SplitRule::SeniorityTechnicianPair => "seniority_technician_pair",
            SplitRule::HoursProportional => "hours_proportional",
        }
    }

    /// Human-readable rule name.
    pub fn rule_name(&self) -> &'static str {
        match self {
            SplitRule::ManualEntry => "Manual Entry",
            SplitRule::SingleWorker => "Single Worker",
            SplitRule::TraineeWithTechnician => "Trainee With Technician",
            SplitRule::EvenTechnicianPair => "Even Technician Pair",
            SplitRule::SeniorityTechnicianPair => "Seniority Technician Pair",
            SplitRule::HoursProportional => "Hours Proportional",
        }
    }
}

/// A single step in the audit trace recording an allocation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while reading a job's time log.
///
/// Warnings never stop an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning (e.g., "DUPLICATE_ENTRY").
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The audit trace for one job allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of allocation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while reading the time log.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Number to give the next recorded step.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }
}

/// The wage and tip split for one job.
///
/// All three arrays have exactly one slot per roster employee, in roster
/// order, whether or not the employee worked the job. Wages and tips carry
/// exactly `decimal_precision` fractional digits.
///
/// # Example
///
/// ```
/// use job_split_engine::models::{AllocationResult, AuditTrace, SplitRule};
/// use rust_decimal::Decimal;
///
/// let result = AllocationResult {
///     hours: vec![Decimal::new(50, 1), Decimal::ZERO],
///     wages: vec![Decimal::new(3000, 2), Decimal::new(0, 2)],
///     tips: vec![Decimal::new(1000, 2), Decimal::new(0, 2)],
///     rule: SplitRule::SingleWorker,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.total_wages(), Decimal::new(30, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Tolerant hours per roster employee.
    pub hours: Vec<Decimal>,
    /// Wage per roster employee.
    pub wages: Vec<Decimal>,
    /// Tip share per roster employee.
    pub tips: Vec<Decimal>,
    /// The rule that decided the split.
    pub rule: SplitRule,
    /// Audit trace of the allocation.
    pub audit_trace: AuditTrace,
}

impl AllocationResult {
    /// Sum of all wages on the job.
    pub fn total_wages(&self) -> Decimal {
        self.wages.iter().copied().sum()
    }

    /// Sum of all tips on the job.
    pub fn total_tips(&self) -> Decimal {
        self.tips.iter().copied().sum()
    }
}
