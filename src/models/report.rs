//! Payroll report models.
//!
//! These types hold the output of a batch run: the per-job outcomes, the
//! per-employee totals and the business summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AllocationResult, PayrollPeriod};

/// A successfully allocated job, merged with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobLine {
    /// The job number.
    pub job_id: String,
    /// Current job status.
    pub status: String,
    /// Service address.
    pub address: String,
    /// Completion date as exported upstream.
    pub completed_date: String,
    /// True when no time was logged for the job.
    pub manual_input: bool,
    /// Job amount excluding tips.
    pub job_amount: Decimal,
    /// Tip amount.
    pub tip_amount: Decimal,
    /// Raw (untolerated) hours per roster employee.
    pub raw_hours: Vec<Decimal>,
    /// The allocation.
    pub allocation: AllocationResult,
}

/// A job the engine refused to allocate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFailure {
    /// The job number.
    pub job_id: String,
    /// Stable error code (e.g., "NO_TECHNICIANS").
    pub code: String,
    /// Error message.
    pub message: String,
}

/// The outcome of one job in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum JobOutcome {
    /// The job was allocated.
    Allocated(JobLine),
    /// The job needs manual review.
    Failed(JobFailure),
}

impl JobOutcome {
    /// Returns the allocated line, if any.
    pub fn line(&self) -> Option<&JobLine> {
        match self {
            JobOutcome::Allocated(line) => Some(line),
            JobOutcome::Failed(_) => None,
        }
    }

    /// Returns the failure, if any.
    pub fn failure(&self) -> Option<&JobFailure> {
        match self {
            JobOutcome::Allocated(_) => None,
            JobOutcome::Failed(failure) => Some(failure),
        }
    }
}

/// Totals for one roster employee across a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// Employee name.
    pub name: String,
    /// Sum of wages.
    pub total_wages: Decimal,
    /// Sum of tips.
    pub total_tips: Decimal,
    /// Sum of raw logged hours.
    pub total_hours: Decimal,
    /// Wages divided by raw hours; zero when no hours were logged.
    pub avg_hourly_rate: Decimal,
}

/// Operating expenses entered for a payroll run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingExpenses {
    /// Marketing spend for the period.
    #[serde(default)]
    pub marketing_spend: Decimal,
    /// Insurance spend for the period.
    #[serde(default)]
    pub insurance_spend: Decimal,
}

/// Business-level summary of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSummary {
    /// Sum of job amounts excluding tips.
    pub total_revenue: Decimal,
    /// Sum of wages paid.
    pub total_payroll: Decimal,
    /// Marketing spend.
    pub marketing_spend: Decimal,
    /// Insurance spend.
    pub insurance_spend: Decimal,
    /// Payroll plus marketing plus insurance.
    pub total_expenses: Decimal,
    /// Revenue minus expenses.
    pub net_profit: Decimal,
    /// Net profit as a percentage of revenue.
    pub profit_margin: Decimal,
}

/// The full output of a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The period the run covers, if one was given.
    pub period: Option<PayrollPeriod>,
    /// Year of the period.
    pub year: Option<i32>,
    /// Quarter of the period.
    pub quarter: Option<u32>,
    /// Per-job outcomes, in input order.
    pub jobs: Vec<JobOutcome>,
    /// Ids of jobs completed outside the period. They are still paid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outside_period: Vec<String>,
    /// Per-employee totals, in roster order.
    pub employee_totals: Vec<EmployeeTotals>,
    /// Business summary.
    pub summary: BusinessSummary,
}

impl PayrollReport {
    /// Iterates over the jobs that failed allocation.
    pub fn failures(&self) -> impl Iterator<Item = &JobFailure> {
        self.jobs.iter().filter_map(JobOutcome::failure)
    }
}
