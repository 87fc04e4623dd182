//! Calculation logic for the job-splitting engine.
//!
//! This module contains the pieces of a job allocation: hours extraction
//! from time logs, split rule selection, trainee payout, the allocation
//! itself, and the payroll run that aggregates allocations over a batch of
//! jobs.

mod allocation;
mod hours_extraction;
mod payroll_run;
mod rounding;
mod split_rule;
mod trainee_payout;

pub use allocation::{
    AllocationInput, CrewMember, allocate_job, even_pair_share, junior_share, senior_share,
    trainee_technician_share,
};
pub use hours_extraction::{HoursExtraction, HoursMode, TIME_LOG_SEPARATOR, extract_hours};
pub use payroll_run::{PROFIT_MARGIN_PRECISION, run_payroll};
pub use rounding::{checked, checked_sum, round_money, zero_money};
pub use split_rule::{CrewShape, select_split_rule};
pub use trainee_payout::{TraineePayout, TraineePayoutResult, pay_trainees};
