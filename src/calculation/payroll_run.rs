//! Payroll run over a batch of jobs.
//!
//! Each job is allocated independently, so the batch is processed in
//! parallel. A job the engine refuses (for example one worked only by
//! trainees, or one whose hours are too large to add up) is reported as a
//! [`JobOutcome::Failed`] row and left out of the employee totals and the
//! payroll; the rest of the run is unaffected.

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BusinessSummary, EmployeeTotals, JobFailure, JobLine, JobOutcome, JobRecord,
    OperatingExpenses, PayrollPeriod, PayrollReport,
};

use super::allocation::{AllocationInput, allocate_job};
use super::hours_extraction::{HoursMode, extract_hours};
use super::{checked, checked_sum, round_money, zero_money};

/// Digits the profit margin percentage is rounded to.
pub const PROFIT_MARGIN_PRECISION: u32 = 2;

/// Allocates every job and aggregates the results into a [`PayrollReport`].
///
/// Jobs appear in the report in input order. Revenue counts every job,
/// including those that failed allocation. A job whose amounts would overflow
/// the running totals is reported as failed. The run itself fails with
/// [`EngineError::AmountOverflow`] only when the business summary cannot be
/// computed, e.g. when the operating expenses are out of range.
pub fn run_payroll(
    jobs: &[JobRecord],
    config: &PayrollConfig,
    expenses: &OperatingExpenses,
    period: Option<PayrollPeriod>,
) -> EngineResult<PayrollReport> {
    let precision = config.settings().decimal_precision;
    let names = config.roster().names();

    let allocated: Vec<JobOutcome> = jobs
        .par_iter()
        .map(|job| process_job(job, config, &names))
        .collect();

    let mut totals = RunTotals::new(names.len());
    let mut outcomes = Vec::with_capacity(allocated.len());
    for (job, outcome) in jobs.iter().zip(allocated) {
        let added = job
            .net_job_amount()
            .and_then(|net_amount| totals.add(net_amount, outcome.line()));
        outcomes.push(match added {
            Err(error) if outcome.failure().is_none() => failed_job(job, &error),
            _ => outcome,
        });
    }

    let outside_period = match &period {
        Some(period) => jobs_outside_period(jobs, period),
        None => Vec::new(),
    };

    let employee_totals = employee_totals(&totals, &names, precision);
    let total_payroll = checked_sum(totals.wages.iter().copied(), "total payroll")?;
    let summary = business_summary(totals.revenue, total_payroll, expenses, precision)?;

    let failed = outcomes.iter().filter(|o| o.failure().is_some()).count();
    info!(
        jobs = outcomes.len(),
        allocated = outcomes.len() - failed,
        failed,
        outside_period = outside_period.len(),
        total_payroll = %summary.total_payroll,
        "Completed payroll run"
    );

    Ok(PayrollReport {
        year: period.as_ref().map(PayrollPeriod::year),
        quarter: period.as_ref().map(PayrollPeriod::quarter),
        period,
        jobs: outcomes,
        outside_period,
        employee_totals,
        summary,
    })
}

fn process_job(job: &JobRecord, config: &PayrollConfig, names: &[&str]) -> JobOutcome {
    match allocate_line(job, config, names) {
        Ok(line) => JobOutcome::Allocated(line),
        Err(error) => failed_job(job, &error),
    }
}

fn allocate_line(job: &JobRecord, config: &PayrollConfig, names: &[&str]) -> EngineResult<JobLine> {
    let input = AllocationInput {
        time_log: job.time_log.as_deref(),
        job_amount: job.net_job_amount()?,
        tip_amount: job.tip_amount,
    };
    let allocation = allocate_job(&input, config)?;
    let raw = extract_hours(
        input.time_log,
        names,
        config.settings().margin_of_error,
        HoursMode::Raw,
    );

    Ok(JobLine {
        job_id: job.job_id.clone(),
        status: job.status.clone(),
        address: job.address.clone(),
        completed_date: job.completed_date.clone(),
        manual_input: input.is_manual_entry(),
        job_amount: input.job_amount,
        tip_amount: job.tip_amount,
        raw_hours: raw.hours(),
        allocation,
    })
}

fn failed_job(job: &JobRecord, error: &EngineError) -> JobOutcome {
    warn!(
        job_id = %job.job_id,
        code = error.code(),
        error = %error,
        "Job needs manual review"
    );
    JobOutcome::Failed(JobFailure {
        job_id: job.job_id.clone(),
        code: error.code().to_string(),
        message: error.to_string(),
    })
}

fn jobs_outside_period(jobs: &[JobRecord], period: &PayrollPeriod) -> Vec<String> {
    let mut outside = Vec::new();
    for job in jobs {
        let Some(date) = job.completed_on() else {
            continue;
        };
        if !period.contains_date(date) {
            warn!(
                job_id = %job.job_id,
                completed_date = %date,
                period = %period.name,
                "Job completed outside the payroll period"
            );
            outside.push(job.job_id.clone());
        }
    }
    outside
}

/// Running sums over the jobs added so far, per roster column.
struct RunTotals {
    revenue: Decimal,
    wages: Vec<Decimal>,
    tips: Vec<Decimal>,
    hours: Vec<Decimal>,
}

impl RunTotals {
    fn new(columns: usize) -> Self {
        Self {
            revenue: Decimal::ZERO,
            wages: vec![Decimal::ZERO; columns],
            tips: vec![Decimal::ZERO; columns],
            hours: vec![Decimal::ZERO; columns],
        }
    }

    /// Adds one job. On overflow the totals are left as they were.
    fn add(&mut self, net_amount: Decimal, line: Option<&JobLine>) -> EngineResult<()> {
        let revenue = checked(self.revenue.checked_add(net_amount), "total revenue")?;
        if let Some(line) = line {
            let wages = add_columns(&self.wages, &line.allocation.wages, "employee wages")?;
            let tips = add_columns(&self.tips, &line.allocation.tips, "employee tips")?;
            let hours = add_columns(&self.hours, &line.raw_hours, "employee hours")?;
            self.wages = wages;
            self.tips = tips;
            self.hours = hours;
        }
        self.revenue = revenue;
        Ok(())
    }
}

fn add_columns(totals: &[Decimal], values: &[Decimal], operation: &str) -> EngineResult<Vec<Decimal>> {
    totals
        .iter()
        .zip(values)
        .map(|(total, value)| checked(total.checked_add(*value), operation))
        .collect()
}

fn employee_totals(totals: &RunTotals, names: &[&str], precision: u32) -> Vec<EmployeeTotals> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let (wages, hours) = (totals.wages[i], totals.hours[i]);
            EmployeeTotals {
                name: name.to_string(),
                total_wages: round_money(wages, precision),
                total_tips: round_money(totals.tips[i], precision),
                total_hours: hours,
                // zero hours, or a rate out of range, reports as zero
                avg_hourly_rate: wages
                    .checked_div(hours)
                    .map_or_else(|| zero_money(precision), |rate| round_money(rate, precision)),
            }
        })
        .collect()
}

fn business_summary(
    total_revenue: Decimal,
    total_payroll: Decimal,
    expenses: &OperatingExpenses,
    precision: u32,
) -> EngineResult<BusinessSummary> {
    let total_expenses = checked(
        total_payroll
            .checked_add(expenses.marketing_spend)
            .and_then(|sum| sum.checked_add(expenses.insurance_spend)),
        "total expenses",
    )?;
    let net_profit = checked(total_revenue.checked_sub(total_expenses), "net profit")?;
    let profit_margin = if total_revenue.is_zero() {
        zero_money(PROFIT_MARGIN_PRECISION)
    } else {
        let margin = net_profit
            .checked_div(total_revenue)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
        round_money(checked(margin, "profit margin")?, PROFIT_MARGIN_PRECISION)
    };

    Ok(BusinessSummary {
        total_revenue: round_money(total_revenue, precision),
        total_payroll: round_money(total_payroll, precision),
        marketing_spend: round_money(expenses.marketing_spend, precision),
        insurance_spend: round_money(expenses.insurance_spend, precision),
        total_expenses: round_money(total_expenses, precision),
        net_profit: round_money(net_profit, precision),
        profit_margin,
    })
}
