//! Payroll period model.
//!
//! A [`PayrollPeriod`] labels a payroll run and places it in a year and
//! quarter for period-over-period reporting.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The date range a payroll run covers.
///
/// # Example
///
/// ```
/// use job_split_engine::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod {
///     name: "January, first half".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 9).unwrap()));
/// assert_eq!(period.year(), 2026);
/// assert_eq!(period.quarter(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Display name of the period.
    pub name: String,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayrollPeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Calendar year the period starts in.
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    /// Calendar quarter (1-4) the period starts in.
    pub fn quarter(&self) -> u32 {
        (self.start_date.month() + 2) / 3
    }
}
