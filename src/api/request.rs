//! Request types for the job-splitting API.
//!
//! This module defines the JSON request structures for the `/allocate` and
//! `/payroll` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::AllocationInput;
use crate::models::{JobRecord, OperatingExpenses, PayrollPeriod};

use super::response::ApiError;

/// Request body for the `/allocate` endpoint.
///
/// Carries the money side of a single job. Amounts may be sent as JSON
/// numbers or strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocateRequest {
    /// Optional job number, echoed in the logs.
    #[serde(default)]
    pub job_id: Option<String>,
    /// Multi-line `"Employee Name - hours"` log; absent for manual jobs.
    #[serde(default)]
    pub time_log: Option<String>,
    /// Job amount excluding tips.
    pub job_amount: Decimal,
    /// Tip amount.
    #[serde(default)]
    pub tip_amount: Decimal,
}

impl AllocateRequest {
    /// Rejects negative job or tip amounts.
    pub fn validate(&self) -> Result<(), ApiError> {
        for (field, amount) in [("job_amount", self.job_amount), ("tip_amount", self.tip_amount)] {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(ApiError::validation_error(format!(
                    "{} must not be negative, got {}",
                    field, amount
                )));
            }
        }
        Ok(())
    }

    /// Borrows the request as engine input.
    pub fn as_input(&self) -> AllocationInput<'_> {
        AllocationInput {
            time_log: self.time_log.as_deref(),
            job_amount: self.job_amount,
            tip_amount: self.tip_amount,
        }
    }
}

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The period the run covers.
    #[serde(default)]
    pub period: Option<PayrollPeriod>,
    /// Completed jobs, as exported upstream.
    pub jobs: Vec<JobRecord>,
    /// Operating expenses for the business summary.
    #[serde(default)]
    pub expenses: OperatingExpenses,
}
