//! Trainee payout.
//!
//! Trainees are paid before the technicians. Each trainee earns the flat
//! hourly wage for their hours and a share of the tips proportional to their
//! hours. The tips and hours handed to a trainee are removed from the pool
//! before the next trainee (and then the technicians) are paid, in roster
//! order. The rounded tip is what gets removed.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::allocation::CrewMember;
use super::{checked, round_money};

/// What one trainee receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraineePayout {
    /// Roster column of the trainee.
    pub index: usize,
    /// Flat-rate wage.
    pub wage: Decimal,
    /// Tip share.
    pub tip: Decimal,
}

/// The result of paying every trainee on a job.
#[derive(Debug, Clone)]
pub struct TraineePayoutResult {
    /// One payout per trainee, in roster order.
    pub payouts: Vec<TraineePayout>,
    /// Tip pool left for the technicians.
    pub remaining_tips: Decimal,
    /// Hours left in the pool after removing the trainees' hours.
    pub remaining_hours: Decimal,
    /// One audit step per trainee.
    pub audit_steps: Vec<AuditStep>,
}

/// Pays the trainees in `crew`, depleting the tip and hours pools.
///
/// `total_hours` is the hours pool at the start of the payout: the sum of
/// every roster employee's hours on the job. Fails with
/// [`crate::error::EngineError::AmountOverflow`] when a trainee's wage or tip
/// is out of range.
pub fn pay_trainees(
    crew: &[CrewMember],
    total_hours: Decimal,
    tip_amount: Decimal,
    trainee_hourly_wage: Decimal,
    precision: u32,
    step_number: u32,
) -> EngineResult<TraineePayoutResult> {
    let mut remaining_tips = tip_amount;
    let mut remaining_hours = total_hours;
    let mut payouts = Vec::new();
    let mut audit_steps = Vec::new();

    for member in crew.iter().filter(|m| m.level.is_trainee()) {
        let wage = round_money(
            checked(trainee_hourly_wage.checked_mul(member.hours), "trainee wage")?,
            precision,
        );
        let tip = if remaining_hours.is_zero() {
            round_money(Decimal::ZERO, precision)
        } else {
            let share = checked(member.hours.checked_div(remaining_hours), "trainee tip share")?;
            round_money(checked(share.checked_mul(remaining_tips), "trainee tip")?, precision)
        };

        audit_steps.push(AuditStep {
            step_number: step_number + audit_steps.len() as u32,
            rule_id: "trainee_payout".to_string(),
            rule_name: "Trainee Payout".to_string(),
            input: serde_json::json!({
                "employee": member.name,
                "hours": member.hours.to_string(),
                "hourly_wage": trainee_hourly_wage.to_string(),
                "tip_pool": remaining_tips.to_string(),
                "hours_pool": remaining_hours.to_string()
            }),
            output: serde_json::json!({
                "wage": wage.to_string(),
                "tip": tip.to_string()
            }),
            reasoning: format!(
                "{}: ${} x {}h = ${}; tips {}h / {}h x ${} = ${}",
                member.name,
                trainee_hourly_wage.normalize(),
                member.hours.normalize(),
                wage,
                member.hours.normalize(),
                remaining_hours.normalize(),
                remaining_tips.normalize(),
                tip
            ),
        });

        remaining_tips = checked(remaining_tips.checked_sub(tip), "remaining tips")?;
        remaining_hours = checked(remaining_hours.checked_sub(member.hours), "remaining hours")?;

        payouts.push(TraineePayout {
            index: member.index,
            wage,
            tip,
        });
    }

    Ok(TraineePayoutResult {
        payouts,
        remaining_tips,
        remaining_hours,
        audit_steps,
    })
}
