//! Job allocation.
//!
//! [`allocate_job`] splits one job's wages and tips across the roster. It is a
//! pure function of the job and the [`PayrollConfig`]: jobs can be allocated
//! in any order, or in parallel, against a shared configuration.
//!
//! The technician wage pool is the job amount times the highest level
//! percentage among the technicians on the job. Trainees are paid first
//! (see [`pay_trainees`]); the pool and the remaining tips are then divided
//! according to the [`SplitRule`] selected for the crew.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{AllocationResult, AuditStep, AuditTrace, LevelCode, SplitRule};

use super::hours_extraction::{HoursMode, extract_hours};
use super::split_rule::{CrewShape, select_split_rule};
use super::trainee_payout::pay_trainees;
use super::{checked, checked_sum, round_money, zero_money};

/// Technician's share of the pool when working with a single trainee.
pub fn trainee_technician_share() -> Decimal {
    Decimal::new(65, 2)
}

/// Each technician's share when a pair is even on hours and level.
pub fn even_pair_share() -> Decimal {
    Decimal::new(50, 2)
}

/// Senior technician's share of an equal-hours pair.
pub fn senior_share() -> Decimal {
    Decimal::new(60, 2)
}

/// Junior technician's share of an equal-hours pair.
pub fn junior_share() -> Decimal {
    Decimal::new(40, 2)
}

/// The money side of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationInput<'a> {
    /// The job's time log; `None` or blank for a manually paid job.
    pub time_log: Option<&'a str>,
    /// Job amount excluding tips.
    pub job_amount: Decimal,
    /// Tip amount.
    pub tip_amount: Decimal,
}

impl AllocationInput<'_> {
    /// True when no time was logged.
    pub fn is_manual_entry(&self) -> bool {
        self.time_log.is_none_or(|log| log.trim().is_empty())
    }
}

/// A roster employee who worked the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    /// Roster column.
    pub index: usize,
    /// Employee name.
    pub name: String,
    /// Employee level.
    pub level: LevelCode,
    /// Tolerant hours on the job.
    pub hours: Decimal,
}

/// Allocates one job's wages and tips across the roster.
///
/// Returns [`crate::error::EngineError::NoTechnicians`] when several people
/// (or nobody on the roster) worked the job and none is a technician,
/// [`crate::error::EngineError::LevelNotFound`] when a worker's level has no
/// percentage in the level table, and
/// [`crate::error::EngineError::AmountOverflow`] when the logged hours or the
/// amounts are too large to split.
///
/// # Examples
///
/// ```
/// use job_split_engine::calculation::{AllocationInput, allocate_job};
/// use job_split_engine::config::{EngineSettings, PayrollConfig};
/// use job_split_engine::models::{Employee, LevelCode, LevelDefinition, LevelTable, Roster};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let config = PayrollConfig::new(
///     EngineSettings {
///         trainee_hourly_wage: dec("20"),
///         margin_of_error: dec("0.25"),
///         decimal_precision: 2,
///     },
///     LevelTable::new(vec![LevelDefinition {
///         code: LevelCode::new("L4"),
///         name: "Level 4".to_string(),
///         percentage: dec("0.30"),
///     }])
///     .unwrap(),
///     Roster::new(vec![Employee::new("A", "L4"), Employee::new("B", "L1")]).unwrap(),
/// )
/// .unwrap();
///
/// let input = AllocationInput {
///     time_log: Some("A - 5.0\nB - 3.0"),
///     job_amount: dec("100"),
///     tip_amount: dec("10"),
/// };
/// let result = allocate_job(&input, &config).unwrap();
///
/// assert_eq!(result.wages, vec![dec("19.50"), dec("60.00")]);
/// assert_eq!(result.tips, vec![dec("6.25"), dec("3.75")]);
/// ```
pub fn allocate_job(input: &AllocationInput<'_>, config: &PayrollConfig) -> EngineResult<AllocationResult> {
    let settings = config.settings();
    let roster = config.roster();
    let precision = settings.decimal_precision;

    let extraction = extract_hours(
        input.time_log,
        &roster.names(),
        settings.margin_of_error,
        HoursMode::Tolerant,
    );
    let hours = extraction.hours();

    let mut wages = vec![zero_money(precision); roster.len()];
    let mut tips = vec![zero_money(precision); roster.len()];
    let mut trace = AuditTrace {
        steps: Vec::new(),
        warnings: extraction.warnings.clone(),
    };

    let extraction_step = AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "hours_extraction".to_string(),
        rule_name: "Hours Extraction".to_string(),
        input: serde_json::json!({
            "time_log": input.time_log,
            "margin_of_error": settings.margin_of_error.to_string()
        }),
        output: serde_json::json!({
            "hours": extraction
                .entries
                .iter()
                .map(|(name, h)| (name.clone(), serde_json::Value::String(h.to_string())))
                .collect::<serde_json::Map<_, _>>(),
            "max_time": extraction.max_time.to_string()
        }),
        reasoning: format!(
            "{} of {} roster employees logged time; entries within {}h of the longest time ({}h) were rounded up",
            extraction.worker_count(),
            roster.len(),
            settings.margin_of_error.normalize(),
            extraction.max_time.normalize()
        ),
    };
    trace.steps.push(extraction_step);

    if input.is_manual_entry() {
        let manual_step = rule_step(
            &trace,
            SplitRule::ManualEntry,
            serde_json::json!({}),
            serde_json::json!({}),
            "No time logged; the job is paid outside the engine".to_string(),
        );
        trace.steps.push(manual_step);
        debug!(rule = SplitRule::ManualEntry.rule_id(), "Allocated job");
        return Ok(AllocationResult {
            hours,
            wages,
            tips,
            rule: SplitRule::ManualEntry,
            audit_trace: trace,
        });
    }

    let crew: Vec<CrewMember> = roster
        .employees()
        .iter()
        .zip(&hours)
        .enumerate()
        .filter(|(_, (_, h))| !h.is_zero())
        .map(|(index, (employee, h))| CrewMember {
            index,
            name: employee.name.clone(),
            level: employee.level.clone(),
            hours: *h,
        })
        .collect();

    let technicians: Vec<&CrewMember> = crew.iter().filter(|m| !m.level.is_trainee()).collect();
    let (equal_hours, equal_levels) = match technicians.as_slice() {
        [a, b] => (a.hours == b.hours, a.level == b.level),
        _ => (false, false),
    };

    let rule = select_split_rule(&CrewShape {
        workers: crew.len(),
        trainees: crew.len() - technicians.len(),
        technicians: technicians.len(),
        equal_hours,
        equal_levels,
    })?;

    if rule == SplitRule::SingleWorker {
        let worker = &crew[0];
        let percentage = config.levels().percentage(&worker.level)?;
        wages[worker.index] = round_money(
            checked(percentage.checked_mul(input.job_amount), "single worker wage")?,
            precision,
        );
        tips[worker.index] = round_money(input.tip_amount, precision);

        let single_step = rule_step(
            &trace,
            rule,
            serde_json::json!({
                "employee": worker.name,
                "level": worker.level,
                "percentage": percentage.to_string(),
                "job_amount": input.job_amount.to_string(),
                "tip_amount": input.tip_amount.to_string()
            }),
            serde_json::json!({
                "wage": wages[worker.index].to_string(),
                "tip": tips[worker.index].to_string()
            }),
            format!(
                "{} worked alone: {} x ${} = ${}, all tips ${}",
                worker.name,
                percentage.normalize(),
                input.job_amount.normalize(),
                wages[worker.index],
                tips[worker.index]
            ),
        );
        trace.steps.push(single_step);
        debug!(rule = rule.rule_id(), workers = 1, "Allocated job");
        return Ok(AllocationResult {
            hours,
            wages,
            tips,
            rule,
            audit_trace: trace,
        });
    }

    let mut technician_pcts = Vec::with_capacity(technicians.len());
    for technician in &technicians {
        technician_pcts.push((*technician, config.levels().percentage(&technician.level)?));
    }
    let max_pct = technician_pcts
        .iter()
        .map(|(_, pct)| *pct)
        .max()
        .unwrap_or(Decimal::ZERO);
    let pool = checked(max_pct.checked_mul(input.job_amount), "technician pool")?;

    let trainee_payout = pay_trainees(
        &crew,
        extraction.total()?,
        input.tip_amount,
        settings.trainee_hourly_wage,
        precision,
        trace.next_step_number(),
    )?;
    for payout in &trainee_payout.payouts {
        wages[payout.index] = payout.wage;
        tips[payout.index] = payout.tip;
    }
    trace.steps.extend(trainee_payout.audit_steps);

    let remaining_tips = trainee_payout.remaining_tips;
    let remaining_hours = trainee_payout.remaining_hours;

    match (rule, technician_pcts.as_slice()) {
        (SplitRule::TraineeWithTechnician, [(technician, _)]) => {
            wages[technician.index] = round_money(trainee_technician_share() * pool, precision);
            let share = checked(technician.hours.checked_div(remaining_hours), "technician tip share")?;
            tips[technician.index] =
                round_money(checked(share.checked_mul(remaining_tips), "technician tip")?, precision);
        }
        (SplitRule::EvenTechnicianPair, pair) => {
            for (technician, _) in pair {
                wages[technician.index] = round_money(even_pair_share() * pool, precision);
                tips[technician.index] = round_money(even_pair_share() * remaining_tips, precision);
            }
        }
        (SplitRule::SeniorityTechnicianPair, [(first, first_pct), (second, second_pct)]) => {
            let (senior, junior) = if first_pct > second_pct {
                (first, second)
            } else {
                (second, first)
            };
            wages[senior.index] = round_money(senior_share() * pool, precision);
            wages[junior.index] = round_money(junior_share() * pool, precision);
            let half_tips = round_money(even_pair_share() * remaining_tips, precision);
            tips[senior.index] = half_tips;
            tips[junior.index] = half_tips;
        }
        (_, members) => {
            let technician_hours = checked_sum(members.iter().map(|(t, _)| t.hours), "technician hours")?;
            for (technician, _) in members {
                let share = checked(technician.hours.checked_div(technician_hours), "technician share")?;
                wages[technician.index] =
                    round_money(checked(share.checked_mul(pool), "technician wage")?, precision);
                tips[technician.index] =
                    round_money(checked(share.checked_mul(remaining_tips), "technician tip")?, precision);
            }
        }
    }

    let split_step = rule_step(
        &trace,
        rule,
        serde_json::json!({
            "technicians": technician_pcts
                .iter()
                .map(|(t, pct)| serde_json::json!({
                    "employee": t.name,
                    "level": t.level,
                    "percentage": pct.to_string(),
                    "hours": t.hours.to_string()
                }))
                .collect::<Vec<_>>(),
            "max_percentage": max_pct.to_string(),
            "job_amount": input.job_amount.to_string(),
            "tip_pool": remaining_tips.to_string(),
            "hours_pool": remaining_hours.to_string()
        }),
        serde_json::json!({
            "wages": technician_pcts
                .iter()
                .map(|(t, _)| (t.name.clone(), serde_json::Value::String(wages[t.index].to_string())))
                .collect::<serde_json::Map<_, _>>(),
            "tips": technician_pcts
                .iter()
                .map(|(t, _)| (t.name.clone(), serde_json::Value::String(tips[t.index].to_string())))
                .collect::<serde_json::Map<_, _>>()
        }),
        format!(
            "Technician pool {} x ${} = ${}; split by {} across {} technician(s) with ${} of tips remaining",
            max_pct.normalize(),
            input.job_amount.normalize(),
            pool.normalize(),
            rule.rule_name(),
            technician_pcts.len(),
            remaining_tips.normalize()
        ),
    );
    trace.steps.push(split_step);

    debug!(
        rule = rule.rule_id(),
        workers = crew.len(),
        technicians = technician_pcts.len(),
        pool = %pool,
        "Allocated job"
    );

    Ok(AllocationResult {
        hours,
        wages,
        tips,
        rule,
        audit_trace: trace,
    })
}

fn rule_step(
    trace: &AuditTrace,
    rule: SplitRule,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number: trace.next_step_number(),
        rule_id: rule.rule_id().to_string(),
        rule_name: rule.rule_name().to_string(),
        input,
        output,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use crate::error::EngineError;
    use crate::models::{Employee, LevelDefinition, LevelTable, Roster};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_config(employees: &[(&str, &str)]) -> PayrollConfig {
        let levels = LevelTable::new(
            [("L2", "0.25"), ("L3", "0.27"), ("L4", "0.30")]
                .iter()
                .map(|(code, pct)| LevelDefinition {
                    code: LevelCode::new(*code),
                    name: code.to_string(),
                    percentage: dec(pct),
                })
                .collect(),
        )
        .unwrap();

        let roster = Roster::new(
            employees
                .iter()
                .map(|(name, level)| Employee::new(*name, *level))
                .collect(),
        )
        .unwrap();

        PayrollConfig::new(
            EngineSettings {
                trainee_hourly_wage: dec("20"),
                margin_of_error: dec("0.25"),
                decimal_precision: 2,
            },
            levels,
            roster,
        )
        .unwrap()
    }

    fn allocate(
        config: &PayrollConfig,
        time_log: Option<&str>,
        job_amount: &str,
        tip_amount: &str,
    ) -> EngineResult<AllocationResult> {
        allocate_job(
            &AllocationInput {
                time_log,
                job_amount: dec(job_amount),
                tip_amount: dec(tip_amount),
            },
            config,
        )
    }

    /// AL-001: manual job pays nobody
    #[test]
    fn test_manual_entry_returns_zeros() {
        let config = create_test_config(&[("A", "L4"), ("B", "L3")]);

        let result = allocate(&config, None, "100", "10").unwrap();

        assert_eq!(result.rule, SplitRule::ManualEntry);
        assert_eq!(result.wages, vec![dec("0.00"), dec("0.00")]);
        assert_eq!(result.tips, vec![dec("0.00"), dec("0.00")]);
        assert_eq!(result.hours, vec![Decimal::ZERO, Decimal::ZERO]);
        assert_eq!(result.wages[0].to_string(), "0.00");
    }

    /// AL-002: single technician gets their percentage and every tip
    #[test]
    fn test_single_worker() {
        let config = create_test_config(&[("A", "L4"), ("B", "L3"), ("C", "L1")]);

        let result = allocate(&config, Some("B - 4.0"), "200", "15").unwrap();

        assert_eq!(result.rule, SplitRule::SingleWorker);
        assert_eq!(result.wages, vec![dec("0"), dec("54.00"), dec("0")]);
        assert_eq!(result.tips, vec![dec("0"), dec("15.00"), dec("0")]);
    }

    /// AL-003: the worked example from the trainee rules
    #[test]
    fn test_trainee_with_technician() {
        let config = create_test_config(&[("A", "L4"), ("B", "L1")]);

        let result = allocate(&config, Some("A - 5.0\nB - 3.0"), "100", "10").unwrap();

        assert_eq!(result.rule, SplitRule::TraineeWithTechnician);
        assert_eq!(result.hours, vec![dec("5.0"), dec("3.0")]);
        assert_eq!(result.wages, vec![dec("19.50"), dec("60.00")]);
        assert_eq!(result.tips, vec![dec("6.25"), dec("3.75")]);
    }

    /// AL-004: only trainees is a business-rule violation
    #[test]
    fn test_only_trainees_fails() {
        let config = create_test_config(&[("A", "L4"), ("T1", "L1"), ("T2", "L1")]);

        let result = allocate(&config, Some("T1 - 3\nT2 - 2"), "100", "10");

        match result {
            Err(EngineError::NoTechnicians { trainees }) => assert_eq!(trainees, 2),
            other => panic!("Expected NoTechnicians, got {:?}", other),
        }
    }

    /// AL-005: log naming nobody on the roster has no technicians
    #[test]
    fn test_log_without_roster_workers_fails() {
        let config = create_test_config(&[("A", "L4")]);

        let result = allocate(&config, Some("Stranger - 3"), "100", "10");

        assert!(matches!(result, Err(EngineError::NoTechnicians { trainees: 0 })));
    }

    /// AL-006: equal hours and levels split 50/50
    #[test]
    fn test_even_pair() {
        let config = create_test_config(&[("A", "L4"), ("B", "L4")]);

        let result = allocate(&config, Some("A - 4.0\nB - 4.1"), "101", "7").unwrap();

        // 4.0 snaps up to 4.1, pool = 0.30 x 101 = 30.30
        assert_eq!(result.rule, SplitRule::EvenTechnicianPair);
        assert_eq!(result.wages, vec![dec("15.15"), dec("15.15")]);
        assert_eq!(result.tips, vec![dec("3.50"), dec("3.50")]);
    }

    /// AL-007: equal hours, different levels split 60/40 on wages only
    #[test]
    fn test_seniority_pair() {
        let config = create_test_config(&[("Junior", "L2"), ("Senior", "L4")]);

        let result = allocate(&config, Some("Junior - 6\nSenior - 6"), "100", "20").unwrap();

        // pool = 0.30 x 100 = 30
        assert_eq!(result.rule, SplitRule::SeniorityTechnicianPair);
        assert_eq!(result.wages, vec![dec("12.00"), dec("18.00")]);
        assert_eq!(result.tips, vec![dec("10.00"), dec("10.00")]);
    }

    #[test]
    fn test_seniority_pair_senior_listed_first() {
        let config = create_test_config(&[("Senior", "L4"), ("Junior", "L3")]);

        let result = allocate(&config, Some("Senior - 2\nJunior - 2"), "100", "0").unwrap();

        assert_eq!(result.wages, vec![dec("18.00"), dec("12.00")]);
        assert_eq!(result.tips, vec![dec("0.00"), dec("0.00")]);
    }

    /// AL-008: unequal hours split by hours regardless of level
    #[test]
    fn test_unequal_pair_is_hours_proportional() {
        let config = create_test_config(&[("A", "L4"), ("B", "L2")]);

        let result = allocate(&config, Some("A - 6\nB - 2"), "200", "40").unwrap();

        // pool = 0.30 x 200 = 60
        assert_eq!(result.rule, SplitRule::HoursProportional);
        assert_eq!(result.wages, vec![dec("45.00"), dec("15.00")]);
        assert_eq!(result.tips, vec![dec("30.00"), dec("10.00")]);
    }

    /// AL-009: three technicians split by hours
    #[test]
    fn test_three_technicians() {
        let config = create_test_config(&[("A", "L4"), ("B", "L3"), ("C", "L2")]);

        let result = allocate(&config, Some("A - 2\nB - 3\nC - 5"), "100", "10").unwrap();

        assert_eq!(result.rule, SplitRule::HoursProportional);
        assert_eq!(result.wages, vec![dec("6.00"), dec("9.00"), dec("15.00")]);
        assert_eq!(result.tips, vec![dec("2.00"), dec("3.00"), dec("5.00")]);
        assert_eq!(result.total_wages(), dec("30.00"));
    }

    /// AL-010: two technicians with a trainee use the pair rules on the remaining tips
    #[test]
    fn test_pair_with_trainee() {
        let config = create_test_config(&[("A", "L4"), ("B", "L4"), ("T", "L1")]);

        let result = allocate(&config, Some("A - 4\nB - 4\nT - 2"), "100", "10").unwrap();

        // T: wage 20 x 2 = 40, tip 2/10 x 10 = 2; remaining tips 8
        assert_eq!(result.rule, SplitRule::EvenTechnicianPair);
        assert_eq!(result.wages, vec![dec("15.00"), dec("15.00"), dec("40.00")]);
        assert_eq!(result.tips, vec![dec("4.00"), dec("4.00"), dec("2.00")]);
    }

    /// AL-011: one technician with two trainees takes the whole pool
    #[test]
    fn test_technician_with_two_trainees() {
        let config = create_test_config(&[("A", "L3"), ("T1", "L1"), ("T2", "L1")]);

        let result = allocate(&config, Some("A - 4\nT1 - 2\nT2 - 2"), "100", "8").unwrap();

        // T1: 2/8 x 8 = 2 (pool 6 over 6h); T2: 2/6 x 6 = 2 (pool 4 over 4h)
        assert_eq!(result.rule, SplitRule::HoursProportional);
        assert_eq!(result.wages, vec![dec("27.00"), dec("40.00"), dec("40.00")]);
        assert_eq!(result.tips, vec![dec("4.00"), dec("2.00"), dec("2.00")]);
    }

    #[test]
    fn test_pool_uses_highest_technician_percentage() {
        let config = create_test_config(&[("A", "L2"), ("B", "L4"), ("C", "L3")]);

        let result = allocate(&config, Some("A - 1\nB - 1\nC - 2"), "1000", "0").unwrap();

        // pool = 0.30 x 1000 = 300
        assert_eq!(result.wages, vec![dec("75.00"), dec("75.00"), dec("150.00")]);
    }

    #[test]
    fn test_single_trainee_without_percentage_fails() {
        let config = create_test_config(&[("A", "L4"), ("T", "L1")]);

        let result = allocate(&config, Some("T - 3"), "100", "10");

        assert!(matches!(result, Err(EngineError::LevelNotFound { .. })));
    }

    #[test]
    fn test_output_columns_match_roster() {
        let config = create_test_config(&[("A", "L4"), ("B", "L3"), ("C", "L2"), ("D", "L1")]);

        let result = allocate(&config, Some("C - 1"), "50", "5").unwrap();

        assert_eq!(result.hours.len(), 4);
        assert_eq!(result.wages.len(), 4);
        assert_eq!(result.tips.len(), 4);
    }

    #[test]
    fn test_audit_trace_records_each_decision() {
        let config = create_test_config(&[("A", "L4"), ("B", "L1")]);

        let result = allocate(&config, Some("A - 5.0\nB - 3.0\nbad line"), "100", "10").unwrap();
        let steps = &result.audit_trace.steps;

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].rule_id, "hours_extraction");
        assert_eq!(steps[1].rule_id, "trainee_payout");
        assert_eq!(steps[2].rule_id, "trainee_with_technician");
        assert_eq!(
            steps.iter().map(|s| s.step_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "UNRECOGNIZED_LINE");
    }

    #[test]
    fn test_rounding_follows_precision() {
        let base = create_test_config(&[("A", "L4"), ("B", "L3"), ("C", "L2")]);
        let config = PayrollConfig::new(
            EngineSettings {
                decimal_precision: 3,
                ..base.settings().clone()
            },
            base.levels().clone(),
            base.roster().clone(),
        )
        .unwrap();

        let result = allocate(&config, Some("A - 1\nB - 1\nC - 1"), "100", "10").unwrap();

        // 1/3 x 30 = 10, 1/3 x 10 = 3.333..
        assert_eq!(result.wages[0].to_string(), "10.000");
        assert_eq!(result.tips[0].to_string(), "3.333");
    }

    /// AL-012: hours too large to add up fail the job instead of panicking
    #[test]
    fn test_oversized_hours_fail_with_overflow() {
        let config = create_test_config(&[("A", "L4"), ("B", "L3")]);
        let max = Decimal::MAX.to_string();
        let log = format!("A - {}\nB - {}", max, max);

        let result = allocate(&config, Some(&log), "100", "10");

        match result {
            Err(EngineError::AmountOverflow { operation }) => assert_eq!(operation, "total hours"),
            other => panic!("Expected AmountOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_trainee_hours_fail_with_overflow() {
        let config = create_test_config(&[("A", "L4"), ("B", "L1")]);

        // 20 x 7.9e27 exceeds the decimal range
        let result = allocate(
            &config,
            Some("A - 2\nB - 7922816251426433759354395033"),
            "100",
            "0",
        );

        match result {
            Err(EngineError::AmountOverflow { operation }) => assert_eq!(operation, "trainee wage"),
            other => panic!("Expected AmountOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_job_amount_still_allocates() {
        let config = create_test_config(&[("A", "L4")]);

        let result = allocate_job(
            &AllocationInput {
                time_log: Some("A - 2"),
                job_amount: Decimal::MAX,
                tip_amount: Decimal::ZERO,
            },
            &config,
        );

        assert!(result.is_ok());
    }
}
