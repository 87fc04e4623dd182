//! Split rule selection.
//!
//! The crew on a job is reduced to a [`CrewShape`], and the first matching
//! rule of the decision tree is chosen from it:
//!
//! 1. one worker: paid their own level percentage
//! 2. no technician among several workers: rejected
//! 3. one trainee and one technician
//! 4. two technicians with equal hours and levels
//! 5. two technicians with equal hours and different levels
//! 6. anything else: technicians split by hours

use crate::error::{EngineError, EngineResult};
use crate::models::SplitRule;

/// The features of a job's crew that decide the split rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewShape {
    /// Employees with non-zero hours.
    pub workers: usize,
    /// Workers at the trainee level.
    pub trainees: usize,
    /// Workers at any other level.
    pub technicians: usize,
    /// For a technician pair: whether both logged the same hours.
    pub equal_hours: bool,
    /// For a technician pair: whether both have the same level code.
    pub equal_levels: bool,
}

/// Selects the split rule for a crew.
///
/// Returns [`EngineError::NoTechnicians`] when more than one employee, or
/// nobody on the roster, worked the job and none of them is a technician.
///
/// # Examples
///
/// ```
/// use job_split_engine::calculation::{CrewShape, select_split_rule};
/// use job_split_engine::models::SplitRule;
///
/// let crew = CrewShape {
///     workers: 2,
///     trainees: 1,
///     technicians: 1,
///     equal_hours: false,
///     equal_levels: false,
/// };
/// assert_eq!(select_split_rule(&crew).unwrap(), SplitRule::TraineeWithTechnician);
/// ```
pub fn select_split_rule(crew: &CrewShape) -> EngineResult<SplitRule> {
    match (crew.workers, crew.trainees, crew.technicians) {
        (1, _, _) => Ok(SplitRule::SingleWorker),
        (_, trainees, 0) => Err(EngineError::NoTechnicians { trainees }),
        (2, 1, 1) => Ok(SplitRule::TraineeWithTechnician),
        (_, _, 2) if crew.equal_hours && crew.equal_levels => Ok(SplitRule::EvenTechnicianPair),
        (_, _, 2) if crew.equal_hours => Ok(SplitRule::SeniorityTechnicianPair),
        _ => Ok(SplitRule::HoursProportional),
    }
}
