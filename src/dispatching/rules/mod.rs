//! Built-in dispatching rules.
//!
//! The shipped ranking is lexicographic over three keys, one rule each:
//!
//! 1. [`PriorityClass`] — deadline class (`Asap` ... `NoDeadline`)
//! 2. [`ImportanceRank`] — importance level (`Asap` ... `Low`)
//! 3. [`Edd`] — earliest deadline date
//!
//! # Score Convention
//! All rules return lower scores for higher priority tasks.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Task;

/// Priority class rank.
///
/// Orders `Asap < HardDeadline < SoftDeadline < NoDeadline`. The primary
/// key of the shipped policy.
#[derive(Debug, Clone, Copy)]
pub struct PriorityClass;

impl DispatchingRule for PriorityClass {
    fn name(&self) -> &'static str {
        "PRIORITY_CLASS"
    }

    fn evaluate(&self, task: &Task, _context: &SchedulingContext) -> RuleScore {
        f64::from(task.priority.rank())
    }

    fn description(&self) -> &'static str {
        "Priority/Deadline Class"
    }
}

/// Importance rank.
///
/// Orders `Asap < High < Average < Low`. Breaks priority-class ties.
#[derive(Debug, Clone, Copy)]
pub struct ImportanceRank;

impl DispatchingRule for ImportanceRank {
    fn name(&self) -> &'static str {
        "IMPORTANCE"
    }

    fn evaluate(&self, task: &Task, _context: &SchedulingContext) -> RuleScore {
        f64::from(task.importance.rank())
    }

    fn description(&self) -> &'static str {
        "Importance Level"
    }
}

/// Earliest Due Date.
///
/// Orders tasks by deadline, earlier date first. Scored as the signed day
/// offset from the reference date, so deadlines already in the past rank
/// ahead of future ones.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Edd;

impl DispatchingRule for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, task: &Task, context: &SchedulingContext) -> RuleScore {
        (task.deadline - context.reference_date).num_days() as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Due Date"
    }
}
