//! Dispatching rules and rule engine for task ranking.
//!
//! The allocator orders competing tasks with a chain of dispatching rules
//! evaluated sequentially: compare by the first rule, fall through to the
//! next on ties. [`RuleEngine::standard`] is the shipped policy — priority
//! class, then importance, then earliest deadline.
//!
//! # Usage
//!
//! ```
//! use slotplan::dispatching::{RuleEngine, SchedulingContext};
//! use slotplan::dispatching::rules;
//! use chrono::NaiveDate;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::PriorityClass)
//!     .with_rule(rules::Edd);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let context = SchedulingContext::at_date(today);
//! // let order = engine.sort_indices(&tasks, &context);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first).
/// This follows the academic convention where EDD = earliest due date first.
pub type RuleScore = f64;

/// A dispatching rule that evaluates task priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for tasks that should be scheduled first.
///
/// # Reference
/// Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY_CLASS", "EDD").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a task given the scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, task: &Task, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
