//! Rule engine for multi-key dispatching.
//!
//! Composes dispatching rules into a single lexicographic comparator:
//! rules are evaluated in order and the first non-tie decides.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Task;

/// How ties are broken after every rule is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the input order (the sort is stable).
    #[default]
    InputOrder,
    /// Deterministic by task ID (lexicographic), independent of input order.
    ById,
}

/// A composable rule engine for task ranking.
///
/// Rules form a chain of tie-break keys, each strictly lower precedence
/// than the one before it. Tasks left tied by every rule keep their input
/// order unless a [`TieBreaker::ById`] is configured.
///
/// # Example
/// ```
/// use slotplan::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityClass)
///     .with_rule(rules::ImportanceRank)
///     .with_rule(rules::Edd);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
            epsilon: 1e-9,
        }
    }

    /// The shipped ranking policy: priority class, then importance, then
    /// earliest deadline.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(super::rules::PriorityClass)
            .with_rule(super::rules::ImportanceRank)
            .with_rule(super::rules::Edd)
    }

    /// Appends a rule as the next (lower-precedence) tie-break key.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts tasks by priority (highest priority first).
    ///
    /// Returns indices into the original task slice. The sort is stable:
    /// full ties keep their relative input order, so permuting tied input
    /// is the only way to change the result.
    pub fn sort_indices(&self, tasks: &[Task], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&tasks[a], &tasks[b], context));
        indices
    }

    /// Evaluates a single task and returns one score per rule.
    pub fn evaluate(&self, task: &Task, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(task, context))
            .collect()
    }

    fn compare(&self, a: &Task, b: &Task, context: &SchedulingContext) -> std::cmp::Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        match &self.tie_breaker {
            TieBreaker::InputOrder => std::cmp::Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::{Importance, Priority};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_task(id: &str, priority: Priority, importance: Importance, deadline: NaiveDate) -> Task {
        Task::new(id, format!("Task {id}"), 30, deadline)
            .with_priority(priority)
            .with_importance(importance)
    }

    #[test]
    fn test_priority_class_dominates() {
        let d = date(2024, 6, 10);
        let tasks = vec![
            make_task("soft", Priority::SoftDeadline, Importance::Asap, date(2024, 6, 4)),
            make_task("asap", Priority::Asap, Importance::Low, d),
        ];
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard();

        let indices = engine.sort_indices(&tasks, &ctx);
        // Priority class outranks both importance and deadline.
        assert_eq!(tasks[indices[0]].id, "asap");
        assert_eq!(tasks[indices[1]].id, "soft");
    }

    #[test]
    fn test_importance_breaks_priority_ties() {
        let d = date(2024, 6, 10);
        let tasks = vec![
            make_task("avg", Priority::HardDeadline, Importance::Average, d),
            make_task("high", Priority::HardDeadline, Importance::High, date(2024, 6, 20)),
        ];
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard();

        let indices = engine.sort_indices(&tasks, &ctx);
        // Same class → importance decides, even against an earlier deadline.
        assert_eq!(tasks[indices[0]].id, "high");
    }

    #[test]
    fn test_deadline_breaks_remaining_ties() {
        let tasks = vec![
            make_task("late", Priority::HardDeadline, Importance::High, date(2024, 6, 20)),
            make_task("early", Priority::HardDeadline, Importance::High, date(2024, 6, 5)),
        ];
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard();

        let indices = engine.sort_indices(&tasks, &ctx);
        assert_eq!(tasks[indices[0]].id, "early");
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let d = date(2024, 6, 10);
        let tasks = vec![
            make_task("first", Priority::SoftDeadline, Importance::Average, d),
            make_task("second", Priority::SoftDeadline, Importance::Average, d),
        ];
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard();

        let indices = engine.sort_indices(&tasks, &ctx);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let d = date(2024, 6, 10);
        let tasks = vec![
            make_task("b", Priority::SoftDeadline, Importance::Average, d),
            make_task("a", Priority::SoftDeadline, Importance::Average, d),
        ];
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard().with_final_tie_breaker(TieBreaker::ById);

        let indices = engine.sort_indices(&tasks, &ctx);
        assert_eq!(tasks[indices[0]].id, "a");
    }

    #[test]
    fn test_permutation_invariance() {
        let tasks = vec![
            make_task("n", Priority::NoDeadline, Importance::Low, date(2024, 7, 1)),
            make_task("a", Priority::Asap, Importance::Asap, date(2024, 6, 5)),
            make_task("h", Priority::HardDeadline, Importance::High, date(2024, 6, 5)),
        ];
        let mut permuted = tasks.clone();
        permuted.rotate_left(1);

        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard();

        let order: Vec<&str> = engine
            .sort_indices(&tasks, &ctx)
            .into_iter()
            .map(|i| tasks[i].id.as_str())
            .collect();
        let order_permuted: Vec<&str> = engine
            .sort_indices(&permuted, &ctx)
            .into_iter()
            .map(|i| permuted[i].id.as_str())
            .collect();
        assert_eq!(order, order_permuted);
        assert_eq!(order, vec!["a", "h", "n"]);
    }

    #[test]
    fn test_empty_tasks() {
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard();
        assert!(engine.sort_indices(&[], &ctx).is_empty());
    }

    #[test]
    fn test_evaluate_scores() {
        let task = make_task(
            "t",
            Priority::SoftDeadline,
            Importance::High,
            date(2024, 6, 8),
        );
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::standard();

        let scores = engine.evaluate(&task, &ctx);
        assert_eq!(scores.len(), 3);
        assert!((scores[0] - 2.0).abs() < 1e-10); // SoftDeadline rank
        assert!((scores[1] - 1.0).abs() < 1e-10); // High rank
        assert!((scores[2] - 5.0).abs() < 1e-10); // 5 days out
    }

    #[test]
    fn test_empty_engine_keeps_input_order() {
        let d = date(2024, 6, 10);
        let tasks = vec![
            make_task("x", Priority::NoDeadline, Importance::Low, d),
            make_task("y", Priority::Asap, Importance::Asap, d),
        ];
        let ctx = SchedulingContext::at_date(date(2024, 6, 3));
        let engine = RuleEngine::new();

        assert_eq!(engine.sort_indices(&tasks, &ctx), vec![0, 1]);
    }

    #[test]
    fn test_debug_lists_rule_names() {
        let engine = RuleEngine::new().with_rule(rules::Edd);
        let dbg = format!("{engine:?}");
        assert!(dbg.contains("EDD"));
    }
}
