//! Task model.
//!
//! A task is the unit of work handed to the allocator: a title, a duration
//! in minutes, an importance level, a priority/deadline class, and a
//! deadline date.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Importance level of a task.
///
/// Second-precedence ranking key, after [`Priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
    /// Must happen as soon as possible.
    Asap,
    High,
    Average,
    Low,
}

impl Importance {
    /// Ordering rank: lower ranks are scheduled first.
    pub fn rank(self) -> u8 {
        match self {
            Importance::Asap => 0,
            Importance::High => 1,
            Importance::Average => 2,
            Importance::Low => 3,
        }
    }
}

/// Priority/deadline class of a task.
///
/// First-precedence ranking key. Distinct from [`Importance`] even though
/// both have an `Asap` variant: priority classifies how binding the
/// deadline is, importance how much the task matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Must happen as soon as possible, ahead of any deadline class.
    Asap,
    /// The deadline must be met.
    HardDeadline,
    /// The deadline is a target, not a commitment.
    SoftDeadline,
    /// No meaningful deadline.
    NoDeadline,
}

impl Priority {
    /// Ordering rank: lower ranks are scheduled first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Asap => 0,
            Priority::HardDeadline => 1,
            Priority::SoftDeadline => 2,
            Priority::NoDeadline => 3,
        }
    }
}

/// A task to be placed on the slot grid.
///
/// IDs are caller-assigned and must be unique across one scheduling run;
/// uniqueness is the only property the allocator relies on. Durations are
/// in whole minutes and must be positive. Both constraints are checked by
/// [`crate::validation::validate_tasks`] before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title. Must be non-empty.
    pub title: String,
    /// Duration in minutes. Must be >= 1.
    pub duration_minutes: u32,
    /// Importance level (secondary ranking key).
    pub importance: Importance,
    /// Priority/deadline class (primary ranking key).
    pub priority: Priority,
    /// Deadline date (tertiary ranking key). No time-of-day component.
    pub deadline: NaiveDate,
}

impl Task {
    /// Creates a task with `Average` importance and `NoDeadline` priority.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_minutes: u32,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            importance: Importance::Average,
            priority: Priority::NoDeadline,
            deadline,
        }
    }

    /// Sets the importance level.
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    /// Sets the priority class.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
