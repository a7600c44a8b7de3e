//! Schedule (solution) model.
//!
//! A schedule is the complete date → slot label → task assignment produced
//! by one scheduling run. It is a derived view: recomputed from scratch on
//! every task-set change, never updated incrementally.
//!
//! # Invariants
//! Within one run, slots are only ever assigned, never reassigned. A task
//! occupying N slots appears identically under N consecutive slot keys.
//!
//! Map iteration order of the inner slot keys is lexicographic; positional
//! order within a day comes from [`SlotGrid::labels`](super::SlotGrid::labels).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::Task;

/// Slot assignments for one calendar date: slot label → occupying task.
pub type DayPlan = BTreeMap<String, Task>;

/// A complete schedule: calendar date → slot label → occupying task.
///
/// Serializes with ISO `YYYY-MM-DD` date keys and `H:MM` slot-label keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-date slot assignments.
    pub days: BTreeMap<NaiveDate, DayPlan>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `task` under `label` on `date`.
    ///
    /// Callers must only assign free slots; the allocator never revisits an
    /// occupied one.
    pub fn assign(&mut self, date: NaiveDate, label: impl Into<String>, task: Task) {
        self.days.entry(date).or_default().insert(label.into(), task);
    }

    /// The task occupying a slot, if any.
    pub fn task_at(&self, date: NaiveDate, label: &str) -> Option<&Task> {
        self.days.get(&date).and_then(|day| day.get(label))
    }

    /// Whether a slot is unoccupied.
    #[inline]
    pub fn is_free(&self, date: NaiveDate, label: &str) -> bool {
        self.task_at(date, label).is_none()
    }

    /// The assignments for one date, if any slot on it is occupied.
    pub fn day(&self, date: NaiveDate) -> Option<&DayPlan> {
        self.days.get(&date)
    }

    /// Dates with at least one occupied slot, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Number of dates with at least one occupied slot.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of occupied slots across all dates.
    pub fn slot_count(&self) -> usize {
        self.days.values().map(|day| day.len()).sum()
    }

    /// Number of distinct tasks placed.
    pub fn task_count(&self) -> usize {
        let mut ids = HashSet::new();
        for day in self.days.values() {
            for task in day.values() {
                ids.insert(task.id.as_str());
            }
        }
        ids.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Every `(date, slot label)` a task occupies, in date order.
    pub fn placements_for_task(&self, task_id: &str) -> Vec<(NaiveDate, &str)> {
        let mut placements = Vec::new();
        for (&date, day) in &self.days {
            for (label, task) in day {
                if task.id == task_id {
                    placements.push((date, label.as_str()));
                }
            }
        }
        placements
    }

    /// The last date a task occupies a slot on, if placed.
    pub fn completion_date(&self, task_id: &str) -> Option<NaiveDate> {
        self.days
            .iter()
            .filter(|(_, day)| day.values().any(|t| t.id == task_id))
            .map(|(&date, _)| date)
            .max()
    }
}
