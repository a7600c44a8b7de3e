//! First-fit greedy slot allocator.
//!
//! # Algorithm
//!
//! 1. Validate the task set; reject malformed input before placement.
//! 2. Rank tasks with the rule engine (priority class → importance →
//!    earliest deadline by default).
//! 3. Fold the ranked sequence over a `(date, slot index)` cursor: scan the
//!    day's grid from the cursor for the first run of enough consecutive
//!    free slots, spilling to the next calendar day when the rest of the
//!    day cannot fit the task.
//!
//! Single-pass, non-backtracking, first-fit: once the cursor passes a slot,
//! that slot is never revisited for later tasks. Earlier-ranked tasks always
//! receive earlier-or-equal slots than later-ranked ones.
//!
//! # Complexity
//! O(n * d * s) where n=tasks, d=days scanned, s=slots/day.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, trace};

use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::models::{Schedule, SlotGrid, Task};
use crate::validation::{self, ValidationError};

/// Failure of a scheduling run.
///
/// Either a complete [`Schedule`] is produced or the call fails; there is
/// no partial-result mode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The task set failed structural validation.
    #[error("task input failed validation with {} error(s)", .0.len())]
    InvalidInput(Vec<ValidationError>),
    /// No feasible run of free slots within the lookahead ceiling.
    ///
    /// Raised for tasks whose slot requirement exceeds a full day (they can
    /// never fit) and when the day-advancement loop exhausts its ceiling.
    #[error("task '{task_id}' needs {slots_needed} slots but found no free run within {days_scanned} day(s)")]
    Unschedulable {
        /// The task that could not be placed.
        task_id: String,
        /// Slots the task requires.
        slots_needed: usize,
        /// Days scanned before giving up.
        days_scanned: u32,
    },
}

/// Placement cursor: the day and slot index the next scan starts from.
///
/// Threaded through the placement fold as an explicit accumulator; the
/// allocator keeps no mutable state between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    date: NaiveDate,
    slot_index: usize,
}

/// First-fit greedy slot allocator.
///
/// A pure function of `(tasks, reference_date)` plus its configuration:
/// the slot grid, the ranking engine, and the lookahead ceiling.
///
/// # Example
///
/// ```
/// use slotplan::scheduler::SlotScheduler;
/// use slotplan::models::{Priority, Task};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let tasks = vec![
///     Task::new("t1", "Standup prep", 30, today).with_priority(Priority::Asap),
/// ];
///
/// let scheduler = SlotScheduler::new();
/// let schedule = scheduler.schedule(&tasks, today).unwrap();
/// assert_eq!(schedule.task_at(today, "9:00").unwrap().id, "t1");
/// ```
#[derive(Debug, Clone)]
pub struct SlotScheduler {
    grid: SlotGrid,
    rule_engine: RuleEngine,
    max_lookahead_days: u32,
}

/// Per-task ceiling on days scanned before a placement fails.
pub const DEFAULT_MAX_LOOKAHEAD_DAYS: u32 = 365;

impl SlotScheduler {
    /// Creates a scheduler with the default grid, ranking, and lookahead.
    pub fn new() -> Self {
        Self {
            grid: SlotGrid::default(),
            rule_engine: RuleEngine::standard(),
            max_lookahead_days: DEFAULT_MAX_LOOKAHEAD_DAYS,
        }
    }

    /// Sets the slot grid.
    pub fn with_grid(mut self, grid: SlotGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets a rule engine for task ordering.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Sets the per-task ceiling on days scanned.
    pub fn with_max_lookahead_days(mut self, days: u32) -> Self {
        self.max_lookahead_days = days;
        self
    }

    /// The slot grid this scheduler places onto.
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Schedules tasks into slots, starting at `reference_date`.
    ///
    /// # Algorithm
    /// 1. Validate the task set.
    /// 2. Rank via the rule engine (stable on full ties).
    /// 3. Place each task at the first run of enough consecutive free slots
    ///    at or after the cursor, advancing the cursor past it. A day that
    ///    cannot fit the task advances the cursor to the next date at index
    ///    zero. The cursor never moves backward, so freed gaps behind it
    ///    are not reused within a run.
    pub fn schedule(
        &self,
        tasks: &[Task],
        reference_date: NaiveDate,
    ) -> Result<Schedule, ScheduleError> {
        validation::validate_tasks(tasks).map_err(ScheduleError::InvalidInput)?;

        let context = SchedulingContext::at_date(reference_date);
        let order = self.rule_engine.sort_indices(tasks, &context);
        let labels = self.grid.labels();

        debug!(
            task_count = tasks.len(),
            %reference_date,
            "starting scheduling run"
        );

        let mut schedule = Schedule::new();
        let mut cursor = Cursor {
            date: reference_date,
            slot_index: 0,
        };

        for &index in &order {
            cursor = self.place(&mut schedule, &tasks[index], cursor, &labels)?;
        }

        Ok(schedule)
    }

    /// Places one task and returns the advanced cursor.
    fn place(
        &self,
        schedule: &mut Schedule,
        task: &Task,
        cursor: Cursor,
        labels: &[String],
    ) -> Result<Cursor, ScheduleError> {
        let slots_needed = self.grid.slots_needed(task.duration_minutes);

        let mut date = cursor.date;
        let mut from = cursor.slot_index;

        for _ in 0..self.max_lookahead_days {
            if let Some(end) = find_free_run(schedule, date, labels, from, slots_needed) {
                let start = end + 1 - slots_needed;
                for label in &labels[start..=end] {
                    schedule.assign(date, label.clone(), task.clone());
                }
                trace!(
                    task_id = %task.id,
                    %date,
                    start_label = %labels[start],
                    slots = slots_needed,
                    "placed task"
                );
                return Ok(Cursor {
                    date,
                    slot_index: end + 1,
                });
            }

            // Rest of this day cannot fit the task: spill to the next date.
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
            from = 0;
            trace!(task_id = %task.id, %date, "day full, advancing");
        }

        Err(ScheduleError::Unschedulable {
            task_id: task.id.clone(),
            slots_needed,
            days_scanned: self.max_lookahead_days,
        })
    }
}

impl Default for SlotScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the first run of `slots_needed` consecutive free slots on `date`,
/// scanning from index `from`. Returns the run's end index.
///
/// The consecutive-free counter resets at every occupied slot; the scan
/// never looks backward or around an occupied slot.
fn find_free_run(
    schedule: &Schedule,
    date: NaiveDate,
    labels: &[String],
    from: usize,
    slots_needed: usize,
) -> Option<usize> {
    let mut run = 0;
    for (index, label) in labels.iter().enumerate().skip(from) {
        if schedule.is_free(date, label) {
            run += 1;
            if run == slots_needed {
                return Some(index);
            }
        } else {
            run = 0;
        }
    }
    None
}
