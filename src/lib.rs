//! Day-planner slot allocation.
//!
//! Ranks an unordered set of tasks and packs them, first-fit, into
//! half-hour calendar slots across one or more days. The result is a
//! conflict-free [`models::Schedule`]: date → slot label → task.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`models::Task`], [`models::SlotGrid`],
//!   [`models::Schedule`]
//! - **`dispatching`**: Ranking rules and the sequential rule engine
//! - **`scheduler`**: The greedy allocator and schedule KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, empty titles,
//!   zero durations)
//!
//! # Scheduling Model
//!
//! A run is a pure function of the task set, an explicit reference date,
//! and the scheduler configuration. Schedules are recomputed from scratch
//! on every task-set change; nothing is updated incrementally and slots
//! are never reassigned within a run.
//!
//! ```
//! use slotplan::models::{Importance, Priority, Task};
//! use slotplan::scheduler::SlotScheduler;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let deadline = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
//!
//! let tasks = vec![
//!     Task::new("review", "Review the quarterly plan", 60, deadline)
//!         .with_priority(Priority::HardDeadline)
//!         .with_importance(Importance::High),
//!     Task::new("standup", "Prepare standup notes", 30, today)
//!         .with_priority(Priority::Asap)
//!         .with_importance(Importance::Asap),
//! ];
//!
//! let schedule = SlotScheduler::new().schedule(&tasks, today)?;
//! assert_eq!(schedule.task_at(today, "9:00").unwrap().id, "standup");
//! assert_eq!(schedule.task_at(today, "9:30").unwrap().id, "review");
//! # Ok::<(), slotplan::scheduler::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
