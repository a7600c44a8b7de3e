//! Greedy slot allocation and KPI evaluation.
//!
//! Provides the first-fit slot allocator and schedule quality metrics.
//!
//! # Algorithm
//!
//! [`SlotScheduler`] ranks tasks with the dispatching rule engine, then
//! packs each one into the earliest run of contiguous free slots, spilling
//! to the next calendar day when the current day is full. It is greedy and
//! non-backtracking: fast, deterministic, not optimal.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes quality metrics over a finished plan: days
//! used, slot utilization, on-time rate, and lateness against deadlines.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod greedy;
mod kpi;

pub use greedy::{ScheduleError, SlotScheduler, DEFAULT_MAX_LOOKAHEAD_DAYS};
pub use kpi::ScheduleKpi;
