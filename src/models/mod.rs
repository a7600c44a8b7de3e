//! Scheduling domain models.
//!
//! Core data types for the day-planner allocation problem and its solution:
//! what to schedule ([`Task`]), where slots come from ([`SlotGrid`]), and
//! what a run produces ([`Schedule`]).

mod grid;
mod schedule;
mod task;

pub use grid::{InvalidGridError, SlotGrid, SLOT_MINUTES};
pub use schedule::{DayPlan, Schedule};
pub use task::{Importance, Priority, Task};
