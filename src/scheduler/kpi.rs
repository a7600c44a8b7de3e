//! Schedule quality metrics (KPIs).
//!
//! Computes performance indicators from a completed schedule and its
//! input tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Day Count | Calendar days with at least one occupied slot |
//! | Slots Filled | Total occupied slots |
//! | Avg Utilization | Filled / (day count × slots per day) |
//! | On-Time Rate | Fraction of tasks finishing on or before their deadline |
//! | Total Lateness | Sum of days past deadline across late tasks |
//! | Max Lateness | Largest single delay in days |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Schedule, SlotGrid, Task};

/// Schedule performance indicators.
///
/// Lateness values are in whole calendar days.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Calendar days with at least one occupied slot.
    pub day_count: usize,
    /// Total occupied slots.
    pub slots_filled: usize,
    /// Average slot utilization across occupied days (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-day slot utilization.
    pub utilization_by_day: BTreeMap<NaiveDate, f64>,
    /// Fraction of placed tasks completing on or before their deadline.
    pub on_time_rate: f64,
    /// Sum of lateness (days past deadline) across late tasks.
    pub total_lateness_days: i64,
    /// Largest single lateness in days.
    pub max_lateness_days: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule, its input tasks, and the grid it was
    /// placed onto.
    pub fn calculate(schedule: &Schedule, tasks: &[Task], grid: &SlotGrid) -> Self {
        let mut total_lateness: i64 = 0;
        let mut max_lateness: i64 = 0;
        let mut on_time_count: usize = 0;
        let mut placed_tasks: usize = 0;

        for task in tasks {
            if let Some(completion) = schedule.completion_date(&task.id) {
                placed_tasks += 1;

                let lateness = (completion - task.deadline).num_days();
                if lateness > 0 {
                    total_lateness += lateness;
                    max_lateness = max_lateness.max(lateness);
                } else {
                    on_time_count += 1;
                }
            }
        }

        let day_slots = grid.slot_count();
        let utilization_by_day: BTreeMap<NaiveDate, f64> = schedule
            .days
            .iter()
            .map(|(&date, day)| (date, day.len() as f64 / day_slots as f64))
            .collect();

        let avg_utilization = if utilization_by_day.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_day.values().sum();
            sum / utilization_by_day.len() as f64
        };

        let on_time_rate = if placed_tasks == 0 {
            1.0
        } else {
            on_time_count as f64 / placed_tasks as f64
        };

        Self {
            day_count: schedule.day_count(),
            slots_filled: schedule.slot_count(),
            avg_utilization,
            utilization_by_day,
            on_time_rate,
            total_lateness_days: total_lateness,
            max_lateness_days: max_lateness,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_lateness_days: i64, min_utilization: f64) -> bool {
        self.max_lateness_days <= max_lateness_days && self.avg_utilization >= min_utilization
    }
}
