//! Scheduling context for dispatching rule evaluation.

use chrono::NaiveDate;

/// State passed to dispatching rules during ranking.
///
/// Carries the explicit reference date ("today") a run is anchored to.
/// The library never reads the ambient clock; callers pass the anchor in,
/// which keeps every run replayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingContext {
    /// The date the scheduling run starts from.
    pub reference_date: NaiveDate,
}

impl SchedulingContext {
    /// Creates a context anchored at the given date.
    pub fn at_date(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }
}
