//! Working-day slot grid.
//!
//! The grid is the canonical ordered sequence of half-hour slot labels for
//! one working day, derived from a `(start_hour, end_hour)` pair. Labels use
//! an unpadded 24-hour hour: `9:00`, `9:30`, ..., `16:30`.
//!
//! # Time Model
//! Slots are labels, not instants. The allocator only needs their order and
//! count; calendar dates carry the rest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes per slot. The grid is fixed at half-hour granularity.
pub const SLOT_MINUTES: u32 = 30;

/// Rejected slot grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid slot grid bounds {start_hour}..{end_hour}: end hour must be greater than start hour and at most 24")]
pub struct InvalidGridError {
    /// Requested start hour.
    pub start_hour: u32,
    /// Requested end hour.
    pub end_hour: u32,
}

/// The slot grid for one working day.
///
/// Covers `[start_hour, end_hour)` in half-hour steps. The default working
/// day is 9..17, sixteen slots.
///
/// # Example
///
/// ```
/// use slotplan::models::SlotGrid;
///
/// let grid = SlotGrid::default();
/// assert_eq!(grid.slot_count(), 16);
/// assert_eq!(grid.labels()[0], "9:00");
/// assert_eq!(grid.labels()[15], "16:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    /// First hour of the working day (inclusive).
    start_hour: u32,
    /// Last hour of the working day (exclusive).
    end_hour: u32,
}

impl SlotGrid {
    /// Creates a grid covering `[start_hour, end_hour)`.
    ///
    /// Fails with [`InvalidGridError`] when `end_hour <= start_hour` or
    /// `end_hour > 24`. An empty grid is never produced silently.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, InvalidGridError> {
        if end_hour <= start_hour || end_hour > 24 {
            return Err(InvalidGridError {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// First hour of the working day.
    #[inline]
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Last hour of the working day (exclusive).
    #[inline]
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Number of slots in one day: two per hour.
    #[inline]
    pub fn slot_count(&self) -> usize {
        ((self.end_hour - self.start_hour) * 2) as usize
    }

    /// The ordered slot labels for one day: `"9:00", "9:30", "10:00", ...`.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.slot_count());
        for hour in self.start_hour..self.end_hour {
            labels.push(format!("{hour}:00"));
            labels.push(format!("{hour}:30"));
        }
        labels
    }

    /// Slots needed for a duration, rounded up to the next slot boundary.
    ///
    /// A 31-minute task takes two slots. Rounding up is deliberate policy;
    /// there is no fractional-slot packing.
    #[inline]
    pub fn slots_needed(&self, duration_minutes: u32) -> usize {
        duration_minutes.div_ceil(SLOT_MINUTES) as usize
    }
}

impl Default for SlotGrid {
    /// The default 9..17 working day.
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}
