//! Input validation for scheduling runs.
//!
//! Checks structural integrity of the task set before placement. Detects:
//! - Duplicate task IDs
//! - Empty titles
//! - Non-positive durations
//!
//! The allocator assumes a validated input set; [`validate_tasks`] is the
//! gate that keeps malformed tasks from being silently mis-scheduled.

use crate::models::Task;
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has an empty title.
    EmptyTitle,
    /// A task has a zero-minute duration.
    InvalidDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the task set for a scheduling run.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. Every title is non-empty
/// 3. Every duration is at least one minute
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for task in tasks {
        if !ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.title.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                format!("Task '{}' has an empty title", task.id),
            ));
        }

        if task.duration_minutes == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Task '{}' has a zero-minute duration", task.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("t1", "Draft slides", 60, date(2024, 6, 10)),
            Task::new("t2", "Review budget", 30, date(2024, 6, 12)),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_tasks(&sample_tasks()).is_ok());
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(validate_tasks(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let tasks = vec![
            Task::new("t1", "First", 30, date(2024, 6, 10)),
            Task::new("t1", "Second", 30, date(2024, 6, 10)),
        ];

        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_title() {
        let tasks = vec![Task::new("t1", "", 30, date(2024, 6, 10))];

        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTitle));
    }

    #[test]
    fn test_zero_duration() {
        let tasks = vec![Task::new("t1", "Instant", 0, date(2024, 6, 10))];

        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidDuration));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let tasks = vec![
            Task::new("t1", "", 0, date(2024, 6, 10)),
            Task::new("t1", "Dup", 30, date(2024, 6, 10)),
        ];

        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_error_display() {
        let tasks = vec![Task::new("t1", "", 30, date(2024, 6, 10))];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors[0].to_string(), "Task 't1' has an empty title");
    }
}
