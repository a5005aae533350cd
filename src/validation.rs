//! Input validation for rostering runs.
//!
//! Checks structural integrity of the roster and limits before
//! scheduling. Detects:
//! - Duplicate employee names
//! - An empty roster
//! - Inconsistent or degenerate staffing limits
//!
//! All issues are collected and reported together rather than failing
//! on the first.

use std::collections::HashSet;

use crate::models::{Employee, StaffingLimits};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same name.
    DuplicateName,
    /// The roster has no employees.
    EmptyRoster,
    /// The staffing limits are contradictory or degenerate.
    InvalidLimits,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster and its staffing limits.
///
/// Checks:
/// 1. At least one employee on the roster
/// 2. No duplicate employee names
/// 3. `min_per_shift <= max_per_shift`
/// 4. `max_per_shift > 0`
/// 5. `max_days_per_week` in 1..=7
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(employees: &[Employee], limits: &StaffingLimits) -> ValidationResult {
    let mut errors = Vec::new();

    if employees.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster has no employees",
        ));
    }

    let mut names = HashSet::new();
    for emp in employees {
        if !names.insert(emp.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", emp.name),
            ));
        }
    }

    if limits.min_per_shift > limits.max_per_shift {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLimits,
            format!(
                "min_per_shift ({}) exceeds max_per_shift ({})",
                limits.min_per_shift, limits.max_per_shift
            ),
        ));
    }
    if limits.max_per_shift == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLimits,
            "max_per_shift must be at least 1",
        ));
    }
    if limits.max_days_per_week == 0 || limits.max_days_per_week > 7 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLimits,
            format!(
                "max_days_per_week ({}) must be in 1..=7",
                limits.max_days_per_week
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
