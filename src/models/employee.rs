//! Employee availability model.
//!
//! An employee carries an identity, a fixed shift preference, and the
//! mutable per-day assignment state for the week in progress. The model
//! answers "can this employee take a shift on day D" and performs the
//! guarded state transition when the engine assigns one.
//!
//! # Invariants
//!
//! - At most one shift per day: guaranteed by the map shape.
//! - Days worked equals the number of assigned days: `days_worked()` is
//!   derived from the map, so the counter cannot drift.
//! - Assignments only grow within a run; there is no unassign path.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{Day, Shift};

/// An employee on the weekly roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique name.
    pub name: String,
    /// Preferred shift, fixed at creation. The same shift every day.
    pub preferred_shift: Shift,
    /// Per-day assignments; a missing key means the day is unassigned.
    assignments: HashMap<Day, Shift>,
}

/// Rejected assignment: the requested transition would break an
/// availability invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// The employee already has a shift on this day.
    DayAlreadyAssigned { name: String, day: Day },
    /// The employee has reached the weekly day cap.
    WeeklyCapReached { name: String, cap: usize },
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentError::DayAlreadyAssigned { name, day } => {
                write!(f, "employee '{name}' is already assigned on {day}")
            }
            AssignmentError::WeeklyCapReached { name, cap } => {
                write!(f, "employee '{name}' has reached the weekly cap of {cap} days")
            }
        }
    }
}

impl std::error::Error for AssignmentError {}

impl Employee {
    /// Creates an employee with no assignments.
    pub fn new(name: impl Into<String>, preferred_shift: Shift) -> Self {
        Self {
            name: name.into(),
            preferred_shift,
            assignments: HashMap::new(),
        }
    }

    /// Whether the employee can take a shift on `day` under the given
    /// weekly day cap. Pure query, no side effect.
    pub fn can_work(&self, day: Day, max_days_per_week: usize) -> bool {
        !self.assignments.contains_key(&day) && self.assignments.len() < max_days_per_week
    }

    /// Records `shift` for `day`.
    ///
    /// Fails if the day already has an assignment or the weekly cap is
    /// reached; the employee's state is untouched on failure. Callers
    /// that check [`can_work`](Self::can_work) first never hit the
    /// error arm.
    pub fn assign(
        &mut self,
        day: Day,
        shift: Shift,
        max_days_per_week: usize,
    ) -> Result<(), AssignmentError> {
        if self.assignments.contains_key(&day) {
            return Err(AssignmentError::DayAlreadyAssigned {
                name: self.name.clone(),
                day,
            });
        }
        if self.assignments.len() >= max_days_per_week {
            return Err(AssignmentError::WeeklyCapReached {
                name: self.name.clone(),
                cap: max_days_per_week,
            });
        }
        self.assignments.insert(day, shift);
        Ok(())
    }

    /// The shift assigned on `day`, if any.
    pub fn shift_on(&self, day: Day) -> Option<Shift> {
        self.assignments.get(&day).copied()
    }

    /// Number of days with an assignment this week.
    pub fn days_worked(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the assignment on `day` matches the preference.
    pub fn prefers_assignment(&self, day: Day) -> bool {
        self.shift_on(day) == Some(self.preferred_shift)
    }
}
