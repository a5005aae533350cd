//! Weekly schedule (solution) model.
//!
//! A weekly schedule maps every (day, shift) pair to the ordered list
//! of employee names assigned there. Order within a shift reflects
//! assignment order (preference-pass placements before backfill) and is
//! presentational only. Staffing shortfalls detected during backfill
//! are carried on the schedule as diagnostics rather than failing the
//! run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Day, Shift, StaffingLimits};

/// A complete weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Assigned names per (day, shift), in assignment order.
    days: BTreeMap<Day, BTreeMap<Shift, Vec<String>>>,
    /// Shifts left under minimum staffing after backfill.
    pub shortfalls: Vec<Shortfall>,
}

/// A (day, shift) pair that could not reach minimum staffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// Day of the under-staffed shift.
    pub day: Day,
    /// The under-staffed shift.
    pub shift: Shift,
    /// Employees actually assigned.
    pub assigned: usize,
    /// The minimum that could not be met.
    pub required: usize,
}

impl WeeklySchedule {
    /// Creates an empty schedule with every (day, shift) slot present.
    pub fn new() -> Self {
        let mut days = BTreeMap::new();
        for day in Day::ALL {
            let mut shifts = BTreeMap::new();
            for shift in Shift::ALL {
                shifts.insert(shift, Vec::new());
            }
            days.insert(day, shifts);
        }
        Self {
            days,
            shortfalls: Vec::new(),
        }
    }

    /// Appends an employee name to a shift's assignment list.
    pub fn add_assignment(&mut self, day: Day, shift: Shift, name: impl Into<String>) {
        if let Some(slot) = self.days.get_mut(&day).and_then(|s| s.get_mut(&shift)) {
            slot.push(name.into());
        }
    }

    /// Records a staffing shortfall.
    pub fn add_shortfall(&mut self, shortfall: Shortfall) {
        self.shortfalls.push(shortfall);
    }

    /// Names assigned to a (day, shift), in assignment order.
    pub fn assigned(&self, day: Day, shift: Shift) -> &[String] {
        self.days
            .get(&day)
            .and_then(|s| s.get(&shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of employees assigned to a (day, shift).
    pub fn count(&self, day: Day, shift: Shift) -> usize {
        self.assigned(day, shift).len()
    }

    /// The shift an employee works on `day`, if any.
    pub fn shift_for(&self, day: Day, name: &str) -> Option<Shift> {
        Shift::ALL
            .into_iter()
            .find(|&shift| self.assigned(day, shift).iter().any(|n| n == name))
    }

    /// Number of days an employee appears in the schedule.
    pub fn days_for(&self, name: &str) -> usize {
        Day::ALL
            .into_iter()
            .filter(|&day| self.shift_for(day, name).is_some())
            .count()
    }

    /// Total assignments across the week.
    pub fn total_assignments(&self) -> usize {
        self.days
            .values()
            .flat_map(|shifts| shifts.values())
            .map(Vec::len)
            .sum()
    }

    /// Whether every (day, shift) meets the minimum staffing level.
    pub fn is_fully_staffed(&self, limits: &StaffingLimits) -> bool {
        Day::ALL.into_iter().all(|day| {
            Shift::ALL
                .into_iter()
                .all(|shift| self.count(day, shift) >= limits.min_per_shift)
        })
    }

    /// Whether any shortfall was recorded.
    pub fn has_shortfalls(&self) -> bool {
        !self.shortfalls.is_empty()
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> WeeklySchedule {
        let mut s = WeeklySchedule::new();
        s.add_assignment(Day::Monday, Shift::Morning, "Alice");
        s.add_assignment(Day::Monday, Shift::Morning, "Bob");
        s.add_assignment(Day::Monday, Shift::Evening, "Eve");
        s.add_assignment(Day::Tuesday, Shift::Morning, "Alice");
        s
    }

    #[test]
    fn test_empty_schedule_has_all_slots() {
        let s = WeeklySchedule::new();
        for day in Day::ALL {
            for shift in Shift::ALL {
                assert_eq!(s.count(day, shift), 0);
            }
        }
        assert_eq!(s.total_assignments(), 0);
        assert!(!s.has_shortfalls());
    }

    #[test]
    fn test_assignment_order_preserved() {
        let s = sample_schedule();
        assert_eq!(s.assigned(Day::Monday, Shift::Morning), ["Alice", "Bob"]);
        assert_eq!(s.count(Day::Monday, Shift::Morning), 2);
        assert_eq!(s.count(Day::Monday, Shift::Afternoon), 0);
    }

    #[test]
    fn test_shift_for() {
        let s = sample_schedule();
        assert_eq!(s.shift_for(Day::Monday, "Eve"), Some(Shift::Evening));
        assert_eq!(s.shift_for(Day::Monday, "Alice"), Some(Shift::Morning));
        assert_eq!(s.shift_for(Day::Wednesday, "Alice"), None);
        assert_eq!(s.shift_for(Day::Monday, "Nobody"), None);
    }

    #[test]
    fn test_days_for() {
        let s = sample_schedule();
        assert_eq!(s.days_for("Alice"), 2);
        assert_eq!(s.days_for("Eve"), 1);
        assert_eq!(s.days_for("Nobody"), 0);
    }

    #[test]
    fn test_total_assignments() {
        assert_eq!(sample_schedule().total_assignments(), 4);
    }

    #[test]
    fn test_is_fully_staffed() {
        let limits = StaffingLimits::new(5, 1, 3);
        let mut s = WeeklySchedule::new();
        assert!(!s.is_fully_staffed(&limits));
        for day in Day::ALL {
            for shift in Shift::ALL {
                s.add_assignment(day, shift, "Solo");
            }
        }
        assert!(s.is_fully_staffed(&limits));
    }

    #[test]
    fn test_shortfall_recording() {
        let mut s = WeeklySchedule::new();
        s.add_shortfall(Shortfall {
            day: Day::Sunday,
            shift: Shift::Evening,
            assigned: 1,
            required: 2,
        });
        assert!(s.has_shortfalls());
        assert_eq!(s.shortfalls.len(), 1);
        assert_eq!(s.shortfalls[0].day, Day::Sunday);
    }

    #[test]
    fn test_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: WeeklySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
