//! Roster quality metrics.
//!
//! Computes staffing indicators from a completed weekly schedule and
//! the roster it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Assignments | Employee-day placements across the week |
//! | Preference Rate | Fraction of assignments matching the preference |
//! | Coverage Rate | Fraction of (day, shift) slots at or above minimum |
//! | Shortfall Count | Slots left under minimum after backfill |
//! | Days by Employee | Per-employee days worked |

use std::collections::HashMap;

use crate::models::{Day, Employee, Shift, StaffingLimits, WeeklySchedule};

/// Staffing indicators for one weekly schedule.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Employee-day placements across the week.
    pub total_assignments: usize,
    /// Fraction of assignments matching the employee's preferred shift
    /// (0.0..1.0). Zero for an empty schedule.
    pub preference_rate: f64,
    /// Fraction of (day, shift) slots meeting minimum staffing (0.0..1.0).
    pub coverage_rate: f64,
    /// Slots left under minimum staffing.
    pub shortfall_count: usize,
    /// Days worked per employee.
    pub days_by_employee: HashMap<String, usize>,
}

impl RosterKpi {
    /// Computes KPIs from a schedule and its roster.
    pub fn calculate(
        schedule: &WeeklySchedule,
        employees: &[Employee],
        limits: &StaffingLimits,
    ) -> Self {
        let total_assignments = schedule.total_assignments();

        let mut preferred = 0usize;
        let mut days_by_employee = HashMap::new();
        for emp in employees {
            let days = schedule.days_for(&emp.name);
            days_by_employee.insert(emp.name.clone(), days);
            for day in Day::ALL {
                if schedule.shift_for(day, &emp.name) == Some(emp.preferred_shift) {
                    preferred += 1;
                }
            }
        }
        let preference_rate = if total_assignments > 0 {
            preferred as f64 / total_assignments as f64
        } else {
            0.0
        };

        let total_slots = Day::ALL.len() * Shift::ALL.len();
        let covered = Day::ALL
            .into_iter()
            .flat_map(|day| Shift::ALL.into_iter().map(move |shift| (day, shift)))
            .filter(|&(day, shift)| schedule.count(day, shift) >= limits.min_per_shift)
            .count();
        let coverage_rate = covered as f64 / total_slots as f64;

        Self {
            total_assignments,
            preference_rate,
            coverage_rate,
            shortfall_count: schedule.shortfalls.len(),
            days_by_employee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_employee_roster() -> Vec<Employee> {
        vec![
            Employee::new("Alice", Shift::Morning),
            Employee::new("Bob", Shift::Evening),
        ]
    }

    #[test]
    fn test_empty_schedule_kpi() {
        let employees = two_employee_roster();
        let schedule = WeeklySchedule::new();
        let kpi = RosterKpi::calculate(&schedule, &employees, &StaffingLimits::default());

        assert_eq!(kpi.total_assignments, 0);
        assert!((kpi.preference_rate - 0.0).abs() < 1e-10);
        assert!((kpi.coverage_rate - 0.0).abs() < 1e-10);
        assert_eq!(kpi.days_by_employee["Alice"], 0);
    }

    #[test]
    fn test_preference_rate() {
        let employees = two_employee_roster();
        let mut schedule = WeeklySchedule::new();
        schedule.add_assignment(Day::Monday, Shift::Morning, "Alice");
        schedule.add_assignment(Day::Monday, Shift::Morning, "Bob"); // off-preference
        schedule.add_assignment(Day::Tuesday, Shift::Evening, "Bob");

        let kpi = RosterKpi::calculate(&schedule, &employees, &StaffingLimits::default());
        assert_eq!(kpi.total_assignments, 3);
        // Alice Monday and Bob Tuesday match; Bob Monday does not.
        assert!((kpi.preference_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.days_by_employee["Bob"], 2);
    }

    #[test]
    fn test_coverage_rate() {
        let employees = two_employee_roster();
        let limits = StaffingLimits::new(5, 1, 3);
        let mut schedule = WeeklySchedule::new();
        // Cover all of Monday only: 3 of 21 slots.
        for shift in Shift::ALL {
            schedule.add_assignment(Day::Monday, shift, "Alice");
        }

        let kpi = RosterKpi::calculate(&schedule, &employees, &limits);
        assert!((kpi.coverage_rate - 3.0 / 21.0).abs() < 1e-10);
    }
}
