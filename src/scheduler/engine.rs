//! Two-pass weekly shift allocation.
//!
//! # Algorithm
//!
//! Days are processed strictly in calendar order; each day runs two
//! passes and the second must finish before the next day starts,
//! because availability depends on cumulative state from prior days.
//!
//! 1. **Preference pass**: employees in roster order are placed into
//!    their preferred shift while it is below the per-shift maximum,
//!    otherwise into the first alternate shift with room (first-fit in
//!    shift enumeration order, no load balancing). Deterministic.
//! 2. **Backfill pass**: shifts in enumeration order are topped up to
//!    the per-shift minimum by drawing uniformly at random from the
//!    employees still able to work that day. An empty candidate pool
//!    leaves the shift under minimum: the shortfall is logged and
//!    recorded on the schedule, never fatal.
//!
//! # Complexity
//! O(d * e * s) for d days, e employees, s shifts.
//!
//! # Reference
//! Ernst et al. (2004), "Staff Scheduling and Rostering: A Review"

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::models::{
    AssignmentError, Day, Employee, Shift, Shortfall, StaffingLimits, WeeklySchedule,
};

/// Two-pass weekly shift allocator.
///
/// Owns the staffing limits for the run; employees are borrowed mutably
/// for the duration of a run and updated in place as they are assigned.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Employee, Shift, StaffingLimits};
/// use shift_roster::scheduler::ShiftScheduler;
///
/// let mut employees = vec![
///     Employee::new("Alice", Shift::Morning),
///     Employee::new("Bob", Shift::Evening),
/// ];
/// let scheduler = ShiftScheduler::new().with_limits(StaffingLimits::new(5, 1, 3));
/// let schedule = scheduler.schedule_seeded(&mut employees, 42).unwrap();
/// assert!(schedule.total_assignments() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct ShiftScheduler {
    limits: StaffingLimits,
}

impl ShiftScheduler {
    /// Creates a scheduler with the default limits.
    pub fn new() -> Self {
        Self {
            limits: StaffingLimits::default(),
        }
    }

    /// Sets the staffing limits.
    pub fn with_limits(mut self, limits: StaffingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The limits in effect.
    pub fn limits(&self) -> &StaffingLimits {
        &self.limits
    }

    /// Allocates the week using the supplied random source.
    ///
    /// The generator is only consulted by the backfill pass, so two
    /// runs with equal seeds and fresh employee state produce identical
    /// schedules.
    pub fn schedule<R: Rng>(
        &self,
        employees: &mut [Employee],
        rng: &mut R,
    ) -> Result<WeeklySchedule, AssignmentError> {
        let mut schedule = WeeklySchedule::new();

        for day in Day::ALL {
            debug!("scheduling {day}");
            self.preference_pass(day, employees, &mut schedule)?;
            self.backfill_pass(day, employees, &mut schedule, rng)?;
        }

        Ok(schedule)
    }

    /// Allocates the week with a seeded generator, for reproducible runs.
    pub fn schedule_seeded(
        &self,
        employees: &mut [Employee],
        seed: u64,
    ) -> Result<WeeklySchedule, AssignmentError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.schedule(employees, &mut rng)
    }

    /// Pass 1: preference-first placement with first-fit fallback.
    fn preference_pass(
        &self,
        day: Day,
        employees: &mut [Employee],
        schedule: &mut WeeklySchedule,
    ) -> Result<(), AssignmentError> {
        let cap = self.limits.max_days_per_week;

        for emp in employees.iter_mut() {
            if !emp.can_work(day, cap) {
                continue;
            }

            let pref = emp.preferred_shift;
            let target = if schedule.count(day, pref) < self.limits.max_per_shift {
                Some(pref)
            } else {
                // Preferred shift full: first alternate with room, in
                // fixed shift order.
                Shift::ALL
                    .into_iter()
                    .find(|&alt| alt != pref && schedule.count(day, alt) < self.limits.max_per_shift)
            };

            if let Some(shift) = target {
                emp.assign(day, shift, cap)?;
                schedule.add_assignment(day, shift, emp.name.clone());
            }
        }

        Ok(())
    }

    /// Pass 2: randomized backfill up to the per-shift minimum.
    fn backfill_pass<R: Rng>(
        &self,
        day: Day,
        employees: &mut [Employee],
        schedule: &mut WeeklySchedule,
        rng: &mut R,
    ) -> Result<(), AssignmentError> {
        let cap = self.limits.max_days_per_week;

        for shift in Shift::ALL {
            while schedule.count(day, shift) < self.limits.min_per_shift {
                // Recomputed every iteration: each draw shrinks the pool.
                let candidates: Vec<usize> = (0..employees.len())
                    .filter(|&i| employees[i].can_work(day, cap))
                    .collect();

                match candidates.choose(rng) {
                    Some(&idx) => {
                        let emp = &mut employees[idx];
                        emp.assign(day, shift, cap)?;
                        info!("gap fill: assigned {} to {day} {shift}", emp.name);
                        schedule.add_assignment(day, shift, emp.name.clone());
                    }
                    None => {
                        let assigned = schedule.count(day, shift);
                        warn!(
                            "staffing shortfall: {day} {shift} has {assigned} of {} required",
                            self.limits.min_per_shift
                        );
                        schedule.add_shortfall(Shortfall {
                            day,
                            shift,
                            assigned,
                            required: self.limits.min_per_shift,
                        });
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for ShiftScheduler {
    fn default() -> Self {
        Self::new()
    }
}
