//! Weekly shift rostering.
//!
//! Assigns a fixed roster of employees to named shifts across a week,
//! honoring per-employee shift preference, a weekly day cap, and
//! per-shift minimum/maximum staffing bounds. Allocation is a two-pass
//! procedure per day: a deterministic preference-first placement pass,
//! then a randomized backfill pass that repairs shifts left under
//! minimum staffing.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Shift`, `Employee`,
//!   `StaffingLimits`, `WeeklySchedule`, `Shortfall`
//! - **`scheduler`**: The two-pass `ShiftScheduler` and `RosterKpi`
//!   quality metrics
//! - **`validation`**: Roster and limits integrity checks
//! - **`report`**: Plain-text rendering of a finished schedule
//!
//! # Example
//!
//! ```
//! use shift_roster::models::{Employee, Shift, StaffingLimits};
//! use shift_roster::scheduler::ShiftScheduler;
//! use shift_roster::{report, validation};
//!
//! let mut roster = vec![
//!     Employee::new("Alice", Shift::Morning),
//!     Employee::new("Bob", Shift::Afternoon),
//!     Employee::new("Carol", Shift::Evening),
//! ];
//! let limits = StaffingLimits::new(5, 1, 3);
//! validation::validate_roster(&roster, &limits).unwrap();
//!
//! let scheduler = ShiftScheduler::new().with_limits(limits);
//! let schedule = scheduler.schedule_seeded(&mut roster, 42).unwrap();
//! println!("{}", report::render(&schedule));
//! ```

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
