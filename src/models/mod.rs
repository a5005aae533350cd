//! Rostering domain models.
//!
//! Core data types for weekly shift rostering: the week calendar, the
//! employee availability model, the staffing limits configuration, and
//! the schedule solution container.

mod calendar;
mod employee;
mod limits;
mod schedule;

pub use calendar::{Day, Shift};
pub use employee::{AssignmentError, Employee};
pub use limits::StaffingLimits;
pub use schedule::{Shortfall, WeeklySchedule};
