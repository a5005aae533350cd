//! Shift allocation engine and roster metrics.
//!
//! `ShiftScheduler` runs the two-pass weekly allocation: a
//! deterministic preference-first placement pass followed by a
//! randomized minimum-staffing backfill pass. `RosterKpi` summarizes
//! the quality of a finished schedule.
//!
//! # Reference
//! Ernst et al. (2004), "Staff Scheduling and Rostering: A Review"

mod engine;
mod kpi;

pub use engine::ShiftScheduler;
pub use kpi::RosterKpi;
