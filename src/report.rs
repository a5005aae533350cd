//! Plain-text schedule rendering.
//!
//! Renders a finished weekly schedule as a human-readable table: one
//! block per day, one line per shift with names comma-joined. A pure
//! sink over the schedule; makes no scheduling decisions and mutates
//! nothing.

use std::fmt::Write;

use crate::models::{Day, Shift, WeeklySchedule};

/// Placeholder for a shift with nobody assigned.
const NO_STAFF: &str = "No Staff";

/// Renders the weekly schedule as text.
pub fn render(schedule: &WeeklySchedule) -> String {
    let mut out = String::new();
    out.push_str("====== FINAL WEEKLY SCHEDULE ======\n");

    for day in Day::ALL {
        let _ = write!(out, "\n{day}:\n");
        for shift in Shift::ALL {
            let workers = schedule.assigned(day, shift);
            let line = if workers.is_empty() {
                NO_STAFF.to_string()
            } else {
                workers.join(", ")
            };
            let _ = writeln!(out, "  {:<10}: {line}", shift.name());
        }
    }

    if schedule.has_shortfalls() {
        out.push_str("\nShortfalls:\n");
        for s in &schedule.shortfalls {
            let _ = writeln!(
                out,
                "  {} {}: {} of {} required",
                s.day, s.shift, s.assigned, s.required
            );
        }
    }

    out
}
