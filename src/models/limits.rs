//! Staffing limits configuration.
//!
//! Process-wide scheduling constraints: the weekly day cap per employee
//! and the per-shift staffing bounds. Built once before a run and
//! read-only thereafter; the engine receives the value rather than
//! reading module-level constants.

use serde::{Deserialize, Serialize};

/// Immutable staffing constraints for one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingLimits {
    /// Maximum days any employee may work in one week.
    pub max_days_per_week: usize,
    /// Minimum employees per (day, shift); Pass 2 backfills up to this.
    pub min_per_shift: usize,
    /// Maximum employees per (day, shift); Pass 1 never exceeds this.
    pub max_per_shift: usize,
}

impl StaffingLimits {
    /// Creates limits with explicit bounds.
    pub fn new(max_days_per_week: usize, min_per_shift: usize, max_per_shift: usize) -> Self {
        Self {
            max_days_per_week,
            min_per_shift,
            max_per_shift,
        }
    }

    /// Sets the weekly day cap.
    pub fn with_day_cap(mut self, max_days_per_week: usize) -> Self {
        self.max_days_per_week = max_days_per_week;
        self
    }

    /// Sets the per-shift minimum.
    pub fn with_min_per_shift(mut self, min_per_shift: usize) -> Self {
        self.min_per_shift = min_per_shift;
        self
    }

    /// Sets the per-shift maximum.
    pub fn with_max_per_shift(mut self, max_per_shift: usize) -> Self {
        self.max_per_shift = max_per_shift;
        self
    }
}

impl Default for StaffingLimits {
    /// Reference configuration: 5-day cap, 2..3 employees per shift.
    fn default() -> Self {
        Self {
            max_days_per_week: 5,
            min_per_shift: 2,
            max_per_shift: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = StaffingLimits::default();
        assert_eq!(limits.max_days_per_week, 5);
        assert_eq!(limits.min_per_shift, 2);
        assert_eq!(limits.max_per_shift, 3);
    }

    #[test]
    fn test_builder() {
        let limits = StaffingLimits::default()
            .with_day_cap(4)
            .with_min_per_shift(1)
            .with_max_per_shift(5);
        assert_eq!(limits, StaffingLimits::new(4, 1, 5));
    }
}
