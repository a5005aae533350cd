//! Week calendar: day and shift enumerations.
//!
//! The week is a fixed, ordered set of seven days and each day is split
//! into three named shifts. Both orders are semantically significant:
//! scheduling proceeds day by day (each day's outcome constrains later
//! days), and the shift order is the deterministic fallback search
//! order when a preferred shift is full.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the scheduling week.
///
/// Ordered Monday through Sunday; `Day::ALL` yields the processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in scheduling order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shift within a day.
///
/// Ordered Morning, Afternoon, Evening; `Shift::ALL` is both the
/// backfill order and the first-fit fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    /// All shifts in enumeration order.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order() {
        assert_eq!(Day::ALL.len(), 7);
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[6], Day::Sunday);
        assert!(Day::Monday < Day::Tuesday);
        assert!(Day::Saturday < Day::Sunday);
    }

    #[test]
    fn test_shift_order() {
        assert_eq!(Shift::ALL.len(), 3);
        assert_eq!(Shift::ALL[0], Shift::Morning);
        assert_eq!(Shift::ALL[2], Shift::Evening);
        assert!(Shift::Morning < Shift::Afternoon);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
        assert_eq!(Shift::Afternoon.to_string(), "Afternoon");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Day::Friday).unwrap();
        assert_eq!(json, "\"Friday\"");
        let back: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Day::Friday);

        let json = serde_json::to_string(&Shift::Evening).unwrap();
        assert_eq!(json, "\"Evening\"");
    }
}
