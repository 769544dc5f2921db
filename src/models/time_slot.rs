//! Daily time slots (`HH:MM-HH:MM`) used for opening hours and delivery
//! preferences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// A window within one day, stored as minutes since midnight.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::TimeSlot;
///
/// let slot: TimeSlot = "09:00-12:30".parse().unwrap();
/// assert_eq!(slot.start_minutes(), 540);
/// assert_eq!(slot.end_minutes(), 750);
/// assert!(slot.contains(600));
/// assert_eq!(slot.to_string(), "09:00-12:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    start: u16,
    end: u16,
}

impl TimeSlot {
    /// Creates a slot from minutes since midnight.
    ///
    /// Returns `None` if `start > end` or either bound is past 23:59.
    pub fn new(start_minutes: u16, end_minutes: u16) -> Option<Self> {
        const LAST_MINUTE: u16 = 23 * 60 + 59;
        if start_minutes > end_minutes || end_minutes > LAST_MINUTE {
            return None;
        }
        Some(Self {
            start: start_minutes,
            end: end_minutes,
        })
    }

    /// Start of the slot in minutes since midnight.
    pub fn start_minutes(&self) -> u16 {
        self.start
    }

    /// End of the slot in minutes since midnight.
    pub fn end_minutes(&self) -> u16 {
        self.end
    }

    /// Returns `true` if the given minute of day falls within this slot.
    pub fn contains(&self, minute_of_day: u16) -> bool {
        minute_of_day >= self.start && minute_of_day <= self.end
    }
}

fn parse_clock(text: &str) -> Option<u16> {
    let (hours, minutes) = text.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

impl FromStr for TimeSlot {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RoutingError::InvalidTimeSlot {
            value: s.to_string(),
        };
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start = parse_clock(start).ok_or_else(invalid)?;
        let end = parse_clock(end).ok_or_else(invalid)?;
        Self::new(start, end).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = RoutingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
