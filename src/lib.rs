mod consts;
mod options;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use options::{
    DAY_OPTIONS, FREQUENCY_OPTIONS, TIME_OPTIONS, format_time, is_time_option,
    is_valid_time_format, time_options_in_range,
};
pub use range::{RangeError, Slots, TimeRange};
pub use types::{Frequency, Hour, Meridiem, Minute, Weekday};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A wall-clock time of day with minute precision on the 24-hour clock.
/// Displays in the zero-padded `HH:MM` form used throughout the option
/// lists, regardless of how the value was written on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}", "hour.get()", "minute.get()")]
pub struct TimeOfDay {
    hour: Hour,
    minute: Minute,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid time format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid slot index: {} (must be 0-{})", "_0", "SLOTS_PER_DAY - 1")]
    InvalidSlotIndex(usize),
    #[display(fmt = "Invalid weekday: {_0}")]
    InvalidWeekday(String),
    #[display(fmt = "Invalid frequency: {_0}")]
    InvalidFrequency(String),
    #[display(fmt = "Empty time string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl TimeOfDay {
    /// Creates a time of day from already-validated components
    pub const fn new(hour: Hour, minute: Minute) -> Self {
        Self { hour, minute }
    }

    /// Creates a time of day from raw hour and minute values
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidHour` or `ParseError::InvalidMinute`
    /// if a component is out of range.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, ParseError> {
        Ok(Self::new(Hour::new(hour)?, Minute::new(minute)?))
    }

    /// Returns the hour component
    pub const fn hour(&self) -> Hour {
        self.hour
    }

    /// Returns the minute component
    pub const fn minute(&self) -> Minute {
        self.minute
    }

    /// Minutes elapsed since midnight (0 through 1439)
    pub const fn minutes_from_midnight(&self) -> u16 {
        self.hour.get() as u16 * MINUTES_PER_HOUR + self.minute.get() as u16
    }
}

// --- 12-hour display ---

impl TimeOfDay {
    /// The hour as it reads on a 12-hour clock face.
    /// Midnight is 12, afternoon hours drop by 12, the rest pass through.
    pub const fn hour12(&self) -> u8 {
        let hour = self.hour.get();
        if hour == MIDNIGHT_HOUR {
            NOON_HOUR
        } else if hour > NOON_HOUR {
            hour - NOON_HOUR
        } else {
            hour
        }
    }

    /// The half of the day this time falls in
    pub const fn meridiem(&self) -> Meridiem {
        if self.hour.get() >= NOON_HOUR {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    /// Formats for 12-hour display, e.g. `"1:30 PM"` or `"12:00 AM"`.
    /// The minute stays zero-padded; the hour is never padded.
    pub fn to_12h_string(&self) -> String {
        format!(
            "{}:{:02} {}",
            self.hour12(),
            self.minute.get(),
            self.meridiem()
        )
    }
}

// --- quarter-hour slot arithmetic ---

impl TimeOfDay {
    /// True if this time falls on the quarter-hour grid
    pub const fn is_slot_aligned(&self) -> bool {
        self.minute.is_slot_mark()
    }

    /// Position in the canonical slot sequence, where `00:00` is 0 and
    /// `23:45` is 95. Returns `None` for times off the grid.
    pub const fn slot_index(&self) -> Option<usize> {
        if !self.is_slot_aligned() {
            return None;
        }
        let within_hour = (self.minute.get() / SLOT_MINUTES) as usize;
        Some(self.hour.get() as usize * SLOTS_PER_HOUR + within_hour)
    }

    /// Returns the slot at the given position in the canonical sequence
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidSlotIndex` if the index is past the
    /// last slot of the day.
    pub fn from_slot_index(index: usize) -> Result<Self, ParseError> {
        if index >= SLOTS_PER_DAY {
            return Err(ParseError::InvalidSlotIndex(index));
        }
        let hour = (index / SLOTS_PER_HOUR) as u8;
        let minute = SLOT_MINUTE_MARKS[index % SLOTS_PER_HOUR];
        Self::from_hm(hour, minute)
    }

    /// Rounds down to the slot at or before this time
    pub const fn floor_slot(&self) -> Self {
        Self {
            hour: self.hour,
            minute: self.minute.slot_floor(),
        }
    }

    /// Rounds up to the slot at or after this time.
    /// Returns `None` past the last slot of the day.
    pub fn ceil_slot(&self) -> Option<Self> {
        if self.is_slot_aligned() {
            return Some(*self);
        }
        self.floor_slot().next_slot()
    }

    /// The slot immediately after this time's slot.
    /// Returns `None` at the end of the day.
    pub fn next_slot(&self) -> Option<Self> {
        let index = self.floor_slot().slot_index()?;
        Self::from_slot_index(index + 1).ok()
    }
}

// --- helpers for the H:MM / HH:MM grammar ---
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strictly enforce the grammar: H:MM or HH:MM, nothing else.
        // Surrounding whitespace is a format error, not ignored.
        let (hour_part, minute_part) = s
            .split_once(TIME_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat(s.to_owned()))?;

        if hour_part.len() > 2 || !is_digits(hour_part) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        if minute_part.len() != 2 || !is_digits(minute_part) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let hour = Hour::new(Self::parse_u8(hour_part)?)?;
        let minute = Minute::new(Self::parse_u8(minute_part)?)?;

        Ok(Self { hour, minute })
    }
}

impl TimeOfDay {
    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u8, u8)> for TimeOfDay {
    type Error = ParseError;

    fn try_from(value: (u8, u8)) -> Result<Self, Self::Error> {
        Self::from_hm(value.0, value.1)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
