use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ParseError, RANGE_SEPARATOR, TimeOfDay, prelude::*};

/// Represents a span of the day between two times (inclusive).
/// The start time must be less than or equal to the end time; spans that
/// would wrap past midnight are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}-{end}")]
pub struct TimeRange {
    start: TimeOfDay,
    end:   TimeOfDay,
}

/// Error type for time range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start time is after end time.
    #[error("Invalid time range: start ({start}) is after end ({end})")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },

    /// Error parsing a time component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl TimeRange {
    /// Creates a new time range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start time of the range
    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the end time of the range
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Returns both start and end times as a tuple
    pub const fn times(&self) -> (TimeOfDay, TimeOfDay) {
        (self.start, self.end)
    }

    /// Length of the range in minutes (zero when start == end)
    pub const fn duration_minutes(&self) -> u16 {
        self.end.minutes_from_midnight() - self.start.minutes_from_midnight()
    }

    /// Checks if the range contains a given time (boundaries included)
    pub fn contains(&self, time: &TimeOfDay) -> bool {
        self.start <= *time && *time <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        // Ranges overlap if they have any minute in common, boundaries
        // included on both sides
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Iterates the quarter-hour slots that fall inside the range, in
    /// ascending order. The first slot is the earliest at or after `start`,
    /// the last is the latest at or before `end`; unaligned boundaries
    /// narrow the sequence, and a range touching no slot yields nothing.
    pub fn slots(&self) -> Slots {
        let first = self.start.ceil_slot().and_then(|slot| slot.slot_index());
        let last = self.end.floor_slot().slot_index();

        match (first, last) {
            (Some(first), Some(last)) if first <= last => Slots {
                next: Some(first),
                last,
            },
            _ => Slots { next: None, last: 0 },
        }
    }

    /// Number of quarter-hour slots inside the range
    pub fn slot_count(&self) -> usize {
        self.slots().len()
    }
}

/// Iterator over the quarter-hour slots inside a [`TimeRange`].
/// Yields at most one item per slot position, in canonical order.
#[derive(Debug, Clone)]
pub struct Slots {
    next: Option<usize>,
    last: usize,
}

impl Iterator for Slots {
    type Item = TimeOfDay;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = if index < self.last {
            Some(index + 1)
        } else {
            None
        };
        // Indexes come from slot_index, so they are always in bounds
        TimeOfDay::from_slot_index(index).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |next| self.last - next + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Slots {}

impl FromStr for TimeRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator_count = s.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = s.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                // Whitespace around the separator is tolerated; the boundary
                // grammar itself stays strict
                let start = start_str.trim().parse::<TimeOfDay>()?;
                let end = end_str.trim().parse::<TimeOfDay>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start times first, then end times
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for TimeRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
