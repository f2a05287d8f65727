use crate::ParseError;
use crate::consts::{MAX_HOUR, MAX_MINUTE, SLOT_MINUTES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An hour of day guaranteed to be in the range `0..=MAX_HOUR` (0..=23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Creates a new Hour, validating that it's <= `MAX_HOUR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidHour` if the value is > `MAX_HOUR`.
    pub const fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_HOUR {
            return Err(ParseError::InvalidHour(value));
        }
        Ok(Self(value))
    }

    /// Returns the hour value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A minute value guaranteed to be in the range `0..=MAX_MINUTE` (0..=59).
/// Any minute is a valid time component; only the slot-mark minutes
/// (00, 15, 30, 45) fall on the selectable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Minute(u8);

impl Minute {
    /// Creates a new Minute, validating that it's <= `MAX_MINUTE`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMinute` if the value is > `MAX_MINUTE`.
    pub const fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_MINUTE {
            return Err(ParseError::InvalidMinute(value));
        }
        Ok(Self(value))
    }

    /// Returns the minute value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True if this minute falls on a slot mark (00, 15, 30, 45)
    #[inline]
    pub const fn is_slot_mark(self) -> bool {
        self.0 % SLOT_MINUTES == 0
    }

    /// Rounds down to the slot mark at or before this minute
    pub const fn slot_floor(self) -> Self {
        Self(self.0 - self.0 % SLOT_MINUTES)
    }
}

impl TryFrom<u8> for Minute {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Minute> for u8 {
    fn from(minute: Minute) -> Self {
        minute.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// AM/PM half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Display suffix, as rendered after a 12-hour time
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the seven English weekday names, in Monday-first calendar order.
/// Ordering follows the calendar (`Monday < Sunday`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven weekdays in calendar order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Canonical English name, as shown in selection lists
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            "Saturday" => Ok(Self::Saturday),
            "Sunday" => Ok(Self::Sunday),
            _ => Err(ParseError::InvalidWeekday(s.to_owned())),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recurrence-frequency label. The labels carry no recurrence behavior in
/// this crate; interpreting them belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl Frequency {
    /// All frequency labels in their fixed display order
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Custom];

    /// Canonical label, as shown in selection lists
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Custom => "Custom",
        }
    }
}

impl FromStr for Frequency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(Self::Daily),
            "Weekly" => Ok(Self::Weekly),
            "Monthly" => Ok(Self::Monthly),
            "Custom" => Ok(Self::Custom),
            _ => Err(ParseError::InvalidFrequency(s.to_owned())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_new_valid() {
        assert!(Hour::new(0).is_ok());
        assert!(Hour::new(12).is_ok());
        assert!(Hour::new(23).is_ok());
    }

    #[test]
    fn test_hour_new_invalid_too_large() {
        let result = Hour::new(24);
        assert!(matches!(result, Err(ParseError::InvalidHour(24))));

        let result = Hour::new(255);
        assert!(matches!(result, Err(ParseError::InvalidHour(255))));
    }

    #[test]
    fn test_hour_get() {
        let hour = Hour::new(9).unwrap();
        assert_eq!(hour.get(), 9);
    }

    #[test]
    fn test_hour_display() {
        let hour = Hour::new(9).unwrap();
        assert_eq!(hour.to_string(), "9");
    }

    #[test]
    fn test_hour_try_from_u8() {
        let hour: Hour = 13.try_into().unwrap();
        assert_eq!(hour.get(), 13);

        let result: Result<Hour, _> = 24.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_hour_into_u8() {
        let hour = Hour::new(23).unwrap();
        let value: u8 = hour.into();
        assert_eq!(value, 23);
    }

    #[test]
    fn test_hour_ordering() {
        let h1 = Hour::new(8).unwrap();
        let h2 = Hour::new(17).unwrap();
        assert!(h1 < h2);
        assert!(h2 > h1);
        assert_eq!(h1, h1);
    }

    #[test]
    fn test_hour_serde() {
        let hour = Hour::new(9).unwrap();
        let json = serde_json::to_string(&hour).unwrap();
        assert_eq!(json, "9");

        let parsed: Hour = serde_json::from_str(&json).unwrap();
        assert_eq!(hour, parsed);
    }

    #[test]
    fn test_hour_serde_rejects_out_of_range() {
        let result: Result<Hour, _> = serde_json::from_str("24");
        assert!(result.is_err());
    }

    #[test]
    fn test_minute_new_valid() {
        assert!(Minute::new(0).is_ok());
        assert!(Minute::new(37).is_ok());
        assert!(Minute::new(59).is_ok());
    }

    #[test]
    fn test_minute_new_invalid_too_large() {
        let result = Minute::new(60);
        assert!(matches!(result, Err(ParseError::InvalidMinute(60))));
    }

    #[test]
    fn test_minute_get() {
        let minute = Minute::new(45).unwrap();
        assert_eq!(minute.get(), 45);
    }

    #[test]
    fn test_minute_display() {
        let minute = Minute::new(5).unwrap();
        assert_eq!(minute.to_string(), "5");
    }

    #[test]
    fn test_minute_try_from_u8() {
        let minute: Minute = 30.try_into().unwrap();
        assert_eq!(minute.get(), 30);

        let result: Result<Minute, _> = 60.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_minute_into_u8() {
        let minute = Minute::new(15).unwrap();
        let value: u8 = minute.into();
        assert_eq!(value, 15);
    }

    #[test]
    fn test_minute_serde() {
        let minute = Minute::new(30).unwrap();
        let json = serde_json::to_string(&minute).unwrap();
        assert_eq!(json, "30");

        let parsed: Minute = serde_json::from_str(&json).unwrap();
        assert_eq!(minute, parsed);
    }

    #[test]
    fn test_minute_is_slot_mark_matches_table() {
        use crate::consts::SLOT_MINUTE_MARKS;

        for value in 0..=MAX_MINUTE {
            let minute = Minute::new(value).unwrap();
            assert_eq!(
                minute.is_slot_mark(),
                SLOT_MINUTE_MARKS.contains(&value),
                "minute {value} disagrees with the slot mark table"
            );
        }
    }

    #[test]
    fn test_minute_slot_floor() {
        let cases = [
            (0, 0),
            (7, 0),
            (14, 0),
            (15, 15),
            (29, 15),
            (30, 30),
            (44, 30),
            (45, 45),
            (59, 45),
        ];

        for (value, expected) in cases {
            let floored = Minute::new(value).unwrap().slot_floor();
            assert_eq!(floored.get(), expected, "slot_floor({value})");
            assert!(floored.is_slot_mark());
        }
    }

    #[test]
    fn test_meridiem_labels() {
        assert_eq!(Meridiem::Am.as_str(), "AM");
        assert_eq!(Meridiem::Pm.as_str(), "PM");
        assert_eq!(Meridiem::Pm.to_string(), "PM");
    }

    #[test]
    fn test_weekday_all_calendar_order() {
        let names: Vec<&str> = Weekday::ALL.iter().map(|day| day.as_str()).collect();
        assert_eq!(
            names,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn test_weekday_display_and_from_str_roundtrip() {
        for day in Weekday::ALL {
            let parsed: Weekday = day.to_string().parse().unwrap();
            assert_eq!(parsed, day);
        }
    }

    #[test]
    fn test_weekday_from_str_rejects_unknown() {
        let result = "Funday".parse::<Weekday>();
        assert!(matches!(result, Err(ParseError::InvalidWeekday(_))));

        // Names are canonical, not case-insensitive
        let result = "monday".parse::<Weekday>();
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_ordering() {
        assert!(Weekday::Monday < Weekday::Tuesday);
        assert!(Weekday::Saturday < Weekday::Sunday);
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, r#""Wednesday""#);

        let parsed: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Weekday::Wednesday);
    }

    #[test]
    fn test_frequency_all_fixed_order() {
        let labels: Vec<&str> = Frequency::ALL.iter().map(|freq| freq.as_str()).collect();
        assert_eq!(labels, ["Daily", "Weekly", "Monthly", "Custom"]);
    }

    #[test]
    fn test_frequency_display_and_from_str_roundtrip() {
        for freq in Frequency::ALL {
            let parsed: Frequency = freq.to_string().parse().unwrap();
            assert_eq!(parsed, freq);
        }
    }

    #[test]
    fn test_frequency_from_str_rejects_unknown() {
        let result = "Yearly".parse::<Frequency>();
        assert!(matches!(result, Err(ParseError::InvalidFrequency(_))));
    }

    #[test]
    fn test_frequency_serde() {
        let json = serde_json::to_string(&Frequency::Custom).unwrap();
        assert_eq!(json, r#""Custom""#);

        let parsed: Frequency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Frequency::Custom);
    }
}
