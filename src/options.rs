use crate::{SLOTS_PER_DAY, TimeOfDay};

/// Every selectable quarter-hour slot of the day in chronological order,
/// `"00:00"` through `"23:45"`. Positions are stable and meaningful: the
/// range lookup below and [`TimeOfDay::slot_index`] agree on them.
pub static TIME_OPTIONS: [&str; SLOTS_PER_DAY] = [
    "00:00", "00:15", "00:30", "00:45",
    "01:00", "01:15", "01:30", "01:45",
    "02:00", "02:15", "02:30", "02:45",
    "03:00", "03:15", "03:30", "03:45",
    "04:00", "04:15", "04:30", "04:45",
    "05:00", "05:15", "05:30", "05:45",
    "06:00", "06:15", "06:30", "06:45",
    "07:00", "07:15", "07:30", "07:45",
    "08:00", "08:15", "08:30", "08:45",
    "09:00", "09:15", "09:30", "09:45",
    "10:00", "10:15", "10:30", "10:45",
    "11:00", "11:15", "11:30", "11:45",
    "12:00", "12:15", "12:30", "12:45",
    "13:00", "13:15", "13:30", "13:45",
    "14:00", "14:15", "14:30", "14:45",
    "15:00", "15:15", "15:30", "15:45",
    "16:00", "16:15", "16:30", "16:45",
    "17:00", "17:15", "17:30", "17:45",
    "18:00", "18:15", "18:30", "18:45",
    "19:00", "19:15", "19:30", "19:45",
    "20:00", "20:15", "20:30", "20:45",
    "21:00", "21:15", "21:30", "21:45",
    "22:00", "22:15", "22:30", "22:45",
    "23:00", "23:15", "23:30", "23:45",
];

/// Weekday names in calendar order, Monday first
pub static DAY_OPTIONS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Recurrence-frequency labels offered to schedule pickers. Labels only;
/// interpreting them is the caller's business.
pub static FREQUENCY_OPTIONS: [&str; 4] = ["Daily", "Weekly", "Monthly", "Custom"];

/// Formats a 24-hour `H:MM`/`HH:MM` string for 12-hour display, e.g.
/// `"13:30"` becomes `"1:30 PM"`. Empty input renders as empty output,
/// and so does anything unparseable: this surface never fails, because
/// it sits directly behind UI bindings that feed it whatever the user
/// has (or has not) selected yet.
pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    match time.parse::<TimeOfDay>() {
        Ok(parsed) => parsed.to_12h_string(),
        Err(_) => String::new(),
    }
}

/// Returns the contiguous run of [`TIME_OPTIONS`] from `start_time`
/// through `end_time`, both included. Boundaries are matched by exact
/// string equality against the list, so a value in non-canonical
/// spelling (say `"9:00"`) selects nothing. A boundary that is not an
/// option, or a start positioned after the end, yields an empty slice;
/// ranges never wrap past midnight.
pub fn time_options_in_range(start_time: &str, end_time: &str) -> &'static [&'static str] {
    match (option_position(start_time), option_position(end_time)) {
        // get() already refuses a reversed index pair, which is exactly
        // the contract: a start after the end selects nothing
        (Some(start), Some(end)) => TIME_OPTIONS.get(start..=end).unwrap_or(&[]),
        _ => &[],
    }
}

/// Checks whether a string is a well-formed 24-hour time: a one- or
/// two-digit hour 0-23, a colon, then exactly two minute digits 00-59.
/// Anchored on both ends; surrounding whitespace fails the check.
pub fn is_valid_time_format(time: &str) -> bool {
    time.parse::<TimeOfDay>().is_ok()
}

/// Checks whether a string is one of the selectable [`TIME_OPTIONS`],
/// i.e. well-formed, canonically padded, and on the quarter-hour grid
pub fn is_time_option(time: &str) -> bool {
    TIME_OPTIONS.contains(&time)
}

fn option_position(time: &str) -> Option<usize> {
    TIME_OPTIONS.iter().position(|option| *option == time)
}
