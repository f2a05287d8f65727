/// Maximum valid hour (inclusive, 24-hour clock)
pub const MAX_HOUR: u8 = 23;

/// Maximum valid minute (inclusive)
pub const MAX_MINUTE: u8 = 59;

/// Hours in a day
pub const HOURS_PER_DAY: u8 = 24;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: u16 = 60;

/// Width of one selectable slot in minutes
pub const SLOT_MINUTES: u8 = 15;

/// Slots in one hour (60 / `SLOT_MINUTES`)
pub const SLOTS_PER_HOUR: usize = 4;

/// Slots in a full day (24 * `SLOTS_PER_HOUR`)
pub const SLOTS_PER_DAY: usize = 96;

/// Minute marks a slot may start on, in chronological order
pub const SLOT_MINUTE_MARKS: [u8; SLOTS_PER_HOUR] = [0, 15, 30, 45];

/// Hour at which the 12-hour clock flips from AM to PM
pub(crate) const NOON_HOUR: u8 = 12;
/// Hour 0, displayed as 12 on the 12-hour clock
pub(crate) const MIDNIGHT_HOUR: u8 = 0;

/// Hour/minute separator (`HH:MM`)
pub const TIME_SEPARATOR: char = ':';
/// Range separator (`HH:MM-HH:MM`)
pub const RANGE_SEPARATOR: char = '-';
