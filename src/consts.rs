/// Earliest year a `Date` can hold
pub const MIN_YEAR: u32 = 1;

/// Number of months in a year
pub const MAX_MONTH: u8 = 12;

/// Day every month starts on
pub const MIN_DAY: u8 = 1;

pub const JANUARY: u8 = 1;
pub const FEBRUARY: u8 = 2;
pub const DECEMBER: u8 = 12;

/// February length in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

pub const DAYS_IN_COMMON_YEAR: u16 = 365;
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Month lengths in a common year, indexed by month number (slot 0 is padding).
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Gregorian leap rule: every 4th year, skipping centuries except every 400th.
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
pub(crate) const CENTURY_CYCLE: u32 = 100;
pub(crate) const GREGORIAN_CYCLE: u32 = 400;
