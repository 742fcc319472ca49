//! Fixture builders for unit tests.

use crate::{Date, Day, Month, Year};

pub fn year(value: u32) -> Year {
    Year::new(value).unwrap_or_else(|e| panic!("bad test year {value}: {e}"))
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap_or_else(|e| panic!("bad test month {value}: {e}"))
}

pub fn day(value: u8, m: u8, y: u32) -> Day {
    Day::new(value, month(m), year(y)).unwrap_or_else(|e| panic!("bad test day {value}: {e}"))
}

/// Builds a `Date` in `(day, month, year)` order.
pub fn date(d: u8, m: u8, y: u32) -> Date {
    Date::new(d, m, y).unwrap_or_else(|e| panic!("bad test date {d}.{m}.{y}: {e}"))
}
