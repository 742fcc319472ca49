mod consts;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single day of the proleptic Gregorian calendar.
///
/// Every instance holds a month in `1..=12`, a year of at least 1 and a day
/// that exists in that month. Values are immutable; arithmetic returns a new
/// `Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{day}.{month}.{year}")]
#[serde(try_from = "DateFields", into = "DateFields")]
pub struct Date {
    day:   Day,
    month: Month,
    year:  Year,
}

/// Error type for date construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year is below `MIN_YEAR`.
    #[error("Invalid year: {0} (must be at least {min})", min = MIN_YEAR)]
    InvalidYear(u32),

    /// Month is outside `1..=MAX_MONTH`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day does not exist in the given month and year.
    #[error("Invalid day {day} for month {month} of year {year}")]
    InvalidDay { day: u8, month: u8, year: u32 },

    /// Arithmetic moved past the largest representable year.
    #[error("Date arithmetic overflowed past year {}", u32::MAX)]
    YearOverflow,
}

impl DateError {
    /// True for errors caused by a component outside its valid range.
    pub const fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. }
        )
    }
}

impl Date {
    /// Creates a date from its day, month and year.
    ///
    /// Checks run in order year, month, day; the first failure is returned.
    ///
    /// # Errors
    /// `InvalidYear` for year 0, `InvalidMonth` outside 1-12, `InvalidDay`
    /// when the day does not exist in that month.
    pub fn new(day: u8, month: u8, year: u32) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Self::from_components(day, month, year)
    }

    /// Creates a date from typed components.
    ///
    /// A `Day` built without context may not fit the month, so it is checked again.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day is past the end of the month.
    pub fn from_parts(day: Day, month: Month, year: Year) -> Result<Self, DateError> {
        Self::from_components(day.get(), month, year)
    }

    fn from_components(day: u8, month: Month, year: Year) -> Result<Self, DateError> {
        let day = Day::new(day, month, year)?;
        Ok(Self { day, month, year })
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month (1 = January)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u32 {
        self.year.get()
    }

    /// Returns the day as its validated `Day` type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the month as its validated `Month` type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the year as its validated `Year` type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns `(day, month, year)`
    pub const fn to_parts(&self) -> (u8, u8, u32) {
        (self.day.get(), self.month.get(), self.year.get())
    }

    /// Whether this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        self.month.days_in(self.year)
    }

    /// Number of days in this date's year
    pub const fn days_in_year(&self) -> u16 {
        days_in_year(self.year.get())
    }

    /// 1-based day of the year (1 January = 1).
    pub fn to_ordinal(&self) -> u16 {
        let year = self.year.get();
        let preceding: u16 = (JANUARY..self.month.get())
            .map(|month| u16::from(days_in_month(month, year)))
            .sum();
        preceding + u16::from(self.day.get())
    }

    /// Returns the date `n` days later.
    ///
    /// Walks forward one month per step, so the cost grows with the number of
    /// months spanned rather than with `n`.
    ///
    /// # Errors
    /// Returns `DateError::YearOverflow` if the result would be after the last
    /// day of year `u32::MAX`.
    pub fn add_days(self, n: u32) -> Result<Self, DateError> {
        let mut day = self.day.get();
        let mut month = self.month;
        let mut year = self.year;
        let mut remaining = n;

        while remaining > 0 {
            let month_len = month.days_in(year);
            match u8::try_from(remaining) {
                Ok(step) if step <= month_len - day => {
                    day += step;
                    break;
                }
                _ => {}
            }

            // Consume the rest of this month, landing on the 1st of the next.
            remaining -= u32::from(month_len - day) + 1;
            day = MIN_DAY;
            let (next, wrapped) = month.succ();
            month = next;
            if wrapped {
                year = year.succ().ok_or(DateError::YearOverflow)?;
            }
        }

        Self::from_components(day, month, year)
    }

    /// Returns the following day.
    ///
    /// # Errors
    /// Returns `DateError::YearOverflow` after the last day of year `u32::MAX`.
    pub fn next_day(self) -> Result<Self, DateError> {
        self.add_days(1)
    }

    /// Chronological sort key: year first, then month, then day.
    #[inline]
    const fn chronological_key(&self) -> (Year, Month, Day) {
        (self.year, self.month, self.day)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chronological_key().cmp(&other.chronological_key())
    }
}

impl TryFrom<(u8, u8, u32)> for Date {
    type Error = DateError;

    fn try_from((day, month, year): (u8, u8, u32)) -> Result<Self, Self::Error> {
        Self::new(day, month, year)
    }
}

/// Serialized shape of a `Date`; deserializing goes back through `Date::new`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateFields {
    day:   u8,
    month: u8,
    year:  u32,
}

impl From<Date> for DateFields {
    fn from(date: Date) -> Self {
        let (day, month, year) = date.to_parts();
        Self { day, month, year }
    }
}

impl TryFrom<DateFields> for Date {
    type Error = DateError;

    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        Self::new(fields.day, fields.month, fields.year)
    }
}
