mod consts;
mod escape;
mod format;
mod prelude;
mod types;

pub use consts::*;
pub use escape::{escape, unescape};
pub use format::{FormatError, Placeholder, date_to_format, min_digits};
pub use types::{Day, Month};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Date components the format engine reads from a subject date.
///
/// `month` is a zero-based index (January is 0), mirroring the underlying
/// date representation's native indexing; `day` is carried exactly as the
/// source provides it (1-based). Implement this for your own date type to
/// format it with [`date_to_format`], or use the bundled [`Date`].
pub trait DateLike {
    /// Full year
    fn year(&self) -> i32;

    /// Zero-based month index
    fn month(&self) -> u8;

    /// Day of month
    fn day(&self) -> u8;
}

/// A calendar date with validated components.
///
/// The bundled [`DateLike`] carrier for callers that don't bring their own
/// date representation. Months are held as zero-based indices; `Display`
/// prints the familiar 1-based ISO calendar form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    year: i32,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH_INDEX)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month index {month} of year {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl std::error::Error for DateError {}

impl Date {
    /// Creates a date from a year, a zero-based month index, and a
    /// day of month.
    ///
    /// # Errors
    /// Returns `DateError` if the month index or day is out of range for
    /// the given year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let month = types::Month::new(month)?;
        let day = types::Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the full year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the zero-based month index (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.index()
    }

    /// Returns the day of month (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    /// Formats the date using the given placeholder template.
    ///
    /// Convenience for [`date_to_format`].
    ///
    /// # Errors
    /// Returns `FormatError` if a matched letter cannot be dispatched.
    pub fn to_format(&self, format: &str) -> Result<String, FormatError> {
        date_to_format(self, format)
    }
}

impl DateLike for Date {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u8 {
        self.month.index()
    }

    fn day(&self) -> u8 {
        self.day.get()
    }
}

impl TryFrom<(i32, u8, u8)> for Date {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ISO calendar form: the month prints as its 1-based number even
        // though the crate's native index is zero-based
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day.get()
        )
    }
}
