//! The month an expense falls in, e.g. "2024-03".

use std::{fmt::Display, str::FromStr};

use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The text format of an expense date, e.g. "2024-03-15".
pub(crate) const ISO_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]");

/// The number of characters in a month string, e.g. "2024-03".
const MONTH_STRING_LENGTH: usize = 7;

/// A calendar month in a specific year.
///
/// Parses from and displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first_day: Date,
}

impl YearMonth {
    /// The month that `date` falls in.
    pub fn containing(date: Date) -> Self {
        // Day 1 exists in every month.
        let first_day = date.replace_day(1).unwrap_or(date);

        Self { first_day }
    }

    /// The year of the month.
    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    /// The calendar month.
    pub fn month(self) -> Month {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(self) -> Date {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(self) -> Date {
        self.first_day
            .replace_day(last_day_of_month(self.year(), self.month()))
            .unwrap_or(self.first_day)
    }

    /// The month before this one, or `None` at the start of the supported calendar.
    pub fn previous(self) -> Option<Self> {
        self.first_day.previous_day().map(Self::containing)
    }

    /// The month after this one, or `None` at the end of the supported calendar.
    pub fn next(self) -> Option<Self> {
        self.last_day().next_day().map(Self::containing)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.len() != MONTH_STRING_LENGTH {
            return Err(Error::InvalidMonth(text.to_owned()));
        }

        Date::parse(&format!("{text}-01"), ISO_DATE_FORMAT)
            .map(|first_day| Self { first_day })
            .map_err(|_| Error::InvalidMonth(text.to_owned()))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), u8::from(self.month()))
    }
}

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not a valid calendar date in that format.
pub(crate) fn parse_iso_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), ISO_DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}
