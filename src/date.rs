//! Gregorian calendar days keyed by their canonical `YYYY-MM-DD` string.

use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::consts::{DATE_SEPARATOR, LONG_DATE_FORMAT, MAX_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, Year};

/// A single Gregorian calendar day.
///
/// Two dates are equal exactly when their keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-12)", "_0")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from numeric components.
    ///
    /// # Errors
    /// Returns the `ParseError` for whichever component is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month.get())?;
        Self::from_parts(year, month, day)
    }

    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
        .map(Self)
        .ok_or(ParseError::InvalidDay {
            month: month.get(),
            day: day.get(),
            year: year.get(),
        })
    }

    /// Wraps a chrono date, rejecting years outside `1..=MAX_YEAR`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for years past `MAX_YEAR` and
    /// `ParseError::InvalidFormat` for years before 1 CE.
    pub fn from_naive(date: NaiveDate) -> Result<Self, ParseError> {
        let year =
            u16::try_from(date.year()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Year::new(year)?;
        Ok(Self(date))
    }

    /// Today's date on the local clock.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the system clock is outside `1..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::from_naive(Local::now().date_naive())
    }

    /// Every day of the given month, in order.
    pub fn days_of_month(year: Year, month: Month) -> impl Iterator<Item = Self> {
        NaiveDate::from_ymd_opt(i32::from(year.get()), u32::from(month.get()), 1)
            .into_iter()
            .flat_map(|first| {
                first
                    .iter_days()
                    .take_while(move |d| d.month() == first.month())
            })
            .map(Self)
    }

    /// Canonical `YYYY-MM-DD` key
    pub fn key(&self) -> String {
        self.to_string()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn year(&self) -> Year {
        // Construction guarantees 1..=MAX_YEAR
        Year::new(self.0.year() as u16).unwrap_or_else(|_| unreachable!("year validated on construction"))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> Month {
        Month::new(self.0.month() as u8).unwrap_or_else(|_| unreachable!("chrono months are 1-12"))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Weekday number with Sunday as 0
    #[allow(clippy::cast_possible_truncation)]
    pub fn weekday_from_sunday(&self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// Whole days from `other` to `self` (negative when `self` is earlier).
    pub fn days_since(&self, other: &Self) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Long form used on day details, e.g. `Sunday, 18 January 2026`.
    pub fn long_display(&self) -> String {
        self.0.format(LONG_DATE_FORMAT).to_string()
    }

    /// Whether this date falls in the given month.
    pub fn in_month(&self, year: Year, month: Month) -> bool {
        self.year() == year && self.month() == month
    }

    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY-MM-DD, found {} {} separators in {trimmed}",
                parts.len().saturating_sub(1),
                DATE_SEPARATOR
            )));
        };

        let year = parse_field(year, 4)?;
        let month = parse_field(month, 2)?;
        let day = parse_field(day, 2)?;

        let month = u8::try_from(month).map_err(|_| ParseError::InvalidMonth(u8::MAX))?;
        let day = u8::try_from(day).map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        Self::new(year, month, day)
    }
}

/// Parses a fixed-width, all-digit field.
fn parse_field(s: &str, width: usize) -> Result<u16, ParseError> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
