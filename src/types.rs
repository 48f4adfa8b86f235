//! Range-checked calendar components and Gregorian month arithmetic.

use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use crate::date::ParseError;

/// Calendar year in `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// `ParseError::InvalidYear` outside `1..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        NonZeroU16::new(value)
            .filter(|_| value <= MAX_YEAR)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Following year, `None` after `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }

    /// Preceding year, `None` before year 1.
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get().checked_sub(1)?).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// Calendar month, 1 = January.
///
/// Presentation layers that count months from zero go through
/// [`Month::from_index`] and [`Month::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// `ParseError::InvalidMonth` outside `1..=12`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|_| value <= MAX_MONTH)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Month from a 0-based index (0 = January).
    ///
    /// # Errors
    /// `ParseError::InvalidMonth` when `index >= 12`.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        Self::new(index.saturating_add(1))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// Day of month, checked against the length of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// `ParseError::InvalidDay` when `value` is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|_| value <= days_in_month(year, month))
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                month,
                day: value,
                year,
            })
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    year % GREGORIAN_CYCLE == 0 || (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0)
}

/// Length of `month` in `year`. `month` must be `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month >= JANUARY && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        return FEBRUARY_DAYS_LEAP;
    }
    DAYS_IN_MONTH[month as usize]
}

/// The month after `(year, month)`, or `None` past `MAX_YEAR`.
pub fn next_month(year: Year, month: Month) -> Option<(Year, Month)> {
    match month.get() {
        DECEMBER => Some((year.succ()?, Month::new(JANUARY).ok()?)),
        m => Some((year, Month::new(m + 1).ok()?)),
    }
}

/// The month before `(year, month)`, or `None` before year 1.
pub fn previous_month(year: Year, month: Month) -> Option<(Year, Month)> {
    match month.get() {
        JANUARY => Some((year.pred()?, Month::new(DECEMBER).ok()?)),
        m => Some((year, Month::new(m - 1).ok()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(MAX_YEAR).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(MAX_YEAR + 1),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_succ_pred() {
        let y = Year::new(2026).unwrap();
        assert_eq!(y.succ().map(Year::get), Some(2027));
        assert_eq!(y.pred().map(Year::get), Some(2025));
        assert!(Year::new(MAX_YEAR).unwrap().succ().is_none());
        assert!(Year::new(1).unwrap().pred().is_none());
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(Year::new(987).unwrap().to_string(), "0987");
        assert_eq!(Month::new(3).unwrap().to_string(), "03");
        assert_eq!(Day::new(7, 2026, 3).unwrap().to_string(), "07");
    }

    #[test]
    fn test_month_bounds_and_index() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));

        for index in 0..12 {
            let month = Month::from_index(index).unwrap();
            assert_eq!(month.index(), index);
            assert_eq!(month.get(), index + 1);
        }
        assert!(Month::from_index(12).is_err());
        assert!(Month::from_index(u8::MAX).is_err());
    }

    #[test]
    fn test_month_and_year_serialize_as_numbers() {
        let json = serde_json::to_string(&(Year::new(2026).unwrap(), Month::new(10).unwrap())).unwrap();
        assert_eq!(json, "[2026,10]");
        assert!(serde_json::from_str::<Month>("0").is_err());
        assert!(serde_json::from_str::<Year>("10000").is_err());
    }

    #[test]
    fn test_day_against_month_length() {
        struct TestCase {
            day: u8,
            year: u16,
            month: u8,
            valid: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                day: 31,
                year: 2026,
                month: 10,
                valid: true,
                description: "last day of October",
            },
            TestCase {
                day: 31,
                year: 2026,
                month: 9,
                valid: false,
                description: "September has 30 days",
            },
            TestCase {
                day: 29,
                year: 2026,
                month: 2,
                valid: false,
                description: "common-year February",
            },
            TestCase {
                day: 29,
                year: 2000,
                month: 2,
                valid: true,
                description: "quadricentennial leap year",
            },
            TestCase {
                day: 29,
                year: 2100,
                month: 2,
                valid: false,
                description: "century without leap day",
            },
            TestCase {
                day: 0,
                year: 2026,
                month: 1,
                valid: false,
                description: "day zero",
            },
        ];

        for case in &cases {
            assert_eq!(
                Day::new(case.day, case.year, case.month).is_ok(),
                case.valid,
                "{}-{:02}-{:02} ({})",
                case.year,
                case.month,
                case.day,
                case.description
            );
        }
    }

    #[test]
    fn test_month_paging() {
        let ym = |y, m| (Year::new(y).unwrap(), Month::new(m).unwrap());
        let flat = |p: Option<(Year, Month)>| p.map(|(y, m)| (y.get(), m.get()));

        let (y, m) = ym(2026, 12);
        assert_eq!(flat(next_month(y, m)), Some((2027, 1)));
        let (y, m) = ym(2026, 2);
        assert_eq!(flat(next_month(y, m)), Some((2026, 3)));
        let (y, m) = ym(2026, 1);
        assert_eq!(flat(previous_month(y, m)), Some((2025, 12)));

        let (y, m) = ym(MAX_YEAR, 12);
        assert_eq!(flat(next_month(y, m)), None);
        let (y, m) = ym(1, 1);
        assert_eq!(flat(previous_month(y, m)), None);
    }
}
