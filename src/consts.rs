/// Latest supported year; years start at 1
pub const MAX_YEAR: u16 = 9999;
/// Last month of the year (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// February length in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Month lengths indexed by 1-based month; February is corrected for leap
/// years in `days_in_month`.
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Gregorian leap rule
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator of the canonical `YYYY-MM-DD` key
pub const DATE_SEPARATOR: char = '-';

/// Mean length of a synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_59;

/// Reference new moon, taken at 12:00 UTC.
pub const REFERENCE_NEW_MOON: (u16, u8, u8) = (2026, 1, 18);

/// Number of tithis in one synodic month
pub const TITHIS_PER_MONTH: u8 = 30;
/// Number of tithis in one paksha (fortnight)
pub const TITHIS_PER_PAKSHA: u8 = 15;

/// Days shown per grid row, Sunday first
pub const DAYS_PER_WEEK: u8 = 7;

/// Fallback event shown on days with neither a festival nor an observance
pub const QUIET_DAY_NAME: &str = "No Major Festival";
/// Description of the quiet-day placeholder
pub const QUIET_DAY_DESC: &str = "a peaceful day for daily rituals";
/// Type label of the quiet-day placeholder
pub const QUIET_DAY_TYPE: &str = "Daily Darshan";

/// Long date layout used for day details (en-IN: weekday, day month year)
pub const LONG_DATE_FORMAT: &str = "%A, %-d %B %Y";
