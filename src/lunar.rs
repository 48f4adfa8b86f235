//! Lunar clock: a fixed-period approximation of the moon's age.
//!
//! Every date is sampled at 12:00 UTC and measured against a reference new
//! moon. The synodic month is treated as constant, so accuracy drifts over
//! long spans; this is accepted, not corrected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{REFERENCE_NEW_MOON, SYNODIC_MONTH_DAYS, TITHIS_PER_MONTH, TITHIS_PER_PAKSHA};
use crate::date::CalendarDate;
use crate::prelude::*;

/// Days elapsed since the most recent reference new moon, in `[0, SYNODIC_MONTH_DAYS)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize)]
#[display(fmt = "{:.2}", _0)]
pub struct LunarAge(f64);

impl LunarAge {
    /// Wraps a raw day count into the synodic range.
    pub fn from_days(days: f64) -> Self {
        let mut age = days % SYNODIC_MONTH_DAYS;
        if age < 0.0 {
            age += SYNODIC_MONTH_DAYS;
        }
        // -1e-17 + 29.53059 rounds back up to the modulus
        if age >= SYNODIC_MONTH_DAYS {
            age = 0.0;
        }
        Self(age)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// The reference new moon as a calendar date.
fn reference_new_moon() -> CalendarDate {
    let (year, month, day) = REFERENCE_NEW_MOON;
    CalendarDate::new(year, month, day)
        .unwrap_or_else(|_| unreachable!("reference new moon is a valid date"))
}

/// Lunar age of `date`.
///
/// Both `date` and the reference are taken at the same UTC hour, so the
/// difference is a whole number of days.
#[allow(clippy::cast_precision_loss)]
pub fn lunar_age(date: &CalendarDate) -> LunarAge {
    let days = date.days_since(&reference_new_moon());
    LunarAge::from_days(days as f64)
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    #[display(fmt = "Shukla Paksha")]
    Shukla,
    /// Waning half, full moon to new moon.
    #[display(fmt = "Krishna Paksha")]
    Krishna,
}

impl Paksha {
    pub const fn hindi(self) -> &'static str {
        match self {
            Self::Shukla => "शुक्ल पक्ष",
            Self::Krishna => "कृष्ण पक्ष",
        }
    }
}

/// Display language for tithi labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

/// Error for a language code other than `en` or `hi`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0} (expected en or hi)")]
pub struct LanguageError(pub String);

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(LanguageError(other.to_owned())),
        }
    }
}

/// Tithi names 1..=14 of either paksha, English then Hindi.
const TITHI_NAMES: [(&str, &str); 14] = [
    ("Pratipada", "प्रतिपदा"),
    ("Dwitiya", "द्वितीया"),
    ("Tritiya", "तृतीया"),
    ("Chaturthi", "चतुर्थी"),
    ("Panchami", "पंचमी"),
    ("Shashthi", "षष्ठी"),
    ("Saptami", "सप्तमी"),
    ("Ashtami", "अष्टमी"),
    ("Navami", "नवमी"),
    ("Dashami", "दशमी"),
    ("Ekadashi", "एकादशी"),
    ("Dwadashi", "द्वादशी"),
    ("Trayodashi", "त्रयोदशी"),
    ("Chaturdashi", "चतुर्दशी"),
];

const PURNIMA: (&str, &str) = ("Purnima", "पूर्णिमा");
const AMAVASYA: (&str, &str) = ("Amavasya", "अमावस्या");

/// Lunar day derived from a [`LunarAge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tithi {
    /// 0-based index within the synodic month (0..30).
    index: u8,
}

impl Tithi {
    /// Splits the synodic month into thirty equal lunar days.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_age(age: LunarAge) -> Self {
        let span = SYNODIC_MONTH_DAYS / f64::from(TITHIS_PER_MONTH);
        let raw = (age.get() / span).floor() as u8;
        Self {
            index: raw.min(TITHIS_PER_MONTH - 1),
        }
    }

    pub const fn index(self) -> u8 {
        self.index
    }

    pub const fn paksha(self) -> Paksha {
        if self.index < TITHIS_PER_PAKSHA {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based position inside the paksha (1..=15).
    pub const fn in_paksha(self) -> u8 {
        self.index % TITHIS_PER_PAKSHA + 1
    }

    fn names(self) -> (&'static str, &'static str) {
        match (self.paksha(), self.in_paksha()) {
            (Paksha::Shukla, TITHIS_PER_PAKSHA) => PURNIMA,
            (Paksha::Krishna, TITHIS_PER_PAKSHA) => AMAVASYA,
            (_, n) => TITHI_NAMES[usize::from(n - 1)],
        }
    }

    /// Bare tithi name, e.g. `Ashtami`.
    pub fn name(self, language: Language) -> &'static str {
        let (en, hi) = self.names();
        match language {
            Language::En => en,
            Language::Hi => hi,
        }
    }

    /// Full label, e.g. `Shukla Paksha Ashtami` or `शुक्ल पक्ष अष्टमी`.
    pub fn label(self, language: Language) -> String {
        let paksha = match language {
            Language::En => self.paksha().to_string(),
            Language::Hi => self.paksha().hindi().to_owned(),
        };
        format!("{paksha} {}", self.name(language))
    }
}

/// Tithi of `date`.
pub fn tithi(date: &CalendarDate) -> Tithi {
    Tithi::from_age(lunar_age(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_reference_date_is_new_moon() {
        let age = lunar_age(&date("2026-01-18"));
        assert!(age.get().abs() < EPSILON, "got {age}");
    }

    #[test]
    fn test_age_after_reference() {
        let age = lunar_age(&date("2026-01-28"));
        assert!((age.get() - 10.0).abs() < EPSILON);

        // 30 days later wraps past one synodic month
        let age = lunar_age(&date("2026-02-17"));
        assert!((age.get() - (30.0 - SYNODIC_MONTH_DAYS)).abs() < EPSILON);
    }

    #[test]
    fn test_age_before_reference_is_wrapped() {
        let age = lunar_age(&date("2026-01-17"));
        assert!((age.get() - (SYNODIC_MONTH_DAYS - 1.0)).abs() < EPSILON);

        let age = lunar_age(&date("1900-06-01"));
        assert!((0.0..SYNODIC_MONTH_DAYS).contains(&age.get()));
    }

    #[test]
    fn test_age_range_over_many_years() {
        let mut d = date("1990-01-01").as_naive();
        let end = date("2060-01-01").as_naive();
        while d < end {
            let age = lunar_age(&CalendarDate::from_naive(d).unwrap()).get();
            assert!((0.0..SYNODIC_MONTH_DAYS).contains(&age), "{d}: {age}");
            d = d.checked_add_days(chrono::Days::new(13)).unwrap();
        }
    }

    #[test]
    fn test_from_days_wraps_negative() {
        assert!((LunarAge::from_days(-0.5).get() - (SYNODIC_MONTH_DAYS - 0.5)).abs() < EPSILON);
        assert!(LunarAge::from_days(SYNODIC_MONTH_DAYS).get().abs() < EPSILON);
        assert!(LunarAge::from_days(-SYNODIC_MONTH_DAYS).get() < SYNODIC_MONTH_DAYS);
    }

    #[test]
    fn test_tithi_boundaries() {
        struct TestCase {
            age: f64,
            index: u8,
            paksha: Paksha,
            in_paksha: u8,
        }

        let span = SYNODIC_MONTH_DAYS / 30.0;
        let cases = [
            TestCase {
                age: 0.0,
                index: 0,
                paksha: Paksha::Shukla,
                in_paksha: 1,
            },
            TestCase {
                age: span * 7.5,
                index: 7,
                paksha: Paksha::Shukla,
                in_paksha: 8,
            },
            TestCase {
                age: span * 14.5,
                index: 14,
                paksha: Paksha::Shukla,
                in_paksha: 15,
            },
            TestCase {
                age: span * 15.0 + 1e-6,
                index: 15,
                paksha: Paksha::Krishna,
                in_paksha: 1,
            },
            TestCase {
                age: SYNODIC_MONTH_DAYS - 1e-9,
                index: 29,
                paksha: Paksha::Krishna,
                in_paksha: 15,
            },
        ];

        for case in &cases {
            let t = Tithi::from_age(LunarAge::from_days(case.age));
            assert_eq!(t.index(), case.index, "age {}", case.age);
            assert_eq!(t.paksha(), case.paksha, "age {}", case.age);
            assert_eq!(t.in_paksha(), case.in_paksha, "age {}", case.age);
        }
    }

    #[test]
    fn test_tithi_labels() {
        let span = SYNODIC_MONTH_DAYS / 30.0;
        let ashtami = Tithi::from_age(LunarAge::from_days(span * 7.5));
        assert_eq!(ashtami.label(Language::En), "Shukla Paksha Ashtami");
        assert_eq!(ashtami.label(Language::Hi), "शुक्ल पक्ष अष्टमी");

        let purnima = Tithi::from_age(LunarAge::from_days(span * 14.5));
        assert_eq!(purnima.name(Language::En), "Purnima");

        let amavasya = Tithi::from_age(LunarAge::from_days(span * 29.5));
        assert_eq!(amavasya.label(Language::En), "Krishna Paksha Amavasya");
        assert_eq!(amavasya.label(Language::Hi), "कृष्ण पक्ष अमावस्या");
    }

    #[test]
    fn test_tithi_for_reference_date() {
        let t = tithi(&date("2026-01-18"));
        assert_eq!(t.label(Language::En), "Shukla Paksha Pratipada");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!(" HI ".parse::<Language>(), Ok(Language::Hi));
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err, LanguageError("fr".to_owned()));
        assert_eq!(err.to_string(), "unsupported language: fr (expected en or hi)");
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), r#""hi""#);
        let parsed: Language = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(parsed, Language::En);
    }
}
