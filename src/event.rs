//! Recurring lunar observances and the fixed windows that detect them.

use serde::Serialize;

use crate::consts::SYNODIC_MONTH_DAYS;
use crate::lunar::LunarAge;
use crate::prelude::*;

/// Observance derived purely from the lunar age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum LunarEventKind {
    Ekadashi,
    Pradosh,
    Purnima,
    Amavasya,
    Sankashti,
}

/// A span of lunar age in days. The start is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
    pub end_inclusive: bool,
}

impl Window {
    const fn closed(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            end_inclusive: true,
        }
    }

    const fn half_open(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            end_inclusive: false,
        }
    }

    pub fn contains(&self, age: f64) -> bool {
        if age < self.start {
            return false;
        }
        if self.end_inclusive {
            age <= self.end
        } else {
            age < self.end
        }
    }

    /// Whether the two windows share at least one age.
    pub fn overlaps(&self, other: &Self) -> bool {
        other.contains(self.start) || self.contains(other.start)
    }
}

/// One row of the observance table.
#[derive(Debug, Clone, Copy)]
pub struct EventEntry {
    pub kind: LunarEventKind,
    pub windows: &'static [Window],
    pub name: &'static str,
    pub desc: &'static str,
    pub event_type: &'static str,
}

impl EventEntry {
    pub fn matches(&self, age: LunarAge) -> bool {
        self.windows.iter().any(|w| w.contains(age.get()))
    }
}

/// Observances in priority order. The first matching row wins, so the order
/// is part of the classifier's behavior.
pub static LUNAR_EVENTS: [EventEntry; 5] = [
    EventEntry {
        kind: LunarEventKind::Ekadashi,
        windows: &[Window::closed(10.0, 11.0), Window::closed(24.5, 25.5)],
        name: "Ekadashi Vrat",
        desc: "Day of Lord Vishnu. Fasting grants merit.",
        event_type: "Vrat",
    },
    EventEntry {
        kind: LunarEventKind::Pradosh,
        windows: &[Window::closed(11.8, 12.8), Window::closed(26.5, 27.5)],
        name: "Pradosh Vrat",
        desc: "Evening worship of Lord Shiva. Lamps are lit at twilight.",
        event_type: "Vrat",
    },
    EventEntry {
        kind: LunarEventKind::Purnima,
        windows: &[Window::closed(13.8, 14.8)],
        name: "Purnima",
        desc: "Full Moon. Auspicious for Satyanarayan Katha and charity.",
        event_type: "Full Moon",
    },
    EventEntry {
        kind: LunarEventKind::Amavasya,
        // Wraps the end of the synodic month back to zero
        windows: &[
            Window::half_open(28.5, SYNODIC_MONTH_DAYS),
            Window::closed(0.0, 0.5),
        ],
        name: "Amavasya",
        desc: "New Moon. A day for remembering ancestors.",
        event_type: "New Moon",
    },
    EventEntry {
        kind: LunarEventKind::Sankashti,
        windows: &[Window::closed(17.5, 18.5)],
        name: "Sankashti Chaturthi",
        desc: "Day of Lord Ganesha. The fast is broken after moonrise.",
        event_type: "Vrat",
    },
];

impl LunarEventKind {
    pub fn entry(self) -> &'static EventEntry {
        // Every kind has exactly one row
        LUNAR_EVENTS
            .iter()
            .find(|e| e.kind == self)
            .unwrap_or_else(|| unreachable!("{self} missing from LUNAR_EVENTS"))
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn desc(self) -> &'static str {
        self.entry().desc
    }

    pub fn event_type(self) -> &'static str {
        self.entry().event_type
    }
}

/// First observance in [`LUNAR_EVENTS`] whose windows contain `age`.
pub fn classify(age: LunarAge) -> Option<LunarEventKind> {
    LUNAR_EVENTS
        .iter()
        .find(|entry| entry.matches(age))
        .map(|entry| entry.kind)
}
