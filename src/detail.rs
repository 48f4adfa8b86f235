//! Day Detail Resolver: everything shown when a single day is selected.

use serde::Serialize;

use crate::catalog::FestivalCatalog;
use crate::date::CalendarDate;
use crate::lunar::{Language, Tithi, tithi};
use crate::resolve::{DayEvent, resolve};

/// Everything shown for a selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetail {
    pub date: CalendarDate,
    /// Long en-IN date, e.g. `Sunday, 18 January 2026`.
    pub display_date: String,
    pub tithi: Tithi,
    pub event: DayEvent,
}

impl DayDetail {
    pub fn tithi_label(&self, language: Language) -> String {
        self.tithi.label(language)
    }
}

/// Builds the detail for `date`: long display date, tithi and resolved event.
pub fn detail(date: &CalendarDate, catalog: &FestivalCatalog) -> DayDetail {
    DayDetail {
        date: *date,
        display_date: date.long_display(),
        tithi: tithi(date),
        event: resolve(date, catalog),
    }
}
