//! Temple festival calendar.
//!
//! Combines a fixed-date festival catalog with recurring lunar observances
//! (Ekadashi, Pradosh, Purnima, Amavasya, Sankashti) detected from a
//! fixed-period lunar clock, and lays the result out as a month grid.
//!
//! ```
//! use festival_calendar::{Calendar, CalendarDate, EventSource, FestivalCatalog};
//!
//! let calendar = Calendar::new(FestivalCatalog::empty());
//! let date: CalendarDate = "2026-01-28".parse().unwrap();
//! let event = calendar.resolve(&date);
//! assert_eq!(event.name, "Ekadashi Vrat");
//! assert_eq!(event.source, EventSource::Computed);
//! ```

mod consts;
mod prelude;

pub mod catalog;
pub mod date;
pub mod detail;
pub mod event;
pub mod grid;
pub mod lunar;
pub mod resolve;
pub mod types;
pub mod view;

pub use catalog::{CatalogError, FestivalCatalog, FestivalRecord};
pub use consts::*;
pub use date::{CalendarDate, ParseError};
pub use detail::{DayDetail, detail};
pub use event::{LUNAR_EVENTS, LunarEventKind, classify};
pub use grid::{DayCell, GridCell, MonthGrid, build_grid};
pub use lunar::{Language, LanguageError, LunarAge, Paksha, Tithi, lunar_age, tithi};
pub use resolve::{DayEvent, EventSource, resolve};
pub use types::{Day, Month, Year};
pub use view::{CalendarViewState, ViewAction, ViewError};

/// A loaded festival catalog together with the operations that consult it.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    catalog: FestivalCatalog,
}

impl Calendar {
    pub const fn new(catalog: FestivalCatalog) -> Self {
        Self { catalog }
    }

    pub const fn catalog(&self) -> &FestivalCatalog {
        &self.catalog
    }

    /// Authoritative event for `date`.
    pub fn resolve(&self, date: &CalendarDate) -> DayEvent {
        resolve::resolve(date, &self.catalog)
    }

    pub fn grid(
        &self,
        year: Year,
        month: Month,
        today: &CalendarDate,
        selected: Option<&CalendarDate>,
    ) -> MonthGrid {
        grid::build_grid(year, month, &self.catalog, today, selected)
    }

    pub fn detail(&self, date: &CalendarDate) -> DayDetail {
        detail::detail(date, &self.catalog)
    }

    /// Days of the month that carry a festival or an observance, in order.
    pub fn events_in_month(&self, year: Year, month: Month) -> Vec<(CalendarDate, DayEvent)> {
        CalendarDate::days_of_month(year, month)
            .map(|date| (date, self.resolve(&date)))
            .filter(|(_, event)| event.is_event())
            .collect()
    }
}

impl From<FestivalCatalog> for Calendar {
    fn from(catalog: FestivalCatalog) -> Self {
        Self::new(catalog)
    }
}
