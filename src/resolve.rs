//! Merges catalog festivals with computed lunar observances.

use serde::Serialize;

use crate::catalog::{FestivalCatalog, FestivalRecord};
use crate::consts::{QUIET_DAY_DESC, QUIET_DAY_NAME, QUIET_DAY_TYPE};
use crate::date::CalendarDate;
use crate::event::{LunarEventKind, classify};
use crate::lunar::lunar_age;
use crate::prelude::*;

/// Where a [`DayEvent`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    /// A fixed-date festival from the catalog.
    Catalog,
    /// A recurring observance computed from the lunar age.
    Computed,
    /// Neither; the quiet-day placeholder.
    None,
}

/// The single authoritative event shown for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEvent {
    pub name: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub source: EventSource,
    /// Set only when `source` is `Computed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunar_event: Option<LunarEventKind>,
}

impl DayEvent {
    /// Placeholder for days with nothing to observe.
    pub fn quiet() -> Self {
        Self {
            name: QUIET_DAY_NAME.to_owned(),
            desc: QUIET_DAY_DESC.to_owned(),
            event_type: QUIET_DAY_TYPE.to_owned(),
            source: EventSource::None,
            lunar_event: None,
        }
    }

    pub fn is_event(&self) -> bool {
        self.source != EventSource::None
    }
}

impl From<&FestivalRecord> for DayEvent {
    fn from(record: &FestivalRecord) -> Self {
        Self {
            name: record.name.clone(),
            desc: record.desc.clone(),
            event_type: record.festival_type.clone(),
            source: EventSource::Catalog,
            lunar_event: None,
        }
    }
}

impl From<LunarEventKind> for DayEvent {
    fn from(kind: LunarEventKind) -> Self {
        Self {
            name: kind.name().to_owned(),
            desc: kind.desc().to_owned(),
            event_type: kind.event_type().to_owned(),
            source: EventSource::Computed,
            lunar_event: Some(kind),
        }
    }
}

/// Resolves the event for `date`: a catalog festival always wins over a
/// computed observance, which wins over the quiet-day placeholder.
pub fn resolve(date: &CalendarDate, catalog: &FestivalCatalog) -> DayEvent {
    if let Some(record) = catalog.lookup(date) {
        return DayEvent::from(record);
    }
    classify(lunar_age(date)).map_or_else(DayEvent::quiet, DayEvent::from)
}
