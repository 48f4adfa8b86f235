//! Fixed-date festivals loaded from an external JSON array.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::date::CalendarDate;

/// One festival as published in the catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalRecord {
    pub date: CalendarDate,
    pub name: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub festival_type: String,
}

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The resource could not be read.
    #[error("failed to read festival catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The resource is not valid JSON.
    #[error("festival catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The resource is JSON but not an array of records.
    #[error("festival catalog must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Read-only, date-keyed set of festivals.
///
/// When the source lists a date more than once, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct FestivalCatalog {
    records: Vec<FestivalRecord>,
    by_date: HashMap<CalendarDate, usize>,
}

impl FestivalCatalog {
    /// An empty catalog; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = FestivalRecord>) -> Self {
        let records: Vec<FestivalRecord> = records.into_iter().collect();
        let mut by_date = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if by_date.contains_key(&record.date) {
                warn!(date = %record.date, name = %record.name, "duplicate festival date, keeping first");
                continue;
            }
            by_date.insert(record.date, i);
        }
        Self { records, by_date }
    }

    /// Parses a JSON array, skipping entries that are not valid records.
    ///
    /// # Errors
    /// Returns `CatalogError::Json` for malformed JSON and
    /// `CatalogError::NotAnArray` when the top-level value is not an array.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Same as [`FestivalCatalog::from_json_str`] for any reader.
    ///
    /// # Errors
    /// See [`FestivalCatalog::from_json_str`]; I/O failures surface as `CatalogError::Json`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Loads the catalog from a JSON file.
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the file cannot be opened, otherwise as
    /// [`FestivalCatalog::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), festivals = catalog.len(), "festival catalog loaded");
        Ok(catalog)
    }

    /// Loads the catalog, falling back to an empty one on any failure.
    ///
    /// The failure is logged and otherwise swallowed: computed lunar events
    /// still work without festivals.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "festival catalog unavailable, using computed events only");
            Self::empty()
        })
    }

    fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Array(entries) = value else {
            return Err(CatalogError::NotAnArray(json_kind(&value)));
        };

        let total = entries.len();
        let records: Vec<FestivalRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(index = i, error = %err, "skipping malformed festival record");
                    None
                }
            })
            .collect();

        if records.len() < total {
            debug!(kept = records.len(), total, "festival catalog had malformed entries");
        }
        Ok(Self::from_records(records))
    }

    pub fn lookup(&self, date: &CalendarDate) -> Option<&FestivalRecord> {
        self.by_date.get(date).map(|&i| &self.records[i])
    }

    /// All records in source order, duplicates included.
    pub fn records(&self) -> &[FestivalRecord] {
        &self.records
    }

    /// Number of distinct festival dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
