//! In-memory store of waste records, loaded once and read-only afterwards.
//!
//! The store keeps rows in source order and indexes the distinct zone names in
//! the order they first appear, which is the order the report lists them in.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::DataLoadError;
use crate::record::{
    parse_quantity, parse_record_date, WasteRecord, BIODEGRADABLE_COLUMN, DATE_COLUMN,
    NON_BIODEGRADABLE_COLUMN, WASTE_COLUMN, ZONE_COLUMN,
};
use crate::series::TrendPoint;


// ---------------------------------------------------------------------------
// Column lookup
// ---------------------------------------------------------------------------

/// Positions of the required columns within the header row.
struct ColumnIndex {
    date: usize,
    zone: usize,
    waste: usize,
    biodegradable: usize,
    non_biodegradable: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DataLoadError::MissingColumn(name))
        };
        Ok(Self {
            date: find(DATE_COLUMN)?,
            zone: find(ZONE_COLUMN)?,
            waste: find(WASTE_COLUMN)?,
            biodegradable: find(BIODEGRADABLE_COLUMN)?,
            non_biodegradable: find(NON_BIODEGRADABLE_COLUMN)?,
        })
    }

    fn parse_row(&self, row: &StringRecord) -> Result<WasteRecord, DataLoadError> {
        let line = row.position().map_or(0, |p| p.line());
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let raw_date = cell(self.date);
        let date = parse_record_date(raw_date).ok_or_else(|| DataLoadError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        let number = |idx: usize, column: &'static str| {
            let raw = cell(idx);
            parse_quantity(raw).ok_or_else(|| DataLoadError::InvalidNumber {
                line,
                column,
                value: raw.to_string(),
            })
        };

        Ok(WasteRecord {
            date,
            zone: cell(self.zone).to_string(),
            waste_kg: number(self.waste, WASTE_COLUMN)?,
            biodegradable_percent: number(self.biodegradable, BIODEGRADABLE_COLUMN)?,
            non_biodegradable_percent: number(self.non_biodegradable, NON_BIODEGRADABLE_COLUMN)?,
        })
    }
}

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// Ordered, immutable collection of [`WasteRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<WasteRecord>,
    zones: Vec<String>,
}

impl RecordStore {
    /// Load records from a CSV file. The file handle is released before
    /// returning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            records = store.len(),
            zones = store.zones.len(),
            "loaded waste records"
        );
        Ok(store)
    }

    /// Parse CSV from any reader. Any bad row rejects the whole source.
    ///
    /// Header names and date/number cells are trimmed; zone names are kept
    /// exactly as written.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let columns = ColumnIndex::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for row in reader.records() {
            records.push(columns.parse_row(&row?)?);
        }
        Ok(Self::from_records(records))
    }

    /// Build a store from already-typed records, keeping their order.
    pub fn from_records(records: Vec<WasteRecord>) -> Self {
        let zones = {
            let mut seen = HashSet::new();
            records
                .iter()
                .filter(|r| seen.insert(r.zone.as_str()))
                .map(|r| r.zone.clone())
                .collect()
        };
        Self { records, zones }
    }

    /// All records in source order.
    pub fn records(&self) -> &[WasteRecord] {
        &self.records
    }

    /// Number of records loaded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True for a header-only source.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct zone names in first-seen order.
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// Records whose zone matches `zone` exactly, in source order. Unknown
    /// zones yield nothing.
    pub fn records_for<'a>(&'a self, zone: &'a str) -> impl Iterator<Item = &'a WasteRecord> + 'a {
        self.records.iter().filter(move |r| r.zone == zone)
    }

    /// Daily waste totals across every zone, ascending by date.
    pub fn all_records_by_date(&self) -> Vec<TrendPoint> {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for r in &self.records {
            *totals.entry(r.date).or_insert(0.0) += r.waste_kg;
        }
        totals
            .into_iter()
            .map(|(date, waste_kg)| TrendPoint { date, waste_kg })
            .collect()
    }

    /// Earliest and latest observation dates, if any records exist.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}
