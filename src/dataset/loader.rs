//! Dataset Loader
//!
//! Reads the survey CSV into a [`Dataset`]. Columns are resolved by their
//! exact header names once per file; a column missing from the header makes
//! that field `None` for every record rather than failing the load.

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, LabelField, NumericField, SleepRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Header of the optional survey date column
pub const DATE_COLUMN: &str = "Date";

/// Maximum number of row errors kept in a [`LoadReport`]
const MAX_REPORTED_ERRORS: usize = 100;

/// CSV loader for the sleep survey file
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    /// Field delimiter
    delimiter: u8,
}

/// Diagnostics collected while loading
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Data rows successfully decoded into records
    pub rows_read: usize,
    /// Rows the CSV reader rejected
    pub rows_failed: usize,
    /// Non-empty numeric cells that were not a finite number
    pub invalid_numeric_cells: usize,
    /// Non-empty date cells that matched no known format
    pub invalid_date_cells: usize,
    /// Expected headers not present in the file
    pub missing_columns: Vec<String>,
    /// First row-level error messages
    pub errors: Vec<String>,
}

/// A loaded dataset together with its load diagnostics
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub report: LoadReport,
}

/// Header positions resolved once per file
#[derive(Debug)]
struct ColumnMap {
    numeric: Vec<(NumericField, usize)>,
    labels: Vec<(LabelField, usize)>,
    date: Option<usize>,
    missing: Vec<String>,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Self {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };

        let mut missing = Vec::new();

        let mut numeric = Vec::new();
        for &field in NumericField::all() {
            match position(field.column()) {
                Some(idx) => numeric.push((field, idx)),
                None => missing.push(field.column().to_string()),
            }
        }

        let mut labels = Vec::new();
        for &field in LabelField::all() {
            match position(field.column()) {
                Some(idx) => labels.push((field, idx)),
                None => missing.push(field.column().to_string()),
            }
        }

        Self {
            numeric,
            labels,
            date: position(DATE_COLUMN),
            missing,
        }
    }
}

/// Outcome of coercing one numeric cell
enum NumericCell {
    Empty,
    Value(f64),
    Invalid,
}

fn parse_numeric(raw: &str) -> NumericCell {
    let raw = raw.trim();
    if raw.is_empty() {
        return NumericCell::Empty;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => NumericCell::Value(v),
        _ => NumericCell::Invalid,
    }
}

/// Parse a survey date using the formats survey exports commonly use
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let date_formats = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Create a loader for comma-separated files
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load the dataset file
    pub async fn load(&self, path: &Path) -> DatasetResult<LoadOutcome> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DatasetError::NotFound(path.to_path_buf())
            } else {
                DatasetError::Io(e)
            }
        })?;

        let outcome = self.from_reader(bytes.as_slice())?;

        tracing::info!(
            path = %path.display(),
            records = outcome.dataset.len(),
            rows_failed = outcome.report.rows_failed,
            "Loaded sleep dataset"
        );

        Ok(outcome)
    }

    /// Load the dataset file, degrading to an empty dataset on failure
    ///
    /// Aggregations treat an empty dataset as "nothing to display", so a
    /// failed load needs no further handling downstream.
    pub async fn load_or_empty(&self, path: &Path) -> Dataset {
        match self.load(path).await {
            Ok(outcome) => outcome.dataset,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load dataset");
                Dataset::empty()
            }
        }
    }

    /// Load from a CSV string (useful for testing)
    pub fn from_csv_str(&self, csv_data: &str) -> DatasetResult<LoadOutcome> {
        self.from_reader(csv_data.as_bytes())
    }

    /// Decode CSV from any reader
    pub fn from_reader<R: Read>(&self, reader: R) -> DatasetResult<LoadOutcome> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns = ColumnMap::resolve(&headers);

        if !columns.missing.is_empty() {
            tracing::warn!(
                missing = ?columns.missing,
                "Dataset is missing expected columns; those fields will be empty"
            );
        }

        let mut records = Vec::new();
        let mut report = LoadReport {
            missing_columns: columns.missing.clone(),
            ..LoadReport::default()
        };

        for (line_num, result) in reader.records().enumerate() {
            // header is line 1
            let actual_line = line_num + 2;

            let row = match result {
                Ok(r) => r,
                Err(e) => {
                    report.errors.push(format!("Line {}: {}", actual_line, e));
                    report.rows_failed += 1;
                    continue;
                }
            };

            records.push(decode_row(&row, &columns, actual_line, &mut report));
            report.rows_read += 1;
        }

        if report.errors.len() > MAX_REPORTED_ERRORS {
            let total = report.errors.len();
            report.errors.truncate(MAX_REPORTED_ERRORS);
            report
                .errors
                .push(format!("... and {} more errors", total - MAX_REPORTED_ERRORS));
        }

        Ok(LoadOutcome {
            dataset: Dataset::new(records),
            report,
        })
    }
}

fn decode_row(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    line: usize,
    report: &mut LoadReport,
) -> SleepRecord {
    let mut record = SleepRecord::new();

    for &(field, idx) in &columns.numeric {
        match row.get(idx).map(parse_numeric) {
            Some(NumericCell::Value(v)) => record.set_numeric(field, Some(v)),
            Some(NumericCell::Invalid) => {
                tracing::debug!(line, field = %field, "Unparsable numeric cell");
                report.invalid_numeric_cells += 1;
            }
            Some(NumericCell::Empty) | None => {}
        }
    }

    for &(field, idx) in &columns.labels {
        record.set_label(field, row.get(idx).map(str::to_string));
    }

    if let Some(idx) = columns.date {
        if let Some(raw) = row.get(idx).filter(|s| !s.trim().is_empty()) {
            record.date = parse_date(raw);
            if record.date.is_none() {
                tracing::debug!(line, value = raw, "Unparsable date cell");
                report.invalid_date_cells += 1;
            }
        }
    }

    record
}
