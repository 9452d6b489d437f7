//! Expense ledger repository for CSV storage
//!
//! Manages loading and saving the ledger to expenses.csv. The file has a
//! header row `date,amount,category,description` and one row per expense in
//! insertion order. Every save rewrites the whole file.

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseCategory, ExpenseRecord, Money};

use super::file_io::{read_if_exists, write_atomic};

/// Column names, in file order
pub const LEDGER_HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// Timestamp format written to the `date` column
const TIMESTAMP_WRITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Naive timestamp formats accepted when reading, tried in order
const TIMESTAMP_READ_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// One CSV row as stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRow {
    date: String,
    amount: String,
    category: String,
    #[serde(default)]
    description: String,
}

impl LedgerRow {
    fn from_record(record: &ExpenseRecord) -> Self {
        Self {
            date: record.timestamp.format(TIMESTAMP_WRITE_FORMAT).to_string(),
            amount: record.amount.to_plain_string(),
            category: record.category.label().to_string(),
            description: record.description.clone(),
        }
    }

    /// Convert to a typed record; `row` is the 1-based data row number
    fn into_record(self, row: usize) -> TrackerResult<ExpenseRecord> {
        let timestamp = parse_timestamp(&self.date).ok_or_else(|| {
            TrackerError::corrupt_row(row, format!("invalid date '{}'", self.date))
        })?;

        let amount = Money::parse(&self.amount).map_err(|e| {
            TrackerError::corrupt_row(row, format!("invalid amount '{}': {}", self.amount, e))
        })?;
        if amount.is_negative() {
            return Err(TrackerError::corrupt_row(
                row,
                format!("negative amount '{}'", self.amount),
            ));
        }

        let category: ExpenseCategory = self
            .category
            .parse()
            .map_err(|e| TrackerError::corrupt_row(row, format!("{}", e)))?;

        Ok(ExpenseRecord::new(
            timestamp,
            amount,
            category,
            self.description,
        ))
    }
}

/// Parse a stored timestamp
///
/// Accepts `YYYY-MM-DD HH:MM[:SS[.ffffff]]` with a space or `T` separator,
/// RFC 3339 with an offset (converted to local time), and a bare date
/// (midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for format in TIMESTAMP_READ_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Local).naive_local());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse ledger CSV contents into records, failing on the first bad row
pub fn parse_ledger(contents: &str) -> TrackerResult<Vec<ExpenseRecord>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<LedgerRow>().enumerate() {
        let row = index + 1;
        let raw = result.map_err(|e| TrackerError::corrupt_row(row, e.to_string()))?;
        records.push(raw.into_record(row)?);
    }

    Ok(records)
}

/// Repository for the expense ledger
pub struct LedgerRepository {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl LedgerRepository {
    /// Create a new, empty ledger repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Whether the ledger file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the in-memory ledger with the file contents
    ///
    /// A missing file loads as an empty ledger.
    pub fn load(&mut self) -> TrackerResult<()> {
        self.records = match read_if_exists(&self.path)? {
            Some(contents) => parse_ledger(&contents)?,
            None => Vec::new(),
        };
        debug!(path = %self.path.display(), count = self.records.len(), "loaded ledger");
        Ok(())
    }

    /// Rewrite the whole ledger file from memory
    pub fn save(&self) -> TrackerResult<()> {
        write_atomic(&self.path, |writer| {
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *writer);

            csv_writer.write_record(LEDGER_HEADER)?;
            for record in &self.records {
                csv_writer.serialize(LedgerRow::from_record(record))?;
            }
            csv_writer.flush()?;
            Ok(())
        })?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved ledger");
        Ok(())
    }

    /// Append a record in memory (call `save` to persist)
    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
