//! Parameters of a generation run.

use std::path::{Path, PathBuf};

use intake_model::CsvDialect;

use crate::error::{GenerateError, Result};

pub const DEFAULT_NUMBER_OF_RECORDS: u64 = 100;
pub const MAX_NUMBER_OF_RECORDS: u64 = 3_000_000;

/// What to generate and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Destination folder.
    pub folder: String,
    /// Requested record count. One row fewer than this is written.
    pub number_of_records: u64,
    pub dialect: CsvDialect,
}

impl GenerateRequest {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            number_of_records: DEFAULT_NUMBER_OF_RECORDS,
            dialect: CsvDialect::default(),
        }
    }

    pub fn with_number_of_records(mut self, number_of_records: u64) -> Self {
        self.number_of_records = number_of_records;
        self
    }

    pub fn with_dialect(mut self, dialect: CsvDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Check the request before any I/O happens.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.folder.trim().is_empty() {
            errors.push("pathToCsvFolder: This value should not be blank.".to_string());
        }
        if self.number_of_records > MAX_NUMBER_OF_RECORDS {
            errors.push(format!(
                "numberOfRecords: This value should be less than or equal to {MAX_NUMBER_OF_RECORDS}."
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(GenerateError::InvalidRequest(errors))
        }
    }

    /// Number of data rows a run writes. Ids run from 1 to
    /// `number_of_records - 1`.
    pub fn rows_to_write(&self) -> u64 {
        self.number_of_records.saturating_sub(1)
    }

    /// `<folder>/test_csv_<count>_records_<unix_time>.csv`
    pub fn output_path(&self, unix_time: i64) -> PathBuf {
        Path::new(&self.folder).join(format!(
            "test_csv_{}_records_{unix_time}.csv",
            self.number_of_records
        ))
    }
}
