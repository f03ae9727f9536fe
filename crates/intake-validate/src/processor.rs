//! Full-pass record processing with partial-failure accumulation.
//!
//! A pass moves through `HeaderCheck → RowIteration → End`:
//!
//! - header problems end the pass before any row is read
//! - each row is validated; violations are captured under the row position
//!   and iteration continues
//! - a decode error mid-stream ends the pass immediately
//! - once the sequence is exhausted the pass yields [`ProcessingOutcome`]

use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;
use std::time::Instant;

use intake_ingest::{RecordReader, Records};
use intake_model::{BatchViolations, CsvDialect, RecordSchema, RowPosition};
use tracing::{debug, info, info_span};

use crate::error::{ProcessError, RecordInvalid};
use crate::validator::validate_record;

/// Result of validating one record in isolation.
pub type RecordResult = Result<bool, RecordInvalid>;

/// Outcome of a complete pass over a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    /// No row violated a constraint.
    ///
    /// Carries the result of the last successful [`RecordProcessor::process_record`]
    /// call: `true` when at least one record was processed, `false` for a
    /// source without data rows. It says nothing about earlier rows.
    Success(bool),
    /// Every violating row, keyed by its original position.
    Failure(BatchViolations),
}

impl ProcessingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn violations(&self) -> Option<&BatchViolations> {
        match self {
            Self::Success(_) => None,
            Self::Failure(violations) => Some(violations),
        }
    }
}

/// Drives decoding and validation of sources holding records of type `P`.
#[derive(Debug, Clone)]
pub struct RecordProcessor<P> {
    dialect: CsvDialect,
    schema: PhantomData<fn() -> P>,
}

impl<P: RecordSchema> Default for RecordProcessor<P> {
    fn default() -> Self {
        Self::new(CsvDialect::default())
    }
}

impl<P: RecordSchema> RecordProcessor<P> {
    pub fn new(dialect: CsvDialect) -> Self {
        Self {
            dialect,
            schema: PhantomData,
        }
    }

    pub fn dialect(&self) -> &CsvDialect {
        &self.dialect
    }

    /// Check the header of `source` and return its record sequence.
    pub fn get_records<R: Read>(&self, source: R) -> Result<Records<R, P>, ProcessError> {
        let reader = RecordReader::from_reader(source, &self.dialect)?;
        Ok(reader.records::<P>()?)
    }

    /// [`RecordProcessor::get_records`] for a file on disk.
    pub fn get_records_from_path(&self, path: &Path) -> Result<Records<File, P>, ProcessError> {
        let reader = RecordReader::from_path(path, &self.dialect)?;
        Ok(reader.records::<P>()?)
    }

    /// Validate a single record.
    pub fn process_record(&self, record: &P) -> RecordResult {
        let violations = validate_record(record);
        if violations.is_empty() {
            Ok(true)
        } else {
            Err(RecordInvalid { violations })
        }
    }

    /// Validate every record of the sequence.
    ///
    /// Record violations never stop the iteration; decode errors do.
    pub fn process_records<I>(&self, records: I) -> Result<ProcessingOutcome, ProcessError>
    where
        I: IntoIterator<Item = intake_ingest::Result<(RowPosition, P)>>,
    {
        self.process_records_with(records, |_, _| {})
    }

    /// [`RecordProcessor::process_records`] with an observer called after each
    /// record is validated, e.g. to advance a progress bar.
    pub fn process_records_with<I, F>(
        &self,
        records: I,
        mut observer: F,
    ) -> Result<ProcessingOutcome, ProcessError>
    where
        I: IntoIterator<Item = intake_ingest::Result<(RowPosition, P)>>,
        F: FnMut(RowPosition, &RecordResult),
    {
        let start = Instant::now();
        let mut last_result = false;
        let mut violations = BatchViolations::new();
        let mut processed: u64 = 0;

        for item in records {
            let (position, record) = item?;
            let result = self.process_record(&record);
            observer(position, &result);
            processed += 1;
            match result {
                Ok(valid) => last_result = valid,
                Err(invalid) => {
                    debug!(
                        row = position,
                        violations = invalid.violations.len(),
                        "record failed validation"
                    );
                    violations.insert(position, invalid.violations);
                }
            }
        }

        info!(
            records = processed,
            invalid_rows = violations.len(),
            duration_ms = start.elapsed().as_millis(),
            "records processed"
        );

        if violations.is_empty() {
            Ok(ProcessingOutcome::Success(last_result))
        } else {
            Ok(ProcessingOutcome::Failure(violations))
        }
    }

    /// Check the header, then validate every record of `source`.
    pub fn process<R: Read>(&self, source: R) -> Result<ProcessingOutcome, ProcessError> {
        let span = info_span!("process");
        let _guard = span.enter();
        let records = self.get_records(source)?;
        self.process_records(records)
    }

    /// [`RecordProcessor::process`] for a file on disk.
    pub fn process_file(&self, path: &Path) -> Result<ProcessingOutcome, ProcessError> {
        let span = info_span!("process", path = %path.display());
        let _guard = span.enter();
        let records = self.get_records_from_path(path)?;
        self.process_records(records)
    }
}
