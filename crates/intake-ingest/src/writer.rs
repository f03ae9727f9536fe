//! Delimited-text record encoding.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use intake_model::{CsvDialect, RecordSchema};
use tracing::debug;

use crate::dialect::{DialectBytes, encode_cell, writer_builder};
use crate::error::{IngestError, Result};

/// Writer producing rows in a given dialect.
pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
    bytes: DialectBytes,
    rows_written: u64,
}

impl RowWriter<File> {
    /// Create (or truncate) a file on disk.
    pub fn create(path: &Path, dialect: &CsvDialect) -> Result<Self> {
        let (builder, bytes) = writer_builder(dialect)?;
        let file = File::create(path).map_err(|err| IngestError::Writer {
            message: format!("cannot create {}: {err}", path.display()),
        })?;
        debug!(path = %path.display(), "opened destination");
        Ok(Self {
            inner: builder.from_writer(file),
            bytes,
            rows_written: 0,
        })
    }
}

impl<W: Write> RowWriter<W> {
    pub fn from_writer(destination: W, dialect: &CsvDialect) -> Result<Self> {
        let (builder, bytes) = writer_builder(dialect)?;
        Ok(Self {
            inner: builder.from_writer(destination),
            bytes,
            rows_written: 0,
        })
    }

    /// Write `P`'s field names as the header row.
    pub fn write_header<P: RecordSchema>(&mut self) -> Result<()> {
        self.write_row(P::fields())
    }

    /// Write one record as a data row.
    pub fn write_record<P: RecordSchema>(&mut self, record: &P) -> Result<()> {
        self.write_cells(record.to_cells())
    }

    /// Write raw cells as a data row.
    pub fn write_cells<I, T>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.write_row(cells)?;
        self.rows_written += 1;
        Ok(())
    }

    fn write_row<I, T>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        for cell in cells {
            self.inner
                .write_field(encode_cell(cell.as_ref(), &self.bytes))
                .map_err(|err| IngestError::writer(&err))?;
        }
        self.inner
            .write_record(std::iter::empty::<&[u8]>())
            .map_err(|err| IngestError::writer(&err))
    }

    /// Data rows written so far, header excluded.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the destination.
    pub fn into_inner(self) -> Result<W> {
        self.inner.into_inner().map_err(|err| IngestError::Writer {
            message: format!("I/O error: {}", err.error()),
        })
    }
}
