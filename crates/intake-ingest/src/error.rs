//! Error types for delimited-text decoding and encoding.

use std::path::PathBuf;

use intake_model::RowPosition;
use thiserror::Error;

/// Errors raised while reading or writing delimited text.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Reader Errors ===
    /// Dialect characters cannot configure a reader.
    #[error("CsvReader invalid argument error: {message}.")]
    InvalidArgument { message: String },

    /// The header line could not be parsed.
    #[error("Headers are invalid: {message}.")]
    HeaderSyntax { message: String },

    /// The header line does not equal the schema field list.
    #[error("Headers are invalid: Headers must be equal to scheme: \"{expected}\".")]
    InvalidHeaders {
        expected: String,
        found: Vec<String>,
    },

    /// Source file could not be opened.
    #[error("CsvReader error: cannot open {path}: {source}.")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row could not be decoded.
    #[error("CsvReader error: {message}.")]
    Reader {
        row: Option<RowPosition>,
        message: String,
    },

    // === Writer Errors ===
    /// Dialect characters cannot configure a writer.
    #[error("CsvWriter invalid argument error: {message}.")]
    WriterInvalidArgument { message: String },

    /// Encoding or I/O failure while writing.
    #[error("CsvWriter error: {message}.")]
    Writer { message: String },
}

impl IngestError {
    /// Whether the error concerns the header rather than the data rows.
    pub fn is_header_error(&self) -> bool {
        matches!(self, Self::HeaderSyntax { .. } | Self::InvalidHeaders { .. })
    }

    pub(crate) fn reader_at(row: RowPosition, err: &csv::Error) -> Self {
        Self::Reader {
            row: Some(row),
            message: format!("row {row}: {}", describe(err)),
        }
    }

    pub(crate) fn header_syntax(err: &csv::Error) -> Self {
        Self::HeaderSyntax {
            message: describe(err),
        }
    }

    pub(crate) fn writer(err: &csv::Error) -> Self {
        Self::Writer {
            message: describe(err),
        }
    }
}

/// Render a csv error without the crate's position prefix noise.
fn describe(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Io(io) => format!("I/O error: {io}"),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
        _ => err.to_string(),
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        Self::Writer {
            message: format!("I/O error: {err}"),
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
