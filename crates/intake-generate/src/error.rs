//! Error types for file generation.

use std::io;
use std::path::PathBuf;

use intake_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request failed validation; nothing was written.
    #[error("CSV generator validation errors: {}", .0.join(" "))]
    InvalidRequest(Vec<String>),

    /// The destination folder cannot be accessed.
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening or writing the destination failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
