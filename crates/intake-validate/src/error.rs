//! Error types for record processing.

use intake_ingest::IngestError;
use intake_model::FieldViolation;
use thiserror::Error;

/// Fail-fast errors: the input cannot be interpreted at all.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Header row is malformed or does not match the schema.
    #[error(transparent)]
    Schema(IngestError),

    /// Source cannot be decoded (syntax, encoding, I/O, dialect).
    #[error(transparent)]
    Decode(IngestError),
}

impl ProcessError {
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// The originating ingest error.
    pub fn source_error(&self) -> &IngestError {
        match self {
            Self::Schema(err) | Self::Decode(err) => err,
        }
    }
}

impl From<IngestError> for ProcessError {
    fn from(err: IngestError) -> Self {
        if err.is_header_error() {
            Self::Schema(err)
        } else {
            Self::Decode(err)
        }
    }
}

/// A single record failed one or more constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record has {count} constraint violation(s)", count = .violations.len())]
pub struct RecordInvalid {
    pub violations: Vec<FieldViolation>,
}
