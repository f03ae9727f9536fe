//! Record validation pipeline.
//!
//! [`validate_record`] applies the schema constraints of one record.
//! [`RecordProcessor`] drives a full pass: header check, row iteration,
//! per-row validation and accumulation of violations by row position.

mod checks;
mod error;
mod processor;
mod validator;

pub use error::{ProcessError, RecordInvalid};
pub use processor::{ProcessingOutcome, RecordProcessor, RecordResult};
pub use validator::validate_record;
