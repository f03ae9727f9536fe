//! Synthetic product files for testing and load generation.
//!
//! A run validates its [`GenerateRequest`], writes the product header and
//! then one random, valid product per id from 1 up to (excluding) the
//! requested record count.

mod error;
mod generator;
mod request;
mod synth;

pub use error::{GenerateError, Result};
pub use generator::{
    GenerateSummary, generate, generate_with, generate_with_progress, write_rows,
};
pub use request::{DEFAULT_NUMBER_OF_RECORDS, GenerateRequest, MAX_NUMBER_OF_RECORDS};
pub use synth::{description, synthesize};
