//! Delimited-text decoding and encoding.
//!
//! This crate wraps the `csv` crate with the intake rules:
//!
//! - **Dialect**: delimiter, enclosure and escape are validated up front
//! - **Header check**: the header row must equal the record schema exactly
//! - **Records**: a lazy, forward-only sequence of `(position, record)` pairs
//! - **Writing**: header and data rows in the same dialect
//!
//! # Example
//!
//! ```ignore
//! use intake_ingest::RecordReader;
//! use intake_model::{CsvDialect, Product};
//!
//! let reader = RecordReader::from_path(Path::new("products.csv"), &CsvDialect::default())?;
//! for row in reader.records::<Product>()? {
//!     let (position, product) = row?;
//! }
//! ```

mod dialect;
mod error;
mod reader;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === Dialect ===
pub use dialect::{DialectBytes, reader_builder, writer_builder};

// === Reading ===
pub use reader::{RecordReader, Records};

// === Writing ===
pub use writer::RowWriter;
