//! Data model for CSV record intake.
//!
//! - [`RecordSchema`]: statically declared, ordered field list of a record type
//! - [`Product`]: the catalogue record accepted by the pipeline
//! - [`FieldValue`], [`FieldSpec`], [`Constraint`]: typed cells and their rules
//! - [`FieldViolation`], [`BatchViolations`]: validation failures
//! - [`CsvDialect`]: delimiter, enclosure and escape configuration

pub mod dialect;
pub mod field;
pub mod product;
pub mod schema;
pub mod violation;

pub use dialect::{CsvDialect, DEFAULT_DELIMITER, DEFAULT_ENCLOSURE, DEFAULT_ESCAPE};
pub use field::{CellType, Constraint, FieldKind, FieldRef, FieldSpec, FieldValue};
pub use product::{ITEM_CHOICES, Product, TYPE_CHOICES};
pub use schema::RecordSchema;
pub use violation::{BatchViolations, FieldViolation, RowPosition, RowViolations};
