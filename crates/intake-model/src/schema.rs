//! Record schema declaration.

use crate::field::{FieldRef, FieldSpec};

/// A record type with a statically declared, ordered field list.
///
/// The order of [`RecordSchema::SPECS`] is the contract for the header row
/// and for the column-to-field mapping of every data row.
pub trait RecordSchema: Sized {
    /// Ordered field declarations.
    const SPECS: &'static [FieldSpec];

    /// Ordered field names, as they must appear in the header row.
    fn fields() -> Vec<&'static str> {
        Self::SPECS.iter().map(|spec| spec.name).collect()
    }

    /// Comma-joined field names.
    fn joined_fields() -> String {
        Self::fields().join(",")
    }

    /// Build a record from raw cells in schema order.
    ///
    /// Cells beyond the schema are ignored; absent trailing cells decode as
    /// blank.
    fn from_cells(cells: &[&str]) -> Self;

    /// Encode the record as raw cells in schema order.
    fn to_cells(&self) -> Vec<String>;

    /// Look up a field by schema name.
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;
}
