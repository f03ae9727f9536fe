//! Validation failure types.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// 1-based ordinal of a data row, header excluded.
pub type RowPosition = u64;

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    /// Schema name of the offending field.
    pub property_path: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_value: Option<String>,
}

impl FieldViolation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
            invalid_value: None,
        }
    }

    #[must_use]
    pub fn with_invalid_value(mut self, value: Option<String>) -> Self {
        self.invalid_value = value;
        self
    }
}

/// Violations of a single data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViolations {
    pub row: RowPosition,
    pub violations: Vec<FieldViolation>,
}

/// All violating rows of one pass, keyed by original row position.
///
/// Rows without violations are never present. Iteration is in ascending row
/// order, which is also the order rows were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchViolations {
    rows: BTreeMap<RowPosition, Vec<FieldViolation>>,
}

impl BatchViolations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the violations of `row`. Empty violation lists are ignored.
    pub fn insert(&mut self, row: RowPosition, violations: Vec<FieldViolation>) {
        if violations.is_empty() {
            return;
        }
        self.rows.insert(row, violations);
    }

    pub fn get(&self, row: RowPosition) -> Option<&[FieldViolation]> {
        self.rows.get(&row).map(Vec::as_slice)
    }

    /// Number of violating rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of field violations across all rows.
    pub fn violation_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowPosition> + '_ {
        self.rows.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, RowPosition, Vec<FieldViolation>> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a BatchViolations {
    type Item = (&'a RowPosition, &'a Vec<FieldViolation>);
    type IntoIter = btree_map::Iter<'a, RowPosition, Vec<FieldViolation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for BatchViolations {
    type Item = RowViolations;
    type IntoIter = std::iter::Map<
        btree_map::IntoIter<RowPosition, Vec<FieldViolation>>,
        fn((RowPosition, Vec<FieldViolation>)) -> RowViolations,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let to_row: fn((RowPosition, Vec<FieldViolation>)) -> RowViolations =
            |(row, violations)| RowViolations { row, violations };
        self.rows.into_iter().map(to_row)
    }
}

impl FromIterator<RowViolations> for BatchViolations {
    fn from_iter<I: IntoIterator<Item = RowViolations>>(iter: I) -> Self {
        let mut batch = Self::new();
        for row in iter {
            batch.insert(row.row, row.violations);
        }
        batch
    }
}
