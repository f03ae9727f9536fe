//! Per-row error output built from a batch of violations.

use intake_model::{BatchViolations, FieldViolation, RowPosition};
use serde::Serialize;

/// One violation as shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationInfo {
    pub property_path: String,
    pub message: String,
}

impl From<&FieldViolation> for ViolationInfo {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            property_path: violation.property_path.clone(),
            message: violation.message.clone(),
        }
    }
}

/// All violations of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub row_index: RowPosition,
    pub violation_info: Vec<ViolationInfo>,
}

impl ErrorOutput {
    pub fn new(row_index: RowPosition, violations: &[FieldViolation]) -> Self {
        Self {
            row_index,
            violation_info: violations.iter().map(ViolationInfo::from).collect(),
        }
    }
}

/// One element per violating row, in row order.
///
/// Row indices are taken as-is and violations are neither merged nor
/// deduplicated.
pub fn build(violations: &BatchViolations) -> Vec<ErrorOutput> {
    violations
        .iter()
        .map(|(&row, list)| ErrorOutput::new(row, list))
        .collect()
}
