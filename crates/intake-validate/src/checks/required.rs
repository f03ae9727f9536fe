//! Presence checks.

use intake_model::{FieldRef, FieldSpec, FieldViolation};

pub fn not_blank(spec: &FieldSpec, field: FieldRef<'_>) -> Option<FieldViolation> {
    field
        .is_missing()
        .then(|| FieldViolation::new(spec.name, "This value should not be blank."))
}

pub fn not_null(spec: &FieldSpec, field: FieldRef<'_>) -> Option<FieldViolation> {
    field
        .is_missing()
        .then(|| FieldViolation::new(spec.name, "This value should not be null."))
}
