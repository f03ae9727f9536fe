//! Text length checks, counted in characters.

use intake_model::{FieldRef, FieldSpec, FieldValue, FieldViolation};

pub fn check(spec: &FieldSpec, field: FieldRef<'_>, limit: usize) -> Option<FieldViolation> {
    let FieldRef::Text(FieldValue::Parsed(value)) = field else {
        return None;
    };
    if value.chars().count() <= limit {
        return None;
    }
    let unit = if limit == 1 { "character" } else { "characters" };
    Some(
        FieldViolation::new(
            spec.name,
            format!("This value is too long. It should have {limit} {unit} or less."),
        )
        .with_invalid_value(Some(value.clone())),
    )
}
