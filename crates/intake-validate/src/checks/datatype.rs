//! Type checks: the cell must cast to the field's storage type.

use intake_model::{FieldRef, FieldSpec, FieldViolation};

pub fn check(spec: &FieldSpec, field: FieldRef<'_>) -> Option<FieldViolation> {
    let raw = field.unparsable()?;
    Some(
        FieldViolation::new(
            spec.name,
            format!("This value should be of type {}.", spec.kind.type_name()),
        )
        .with_invalid_value(Some(raw.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::{FieldKind, FieldValue};

    #[test]
    fn unparsable_float_names_the_type() {
        let spec = FieldSpec::new("weight", FieldKind::Float, &[]);
        let value = FieldValue::<f64>::Unparsable("heavy".to_string());
        let violation = check(&spec, FieldRef::Float(&value)).unwrap();
        assert_eq!(violation.message, "This value should be of type float.");
        assert_eq!(violation.invalid_value.as_deref(), Some("heavy"));
    }

    #[test]
    fn missing_value_is_not_a_type_error() {
        let spec = FieldSpec::new("stock", FieldKind::Integer, &[]);
        assert!(check(&spec, FieldRef::Integer(&FieldValue::Missing)).is_none());
    }
}
