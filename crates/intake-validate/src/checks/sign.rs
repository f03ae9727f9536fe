//! Non-negative number checks.

use intake_model::{FieldRef, FieldSpec, FieldValue, FieldViolation};

pub fn check(spec: &FieldSpec, field: FieldRef<'_>) -> Option<FieldViolation> {
    let negative = match field {
        FieldRef::Integer(FieldValue::Parsed(value)) => *value < 0,
        FieldRef::Float(FieldValue::Parsed(value)) => *value < 0.0,
        _ => false,
    };
    negative.then(|| {
        FieldViolation::new(spec.name, "This value should be either positive or zero.")
            .with_invalid_value(field.display_value())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::FieldKind;

    #[test]
    fn zero_and_negative_zero_pass() {
        let spec = FieldSpec::new("weight", FieldKind::Float, &[]);
        assert!(check(&spec, FieldRef::Float(&FieldValue::Parsed(0.0))).is_none());
        assert!(check(&spec, FieldRef::Float(&FieldValue::Parsed(-0.0))).is_none());
    }

    #[test]
    fn negative_integer_fails_with_value() {
        let spec = FieldSpec::new("price", FieldKind::Integer, &[]);
        let violation = check(&spec, FieldRef::Integer(&FieldValue::Parsed(-1))).unwrap();
        assert_eq!(violation.invalid_value.as_deref(), Some("-1"));
    }
}
