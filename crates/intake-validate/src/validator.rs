//! Per-record field validation.

use intake_model::{FieldViolation, RecordSchema};

use crate::checks;

/// Collect every constraint violation of `record`.
///
/// Violations are ordered by schema field order, then by constraint
/// declaration order within a field. The function is pure: the same record
/// always yields the same list.
pub fn validate_record<P: RecordSchema>(record: &P) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    for spec in P::SPECS {
        let Some(field) = record.field(spec.name) else {
            continue;
        };
        checks::run_all(spec, field, &mut violations);
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::{FieldValue, Product};

    fn valid_product() -> Product {
        Product::from_cells(&[
            "Service",
            "Service Sample 7",
            "Non-Physical",
            "TY-7",
            "0",
            "0",
            "12",
            "Consulting hours.",
            "0",
            "0.5",
            "0.5",
            "FALSE",
        ])
    }

    #[test]
    fn valid_product_has_no_violations() {
        assert!(validate_record(&valid_product()).is_empty());
    }

    #[test]
    fn all_failing_fields_are_reported_in_schema_order() {
        let mut product = valid_product();
        product.item = FieldValue::Parsed("product".to_string());
        product.price = FieldValue::Parsed(-1);
        product.visible = FieldValue::Missing;

        let paths: Vec<_> = validate_record(&product)
            .into_iter()
            .map(|violation| violation.property_path)
            .collect();
        assert_eq!(paths, vec!["item", "price", "visible"]);
    }

    #[test]
    fn blank_text_reports_only_presence() {
        let mut product = valid_product();
        product.item = FieldValue::Missing;
        let violations = validate_record(&product);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "This value should not be blank.");
    }
}
