//! Constraint check modules.
//!
//! Each module checks one kind of constraint on one field value.

mod choice;
mod datatype;
mod length;
mod required;
mod sign;

use intake_model::{Constraint, FieldRef, FieldSpec, FieldViolation};

/// Run every constraint of `spec` against `field`.
///
/// A value that could not be cast to the field type yields only the type
/// violation; value constraints are not meaningful for it.
pub fn run_all(spec: &FieldSpec, field: FieldRef<'_>, violations: &mut Vec<FieldViolation>) {
    if let Some(violation) = datatype::check(spec, field) {
        violations.push(violation);
        return;
    }

    for constraint in spec.constraints {
        let violation = match *constraint {
            Constraint::NotBlank => required::not_blank(spec, field),
            Constraint::NotNull => required::not_null(spec, field),
            Constraint::Choice { choices, message } => {
                choice::check(spec, field, choices, message)
            }
            Constraint::MaxLength(limit) => length::check(spec, field, limit),
            Constraint::PositiveOrZero => sign::check(spec, field),
        };
        if let Some(violation) = violation {
            violations.push(violation);
        }
    }
}
