//! Enumerated-value checks (case-sensitive).

use intake_model::{FieldRef, FieldSpec, FieldValue, FieldViolation};

pub fn check(
    spec: &FieldSpec,
    field: FieldRef<'_>,
    choices: &[&str],
    message: &str,
) -> Option<FieldViolation> {
    let FieldRef::Text(FieldValue::Parsed(value)) = field else {
        return None;
    };
    if choices.contains(&value.as_str()) {
        return None;
    }
    let rendered = message
        .replace("{{ value }}", &quoted(value))
        .replace("{{ choices }}", &render_choices(choices));
    Some(FieldViolation::new(spec.name, rendered).with_invalid_value(Some(value.clone())))
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

fn render_choices(choices: &[&str]) -> String {
    choices
        .iter()
        .map(|&choice| quoted(choice))
        .collect::<Vec<_>>()
        .join(", ")
}
