//! Rendering of processing results for the terminal.

use std::fmt::Write as _;
use std::time::Duration;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use intake_model::BatchViolations;
use intake_report::ErrorReport;

/// Line-by-line error listing.
///
/// ```text
/// Item in line 2:
/// Field "price" has error: This value should be either positive or zero.
///
/// ```
pub fn error_lines(violations: &BatchViolations) -> String {
    let mut out = String::new();
    for (row, list) in violations {
        let _ = writeln!(out, "Item in line {row}:");
        for violation in list {
            let _ = writeln!(
                out,
                "Field \"{}\" has error: {}",
                violation.property_path, violation.message
            );
        }
        out.push('\n');
    }
    out
}

/// One table row per violation, grouped by line.
pub fn violation_table(violations: &BatchViolations) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    apply_violation_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (row, list) in violations {
        for violation in list {
            table.add_row(vec![
                Cell::new(row),
                Cell::new(&violation.property_path).fg(Color::Blue),
                match &violation.invalid_value {
                    Some(value) => Cell::new(value),
                    None => dim_cell("-"),
                },
                Cell::new(&violation.message).fg(Color::Red),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows", violations.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{} violations", violations.violation_count()))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Pretty-printed JSON error report.
pub fn json_report(violations: &BatchViolations) -> serde_json::Result<String> {
    ErrorReport::from_violations(violations).to_json_pretty()
}

/// `<event>: <n> ms`
pub fn elapsed_line(event: &str, elapsed: Duration) -> String {
    format!("{event}: {} ms", elapsed.as_millis())
}

fn apply_violation_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Fixed(14)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::LowerBoundary(Width::Fixed(20)),
    ]);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::FieldViolation;

    #[test]
    fn elapsed_line_uses_milliseconds() {
        assert_eq!(
            elapsed_line("csv_processor", Duration::from_millis(1250)),
            "csv_processor: 1250 ms"
        );
    }

    #[test]
    fn table_lists_every_violation_and_a_total() {
        let mut batch = BatchViolations::new();
        batch.insert(
            3,
            vec![
                FieldViolation::new("stock", "This value should be of type int.")
                    .with_invalid_value(Some("many".to_string())),
                FieldViolation::new("visible", "This value should not be null."),
            ],
        );
        let table = violation_table(&batch);
        assert_eq!(table.row_count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("many"));
        assert!(rendered.contains("2 violations"));
    }
}
