//! Typed field values and the constraints declared on them.

use std::fmt;

/// Value of one typed field after decoding a raw cell.
///
/// A cell that is blank decodes to [`FieldValue::Missing`]; a cell that cannot
/// be cast to the field type is kept verbatim in [`FieldValue::Unparsable`] so
/// the validator can report it alongside every other violation of the row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<T> {
    Missing,
    Parsed(T),
    Unparsable(String),
}

impl<T: CellType> FieldValue<T> {
    /// Decode a raw cell into a typed value.
    pub fn from_cell(cell: &str) -> Self {
        if T::is_blank(cell) {
            return Self::Missing;
        }
        match T::parse_cell(cell) {
            Some(value) => Self::Parsed(value),
            None => Self::Unparsable(cell.to_string()),
        }
    }

    /// Encode the value back into a raw cell.
    pub fn to_cell(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Parsed(value) => value.to_cell(),
            Self::Unparsable(raw) => raw.clone(),
        }
    }
}

impl<T> FieldValue<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            Self::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl<T> From<T> for FieldValue<T> {
    fn from(value: T) -> Self {
        Self::Parsed(value)
    }
}

/// Conversion between a raw cell and a field type.
pub trait CellType: Sized {
    /// Whether the cell counts as absent for this type.
    fn is_blank(cell: &str) -> bool {
        cell.trim().is_empty()
    }

    fn parse_cell(cell: &str) -> Option<Self>;

    fn to_cell(&self) -> String;
}

impl CellType for String {
    // Whitespace is content for text fields.
    fn is_blank(cell: &str) -> bool {
        cell.is_empty()
    }

    fn parse_cell(cell: &str) -> Option<Self> {
        Some(cell.to_string())
    }

    fn to_cell(&self) -> String {
        self.clone()
    }
}

impl CellType for i64 {
    fn parse_cell(cell: &str) -> Option<Self> {
        cell.trim().parse().ok()
    }

    fn to_cell(&self) -> String {
        self.to_string()
    }
}

impl CellType for f64 {
    fn parse_cell(cell: &str) -> Option<Self> {
        cell.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    fn to_cell(&self) -> String {
        self.to_string()
    }
}

impl CellType for bool {
    fn parse_cell(cell: &str) -> Option<Self> {
        match cell.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    fn to_cell(&self) -> String {
        if *self { "TRUE" } else { "FALSE" }.to_string()
    }
}

/// Storage type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
}

impl FieldKind {
    /// Type name used in type-mismatch messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Boolean => "bool",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Borrowed view of one field of a record, tagged with its type.
#[derive(Debug, Clone, Copy)]
pub enum FieldRef<'a> {
    Text(&'a FieldValue<String>),
    Integer(&'a FieldValue<i64>),
    Float(&'a FieldValue<f64>),
    Boolean(&'a FieldValue<bool>),
}

impl FieldRef<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::Integer,
            Self::Float(_) => FieldKind::Float,
            Self::Boolean(_) => FieldKind::Boolean,
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Self::Text(value) => value.is_missing(),
            Self::Integer(value) => value.is_missing(),
            Self::Float(value) => value.is_missing(),
            Self::Boolean(value) => value.is_missing(),
        }
    }

    /// Raw cell text of an unparsable value.
    pub fn unparsable(&self) -> Option<&str> {
        let raw = match self {
            Self::Text(FieldValue::Unparsable(raw))
            | Self::Integer(FieldValue::Unparsable(raw))
            | Self::Float(FieldValue::Unparsable(raw))
            | Self::Boolean(FieldValue::Unparsable(raw)) => raw,
            _ => return None,
        };
        Some(raw.as_str())
    }

    /// Cell representation of the value, if one is present.
    pub fn display_value(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        Some(match self {
            Self::Text(value) => value.to_cell(),
            Self::Integer(value) => value.to_cell(),
            Self::Float(value) => value.to_cell(),
            Self::Boolean(value) => value.to_cell(),
        })
    }
}

/// A constraint attached to a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be present and non-empty.
    NotBlank,
    /// Value must be present.
    NotNull,
    /// Text must equal one of `choices` exactly.
    ///
    /// `message` may reference `{{ value }}` and `{{ choices }}`.
    Choice {
        choices: &'static [&'static str],
        message: &'static str,
    },
    /// Text must have at most this many characters.
    MaxLength(usize),
    /// Number must be `>= 0`.
    PositiveOrZero,
}

/// Declaration of one schema field: name, storage type and constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        kind: FieldKind,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            name,
            kind,
            constraints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_are_missing() {
        assert_eq!(FieldValue::<String>::from_cell(""), FieldValue::Missing);
        assert_eq!(FieldValue::<i64>::from_cell("  "), FieldValue::Missing);
        assert_eq!(FieldValue::<bool>::from_cell(""), FieldValue::Missing);
    }

    #[test]
    fn whitespace_text_is_content() {
        assert_eq!(
            FieldValue::<String>::from_cell("  "),
            FieldValue::Parsed("  ".to_string())
        );
    }

    #[test]
    fn numbers_parse_with_surrounding_whitespace() {
        assert_eq!(FieldValue::<i64>::from_cell(" 42 "), FieldValue::Parsed(42));
        assert_eq!(FieldValue::<f64>::from_cell("2.5"), FieldValue::Parsed(2.5));
        assert_eq!(FieldValue::<f64>::from_cell("3"), FieldValue::Parsed(3.0));
    }

    #[test]
    fn bad_numbers_are_unparsable() {
        assert_eq!(
            FieldValue::<i64>::from_cell("1.5"),
            FieldValue::Unparsable("1.5".to_string())
        );
        assert_eq!(
            FieldValue::<f64>::from_cell("NaN"),
            FieldValue::Unparsable("NaN".to_string())
        );
    }

    #[test]
    fn booleans_accept_common_spellings() {
        assert_eq!(FieldValue::<bool>::from_cell("TRUE"), FieldValue::Parsed(true));
        assert_eq!(FieldValue::<bool>::from_cell("no"), FieldValue::Parsed(false));
        assert_eq!(FieldValue::<bool>::from_cell("0"), FieldValue::Parsed(false));
        assert_eq!(
            FieldValue::<bool>::from_cell("maybe"),
            FieldValue::Unparsable("maybe".to_string())
        );
    }

    #[test]
    fn booleans_encode_upper_case() {
        assert_eq!(FieldValue::Parsed(false).to_cell(), "FALSE");
        assert_eq!(FieldValue::<bool>::Missing.to_cell(), "");
    }

    #[test]
    fn field_ref_reports_unparsable_raw_text() {
        let value = FieldValue::<i64>::Unparsable("abc".to_string());
        let field = FieldRef::Integer(&value);
        assert_eq!(field.unparsable(), Some("abc"));
        assert_eq!(field.kind().type_name(), "int");
        assert_eq!(field.display_value().as_deref(), Some("abc"));
    }
}
