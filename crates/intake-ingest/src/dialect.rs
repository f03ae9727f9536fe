//! Translation of a [`CsvDialect`] into csv reader/writer builders.

use std::borrow::Cow;

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use intake_model::CsvDialect;

use crate::error::{IngestError, Result};

/// Dialect characters narrowed to the single bytes the csv crate works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectBytes {
    pub delimiter: u8,
    pub quote: u8,
    pub escape: u8,
}

impl DialectBytes {
    /// Validate the dialect.
    ///
    /// Returns a human-readable reason when a character is not a single ASCII
    /// byte or when the delimiter collides with the enclosure.
    pub fn try_from_dialect(dialect: &CsvDialect) -> std::result::Result<Self, String> {
        let delimiter = ascii_byte("delimiter", dialect.delimiter)?;
        let quote = ascii_byte("enclosure", dialect.enclosure)?;
        let escape = ascii_byte("escape", dialect.escape)?;
        if delimiter == quote {
            return Err(format!(
                "delimiter and enclosure must differ, both are '{}'",
                dialect.delimiter
            ));
        }
        if matches!(delimiter, b'\r' | b'\n') {
            return Err("delimiter cannot be a line terminator".to_string());
        }
        Ok(Self {
            delimiter,
            quote,
            escape,
        })
    }
}

fn ascii_byte(role: &str, value: char) -> std::result::Result<u8, String> {
    if value.is_ascii() {
        Ok(value as u8)
    } else {
        Err(format!(
            "{role} must be a single ASCII character, got '{value}'"
        ))
    }
}

/// Reader builder for the dialect; the first row is treated as the header.
///
/// Rows may have any number of cells. Missing trailing cells decode as blank
/// and surplus cells are dropped by the record schema.
pub fn reader_builder(dialect: &CsvDialect) -> Result<ReaderBuilder> {
    let bytes = DialectBytes::try_from_dialect(dialect)
        .map_err(|message| IngestError::InvalidArgument { message })?;
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .delimiter(bytes.delimiter)
        .quote(bytes.quote)
        .escape(Some(bytes.escape))
        .double_quote(true);
    Ok(builder)
}

/// Writer builder for the dialect, with the validated dialect bytes.
///
/// The builder never quotes on its own: cells are enclosed by the row writer
/// so that the escape byte is escaped the way the reader expects.
pub fn writer_builder(dialect: &CsvDialect) -> Result<(WriterBuilder, DialectBytes)> {
    let bytes = DialectBytes::try_from_dialect(dialect)
        .map_err(|message| IngestError::WriterInvalidArgument { message })?;
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .delimiter(bytes.delimiter)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'));
    Ok((builder, bytes))
}

/// Enclose a cell when it holds the delimiter, the enclosure or a line break.
///
/// Inside the enclosure the enclosure byte is doubled and the escape byte is
/// escaped with itself. Other cells are written verbatim.
pub(crate) fn encode_cell<'a>(cell: &'a [u8], bytes: &DialectBytes) -> Cow<'a, [u8]> {
    let needs_enclosure = cell
        .iter()
        .any(|&b| b == bytes.delimiter || b == bytes.quote || b == b'\r' || b == b'\n');
    if !needs_enclosure {
        return Cow::Borrowed(cell);
    }
    let mut out = Vec::with_capacity(cell.len() + 2);
    out.push(bytes.quote);
    for &b in cell {
        if b == bytes.quote || b == bytes.escape {
            out.push(b);
        }
        out.push(b);
    }
    out.push(bytes.quote);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dialect_is_accepted() {
        let bytes = DialectBytes::try_from_dialect(&CsvDialect::default()).unwrap();
        assert_eq!(bytes.delimiter, b',');
        assert_eq!(bytes.quote, b'"');
        assert_eq!(bytes.escape, b'\\');
    }

    #[test]
    fn non_ascii_characters_are_rejected() {
        let dialect = CsvDialect::default().with_delimiter('§');
        let reason = DialectBytes::try_from_dialect(&dialect).unwrap_err();
        assert!(reason.contains("delimiter must be a single ASCII character"));
    }

    #[test]
    fn delimiter_equal_to_enclosure_is_rejected() {
        let dialect = CsvDialect::new('"', '"', '\\');
        assert!(DialectBytes::try_from_dialect(&dialect).is_err());
    }

    #[test]
    fn builders_map_errors_to_their_side() {
        let dialect = CsvDialect::default().with_escape('€');
        assert!(matches!(
            reader_builder(&dialect),
            Err(IngestError::InvalidArgument { .. })
        ));
        assert!(matches!(
            writer_builder(&dialect),
            Err(IngestError::WriterInvalidArgument { .. })
        ));
    }

    #[test]
    fn plain_cells_are_borrowed() {
        let bytes = DialectBytes::try_from_dialect(&CsvDialect::default()).unwrap();
        let cell = encode_cell(b"a\\b", &bytes);
        assert!(matches!(cell, Cow::Borrowed(_)));
        assert_eq!(&*cell, b"a\\b");
    }

    #[test]
    fn enclosed_cells_escape_quote_and_escape() {
        let bytes = DialectBytes::try_from_dialect(&CsvDialect::default()).unwrap();
        assert_eq!(&*encode_cell(b"a,b\\", &bytes), b"\"a,b\\\\\"");
        assert_eq!(&*encode_cell(b"say \"hi\"", &bytes), b"\"say \"\"hi\"\"\"");
    }

    #[test]
    fn escape_equal_to_enclosure_is_doubled_once() {
        let bytes = DialectBytes::try_from_dialect(&CsvDialect::new(',', '"', '"')).unwrap();
        assert_eq!(&*encode_cell(b"a\"b", &bytes), b"\"a\"\"b\"");
    }
}
