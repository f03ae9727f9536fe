//! Delimited-text dialect configuration.

use serde::{Deserialize, Serialize};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';
/// Default enclosure (quote) character.
pub const DEFAULT_ENCLOSURE: char = '"';
/// Default escape character.
pub const DEFAULT_ESCAPE: char = '\\';

/// Delimiter, enclosure and escape characters used to read or write a file.
///
/// The dialect is plain data. Readers and writers validate it when they are
/// built, so an unusable dialect (non-ASCII characters, delimiter equal to the
/// enclosure) is rejected before any I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvDialect {
    pub delimiter: char,
    pub enclosure: char,
    pub escape: char,
}

impl Default for CsvDialect {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            enclosure: DEFAULT_ENCLOSURE,
            escape: DEFAULT_ESCAPE,
        }
    }
}

impl CsvDialect {
    pub fn new(delimiter: char, enclosure: char, escape: char) -> Self {
        Self {
            delimiter,
            enclosure,
            escape,
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_enclosure(mut self, enclosure: char) -> Self {
        self.enclosure = enclosure;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }
}
