//! Schema-checked record decoding.

use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;

use csv::StringRecord;
use intake_model::{CsvDialect, RecordSchema, RowPosition};
use tracing::{debug, warn};

use crate::dialect::reader_builder;
use crate::error::{IngestError, Result};

/// Delimited-text reader configured with a dialect.
///
/// The first row of the source is the header. Use [`RecordReader::records`]
/// to check the header against a schema and obtain the data rows.
pub struct RecordReader<R> {
    inner: csv::Reader<R>,
}

impl RecordReader<File> {
    /// Open a file on disk.
    pub fn from_path(path: &Path, dialect: &CsvDialect) -> Result<Self> {
        let builder = reader_builder(dialect)?;
        let file = File::open(path).map_err(|source| IngestError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            inner: builder.from_reader(file),
        })
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any byte source.
    pub fn from_reader(source: R, dialect: &CsvDialect) -> Result<Self> {
        let builder = reader_builder(dialect)?;
        Ok(Self {
            inner: builder.from_reader(source),
        })
    }

    /// Header cells as read from the source.
    pub fn header(&mut self) -> Result<Vec<String>> {
        let header = self
            .inner
            .headers()
            .map_err(|err| IngestError::header_syntax(&err))?;
        Ok(header.iter().map(str::to_string).collect())
    }

    /// Verify the header against `P`'s schema and return the data rows.
    ///
    /// The header check happens here, before any data row is read, so a
    /// mismatched file never reaches row validation.
    pub fn records<P: RecordSchema>(mut self) -> Result<Records<R, P>> {
        let header = self.header()?;
        let expected = P::fields();
        if header != expected {
            warn!(
                expected = %P::joined_fields(),
                found = %header.join(","),
                "header does not match schema"
            );
            return Err(IngestError::InvalidHeaders {
                expected: P::joined_fields(),
                found: header,
            });
        }
        debug!(columns = expected.len(), "header matches schema");
        Ok(Records {
            inner: self.inner,
            record: StringRecord::new(),
            position: 0,
            finished: false,
            schema: PhantomData,
        })
    }
}

/// Lazy sequence of `(position, record)` pairs.
///
/// Positions start at 1 for the first data row and increase by one per row.
/// The sequence is single-pass and forward-only: it reads the underlying
/// source as it advances and cannot be restarted. After the first decode
/// error it yields nothing more.
pub struct Records<R, P> {
    inner: csv::Reader<R>,
    record: StringRecord,
    position: RowPosition,
    finished: bool,
    schema: PhantomData<fn() -> P>,
}

impl<R, P> Records<R, P> {
    /// Position of the last row yielded, 0 before the first.
    pub fn position(&self) -> RowPosition {
        self.position
    }
}

impl<R: Read, P: RecordSchema> Iterator for Records<R, P> {
    type Item = Result<(RowPosition, P)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.inner.read_record(&mut self.record) {
            Ok(true) => {
                self.position += 1;
                let cells: Vec<&str> = self.record.iter().collect();
                Some(Ok((self.position, P::from_cells(&cells))))
            }
            Ok(false) => {
                self.finished = true;
                debug!(rows = self.position, "reached end of source");
                None
            }
            Err(err) => {
                self.finished = true;
                let row = self.position + 1;
                warn!(row, error = %err, "failed to decode row");
                Some(Err(IngestError::reader_at(row, &err)))
            }
        }
    }
}

impl<R: Read, P: RecordSchema> std::iter::FusedIterator for Records<R, P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::{FieldValue, Product};

    const HEADER: &str =
        "item,name,type,sku,stock,price,category,description,weight,width,height,visible";

    fn reader(content: &str) -> RecordReader<&[u8]> {
        RecordReader::from_reader(content.as_bytes(), &CsvDialect::default()).unwrap()
    }

    #[test]
    fn header_is_returned_verbatim() {
        let mut reader = reader("b,a\n1,2\n");
        assert_eq!(reader.header().unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn empty_source_fails_header_check() {
        let result = reader("").records::<Product>();
        assert!(matches!(result, Err(IngestError::InvalidHeaders { .. })));
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let content = format!(
            "{HEADER}\nProduct,A,Physical,S1,1,1,1,d,1,1,1,TRUE\nService,B,Non-Physical,S2,2,2,2,d,2,2,2,FALSE\n"
        );
        let rows: Vec<_> = reader(&content)
            .records::<Product>()
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        let positions: Vec<_> = rows.iter().map(|(position, _)| *position).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(rows[1].1.visible, FieldValue::Parsed(false));
    }

    #[test]
    fn short_and_long_rows_keep_their_positions() {
        let content = format!(
            "{HEADER}\nProduct,A\nService,B,Non-Physical,S2,2,2,2,d,2,2,2,FALSE,extra,cells\n"
        );
        let rows: Vec<_> = reader(&content)
            .records::<Product>()
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 1);
        assert_eq!(rows[0].1.name, FieldValue::Parsed("A".to_string()));
        assert_eq!(rows[0].1.sku, FieldValue::Missing);
        assert_eq!(rows[1].0, 2);
        assert_eq!(rows[1].1.visible, FieldValue::Parsed(false));
    }

    #[test]
    fn invalid_utf8_row_stops_the_sequence() {
        let mut content = format!("{HEADER}\nProduct,").into_bytes();
        content.extend_from_slice(&[0xff, 0xfe]);
        content.extend_from_slice(b"\nService,B,Non-Physical,S2,2,2,2,d,2,2,2,FALSE\n");
        let mut records = RecordReader::from_reader(content.as_slice(), &CsvDialect::default())
            .unwrap()
            .records::<Product>()
            .unwrap();
        let first = records.next().unwrap();
        assert!(matches!(first, Err(IngestError::Reader { row: Some(1), .. })));
        assert!(records.next().is_none());
    }

    #[test]
    fn bom_before_header_is_ignored() {
        let content = format!("\u{feff}{HEADER}\n");
        assert!(reader(&content).records::<Product>().is_ok());
    }

    #[test]
    fn custom_dialect_reads_escaped_enclosure() {
        let dialect = CsvDialect::new(';', '\'', '\\');
        let header = HEADER.replace(',', ";");
        let content = format!(
            "{header}\nProduct;'It\\'s; a chair';Physical;S1;1;1;1;d;1;1;1;TRUE\n"
        );
        let mut records = RecordReader::from_reader(content.as_bytes(), &dialect)
            .unwrap()
            .records::<Product>()
            .unwrap();
        let (_, product) = records.next().unwrap().unwrap();
        assert_eq!(product.name, FieldValue::Parsed("It's; a chair".to_string()));
    }
}
