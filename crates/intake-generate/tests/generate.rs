//! Generated files against the record processor.

use std::fs;

use intake_generate::{GenerateError, GenerateRequest, generate, generate_with};
use intake_ingest::IngestError;
use intake_model::{CsvDialect, Product};
use intake_validate::{ProcessingOutcome, RecordProcessor};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn request(dir: &TempDir, number_of_records: u64) -> GenerateRequest {
    GenerateRequest::new(dir.path().to_string_lossy()).with_number_of_records(number_of_records)
}

#[test]
fn generated_file_passes_processing() {
    let dir = TempDir::new().unwrap();
    let summary = generate(&request(&dir, 50)).unwrap();

    assert_eq!(summary.rows_written, 49);
    let outcome = RecordProcessor::<Product>::default()
        .process_file(&summary.path)
        .unwrap();
    assert_eq!(outcome, ProcessingOutcome::Success(true));
}

#[test]
fn file_name_follows_pattern() {
    let dir = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let summary = generate_with(&request(&dir, 25), &mut rng, 1_700_000_000, |_| {}).unwrap();

    assert_eq!(
        summary.path.file_name().unwrap(),
        "test_csv_25_records_1700000000.csv"
    );
    assert_eq!(summary.path.parent().unwrap(), dir.path());
}

#[test]
fn custom_dialect_round_trips() {
    let dir = TempDir::new().unwrap();
    let dialect = CsvDialect::new(';', '\'', '\\');
    let mut rng = StdRng::seed_from_u64(4);
    let summary = generate_with(
        &request(&dir, 10).with_dialect(dialect),
        &mut rng,
        0,
        |_| {},
    )
    .unwrap();

    let content = fs::read_to_string(&summary.path).unwrap();
    assert!(content.starts_with("item;name;type;sku;"));

    let outcome = RecordProcessor::<Product>::new(dialect)
        .process_file(&summary.path)
        .unwrap();
    assert_eq!(outcome, ProcessingOutcome::Success(true));
}

#[test]
fn single_record_request_yields_header_only() {
    let dir = TempDir::new().unwrap();
    let summary = generate(&request(&dir, 1)).unwrap();

    assert_eq!(summary.rows_written, 0);
    let outcome = RecordProcessor::<Product>::default()
        .process_file(&summary.path)
        .unwrap();
    assert_eq!(outcome, ProcessingOutcome::Success(false));
}

#[test]
fn invalid_request_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let err = generate(&request(&dir, 3_000_001)).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidRequest(_)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_folder_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = generate(&GenerateRequest::new(missing.to_string_lossy())).unwrap_err();
    assert!(matches!(err, GenerateError::Io { .. }));
}

#[test]
fn clashing_dialect_is_a_writer_argument_error() {
    let dir = TempDir::new().unwrap();
    let dialect = CsvDialect::new('"', '"', '\\');
    let err = generate(&request(&dir, 5).with_dialect(dialect)).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::Ingest(IngestError::WriterInvalidArgument { .. })
    ));
    assert!(err.to_string().starts_with("CsvWriter invalid argument error:"));
}
