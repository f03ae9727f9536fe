use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use intake_cli::summary::{elapsed_line, error_lines, json_report, violation_table};
use intake_generate::{GenerateError, GenerateRequest, generate_with_progress};
use intake_model::Product;
use intake_report::ErrorReport;
use intake_validate::{ProcessingOutcome, RecordProcessor};
use tracing::{info, info_span};

use crate::cli::{GenerateArgs, ProcessArgs, ReportFormatArg};

const PROCESS_EVENT: &str = "csv_processor_event";
const GENERATE_EVENT: &str = "csv_generator_event";

/// Validate one file. Returns whether it passed.
pub fn run_process(args: &ProcessArgs) -> Result<bool> {
    let start = Instant::now();
    let path = args.path.display();
    let span = info_span!("process_command", path = %path);
    let _guard = span.enter();

    eprintln!("Starting to process file: \"{path}\".");
    let processor = RecordProcessor::<Product>::new(args.dialect.dialect());
    let progress = row_spinner();
    let result = processor
        .get_records_from_path(&args.path)
        .and_then(|records| processor.process_records_with(records, |_, _| progress.inc(1)));
    progress.finish_and_clear();

    let passed = match result {
        Ok(ProcessingOutcome::Success(_)) => {
            eprintln!("CSV \"{path}\" was processed successfully. No errors have been detected.");
            true
        }
        Ok(ProcessingOutcome::Failure(violations)) => {
            info!(
                invalid_rows = violations.len(),
                violations = violations.violation_count(),
                "file failed validation"
            );
            match args.report_format {
                ReportFormatArg::Table => {
                    eprintln!(
                        "CSV \"{path}\" was NOT processed successfully. Here is the list of errors: "
                    );
                    print!("{}", error_lines(&violations));
                    println!("{}", violation_table(&violations));
                }
                ReportFormatArg::Json => {
                    println!(
                        "{}",
                        json_report(&violations).context("serialize error report")?
                    );
                }
            }
            false
        }
        Err(error) => {
            match args.report_format {
                ReportFormatArg::Table => eprintln!("error: {error}"),
                ReportFormatArg::Json => println!(
                    "{}",
                    ErrorReport::from_error(&error)
                        .to_json_pretty()
                        .context("serialize error report")?
                ),
            }
            false
        }
    };

    eprintln!("{}", elapsed_line(PROCESS_EVENT, start.elapsed()));
    Ok(passed)
}

/// Generate one synthetic file. Returns whether it was written.
pub fn run_generate(args: &GenerateArgs) -> Result<bool> {
    let start = Instant::now();
    let request = GenerateRequest::new(args.folder.clone())
        .with_number_of_records(args.number_of_records)
        .with_dialect(args.dialect.dialect());

    eprintln!(
        "Starting to generate CSV file with {} records in \"{}\".",
        request.number_of_records, request.folder
    );
    let progress = row_bar(request.rows_to_write());
    let result = generate_with_progress(&request, |_| progress.inc(1));
    progress.finish_and_clear();

    let written = match result {
        Ok(summary) => {
            println!("{}", summary.path.display());
            eprintln!(
                "CSV \"{}\" was generated successfully. No errors have been detected.",
                summary.path.display()
            );
            true
        }
        Err(GenerateError::InvalidRequest(errors)) => {
            eprintln!("CSV generator validation errors:");
            for error in errors {
                eprintln!("- {error}");
            }
            false
        }
        Err(error) => {
            eprintln!("error: {error}");
            false
        }
    };

    eprintln!("{}", elapsed_line(GENERATE_EVENT, start.elapsed()));
    Ok(written)
}

fn row_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {pos} rows ({elapsed})") {
        bar.set_style(style);
    }
    bar
}

fn row_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} rows ({elapsed}, eta {eta})")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}
