//! CLI argument definitions for csv-intake.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use intake_generate::DEFAULT_NUMBER_OF_RECORDS;
use intake_model::{CsvDialect, DEFAULT_DELIMITER, DEFAULT_ENCLOSURE, DEFAULT_ESCAPE};

#[derive(Parser)]
#[command(
    name = "csv-intake",
    version,
    about = "Validate product CSV files against their schema",
    long_about = "Validate product CSV files against their schema.\n\n\
                  Checks the header row, validates every record and lists every\n\
                  violation by line. Can also generate synthetic files for testing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a CSV file and validate every record.
    Process(ProcessArgs),

    /// Generate a CSV file for test purposes.
    Generate(GenerateArgs),
}

/// Delimiter, enclosure and escape characters of the file.
#[derive(Args, Clone, Copy)]
pub struct DialectArgs {
    /// Delimiter used inside the CSV file.
    #[arg(short = 'D', long = "delimiter", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Enclosure character used inside the CSV file.
    #[arg(long = "enclosure", default_value_t = DEFAULT_ENCLOSURE)]
    pub enclosure: char,

    /// Escape character used inside the CSV file.
    #[arg(long = "escape", default_value_t = DEFAULT_ESCAPE)]
    pub escape: char,
}

impl DialectArgs {
    pub fn dialect(self) -> CsvDialect {
        CsvDialect::new(self.delimiter, self.enclosure, self.escape)
    }
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the CSV file to process and validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub dialect: DialectArgs,

    /// How to print validation errors.
    #[arg(long = "report-format", value_enum, default_value = "table")]
    pub report_format: ReportFormatArg,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Folder where the CSV file is saved.
    #[arg(value_name = "FOLDER")]
    pub folder: String,

    /// Number of records to generate.
    #[arg(
        short = 'N',
        long = "number-of-records",
        default_value_t = DEFAULT_NUMBER_OF_RECORDS
    )]
    pub number_of_records: u64,

    #[command(flatten)]
    pub dialect: DialectArgs,
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    /// Line-by-line listing with a summary table.
    Table,
    /// The JSON error report.
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
