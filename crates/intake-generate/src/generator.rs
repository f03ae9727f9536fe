//! Generation runs: header plus synthetic rows written to disk.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use intake_ingest::RowWriter;
use intake_model::Product;
use rand::Rng;
use tracing::{debug, info, info_span};

use crate::error::{GenerateError, Result};
use crate::request::GenerateRequest;
use crate::synth::synthesize;

const PROGRESS_LOG_INTERVAL: u64 = 100_000;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub path: PathBuf,
    pub rows_written: u64,
    pub duration_ms: u128,
}

/// Generate a file with the thread RNG, timestamped now.
pub fn generate(request: &GenerateRequest) -> Result<GenerateSummary> {
    generate_with_progress(request, |_| {})
}

/// [`generate`] reporting the id of every row once it is written.
pub fn generate_with_progress<F: FnMut(u64)>(
    request: &GenerateRequest,
    progress: F,
) -> Result<GenerateSummary> {
    generate_with(
        request,
        &mut rand::thread_rng(),
        Utc::now().timestamp(),
        progress,
    )
}

/// Generate a file with an explicit RNG and timestamp.
///
/// `progress` is called with the id of every row once it is written.
pub fn generate_with<R, F>(
    request: &GenerateRequest,
    rng: &mut R,
    unix_time: i64,
    progress: F,
) -> Result<GenerateSummary>
where
    R: Rng + ?Sized,
    F: FnMut(u64),
{
    request.validate()?;

    let folder = PathBuf::from(&request.folder);
    let metadata = fs::metadata(&folder).map_err(|source| GenerateError::Io {
        path: folder.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(GenerateError::InvalidRequest(vec![format!(
            "pathToCsvFolder: {} is not a directory.",
            folder.display()
        )]));
    }

    let path = request.output_path(unix_time);
    let span = info_span!("generate", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut writer = RowWriter::create(&path, &request.dialect)?;
    let rows_written = write_rows(&mut writer, request.number_of_records, rng, progress)?;
    writer.flush()?;

    let duration_ms = start.elapsed().as_millis();
    info!(rows = rows_written, duration_ms, "file generated");
    Ok(GenerateSummary {
        path,
        rows_written,
        duration_ms,
    })
}

/// Write the header and rows with ids `1..number_of_records`.
///
/// Returns the number of data rows written.
pub fn write_rows<W, R, F>(
    writer: &mut RowWriter<W>,
    number_of_records: u64,
    rng: &mut R,
    mut progress: F,
) -> Result<u64>
where
    W: Write,
    R: Rng + ?Sized,
    F: FnMut(u64),
{
    writer.write_header::<Product>()?;
    for id in 1..number_of_records {
        writer.write_record(&synthesize(id, rng))?;
        progress(id);
        if id % PROGRESS_LOG_INTERVAL == 0 {
            debug!(rows = id, "rows written");
        }
    }
    Ok(writer.rows_written())
}
