//! Parquet writing and reading

use std::path::Path;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use serde::de::DeserializeOwned;

use crate::config::{DEFAULT_BATCH_SIZE, get_batch_size};
use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{Result, SynthError};
use crate::export::batches::from_record_batches;
use crate::utils::logging::{TableIo, log_table_finished, log_table_started};

/// Write record batches to a Snappy-compressed Parquet file
pub fn write_parquet(path: &Path, batches: &[RecordBatch]) -> Result<usize> {
    let Some(first) = batches.first() else {
        return Err(SynthError::Export(format!("no batches to write to {}", path.display())));
    };

    let file = safe_create_file(path, "Parquet export")?;
    let properties = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, first.schema(), Some(properties))?;

    let mut rows = 0;
    for batch in batches {
        writer.write(batch)?;
        rows += batch.num_rows();
    }
    writer.close()?;
    Ok(rows)
}

/// Read a Parquet file into Arrow record batches
///
/// # Arguments
/// * `path` - Path to the Parquet file
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_table_started(TableIo::Read, path);

    let file = safe_open_file(path, "Parquet import")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE))
        .build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_table_finished(TableIo::Read, path, rows, start.elapsed());
    Ok(batches)
}

/// Read a Parquet table back into records
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let batches = read_parquet(path)?;
    from_record_batches(&batches)
}
