//! CSV writing

use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::error::util::safe_create_file;

/// Write record batches as CSV with a header row
///
/// Null values are written as empty fields.
pub fn write_csv(path: &Path, batches: &[RecordBatch]) -> Result<usize> {
    let file = safe_create_file(path, "CSV export")?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .build(BufWriter::new(file));

    let mut rows = 0;
    for batch in batches {
        writer.write(batch)?;
        rows += batch.num_rows();
    }
    writer.into_inner().flush()?;
    Ok(rows)
}
