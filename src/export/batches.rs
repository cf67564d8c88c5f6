//! Conversion between record slices and Arrow record batches

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::{Result, SynthError};

/// Arrow fields for `rows`, traced from the rows themselves
///
/// Coded enums serialize as their labels and so trace as strings. A column
/// that is null in every sampled row is typed as a nullable string.
pub fn trace_fields<T: Serialize>(rows: &[T]) -> Result<Vec<FieldRef>> {
    let options = TracingOptions::default().allow_null_fields(true);
    let fields = Vec::<FieldRef>::from_samples(rows, options)?;

    Ok(fields
        .into_iter()
        .map(|field| {
            if field.data_type() == &DataType::Null {
                Arc::new(Field::new(field.name(), DataType::LargeUtf8, true))
            } else {
                field
            }
        })
        .collect())
}

/// Convert `rows` into record batches of at most `batch_size` rows
pub fn to_record_batches<T: Serialize>(rows: &[T], batch_size: usize) -> Result<Vec<RecordBatch>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let fields = trace_fields(rows)?;
    rows.chunks(batch_size.max(1))
        .map(|chunk| serde_arrow::to_record_batch(&fields, &chunk).map_err(SynthError::from))
        .collect()
}

/// Convert record batches back into records
pub fn from_record_batches<T: DeserializeOwned>(batches: &[RecordBatch]) -> Result<Vec<T>> {
    let mut rows = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in batches {
        rows.extend(serde_arrow::from_record_batch::<Vec<T>>(batch)?);
    }
    Ok(rows)
}
