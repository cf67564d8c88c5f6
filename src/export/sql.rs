//! SQL script writing
//!
//! Each table becomes one script: a `CREATE TABLE` statement followed by
//! one `INSERT` per row. Strings are single-quoted with embedded quotes
//! doubled, nulls are `NULL` and booleans are `1`/`0`.
//!
//! Dates travel through Arrow as ISO strings, so text columns whose values
//! parse as dates or timestamps are declared `DATE` or `TIMESTAMP`.

use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::array::{Array, AsArray};
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use arrow_schema::{DataType, Field, Schema};
use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;

use crate::error::util::safe_create_file;
use crate::error::{Result, SynthError};

/// SQL column type for an Arrow type
#[must_use]
pub fn sql_type(data_type: &DataType) -> &'static str {
    match data_type {
        DataType::Boolean => "SMALLINT",
        DataType::Int8 | DataType::Int16 | DataType::UInt8 | DataType::UInt16 => "SMALLINT",
        DataType::Int32 | DataType::UInt32 => "INTEGER",
        DataType::Int64 | DataType::UInt64 => "BIGINT",
        DataType::Float16 | DataType::Float32 | DataType::Float64 => "DOUBLE PRECISION",
        DataType::Date32 | DataType::Date64 => "DATE",
        DataType::Timestamp(_, _) => "TIMESTAMP",
        DataType::Dictionary(_, value) => sql_type(value),
        _ => "VARCHAR(255)",
    }
}

/// Temporal SQL type of an ISO date or timestamp string
fn temporal_type(value: &str) -> Option<&'static str> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Some("DATE")
    } else if NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok() {
        Some("TIMESTAMP")
    } else {
        None
    }
}

fn first_string(batches: &[RecordBatch], index: usize) -> Option<&str> {
    batches.iter().find_map(|batch| {
        let column = batch.column(index);
        let position = (0..column.len()).find(|&row| column.is_valid(row))?;
        match column.data_type() {
            DataType::Utf8 => Some(column.as_string::<i32>().value(position)),
            DataType::LargeUtf8 => Some(column.as_string::<i64>().value(position)),
            _ => None,
        }
    })
}

/// SQL types of every column, looking at the first non-null value of text
/// columns to spot dates
#[must_use]
pub fn column_types(batches: &[RecordBatch]) -> Vec<&'static str> {
    let Some(first) = batches.first() else {
        return Vec::new();
    };
    first
        .schema()
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| match field.data_type() {
            DataType::Utf8 | DataType::LargeUtf8 => first_string(batches, index)
                .and_then(temporal_type)
                .unwrap_or("VARCHAR(255)"),
            other => sql_type(other),
        })
        .collect()
}

/// `CREATE TABLE` statement; the first column is the primary key
#[must_use]
pub fn create_table_statement(table: &str, schema: &Schema, types: &[&str]) -> String {
    let columns = schema
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let sql = types.get(index).copied().unwrap_or_else(|| sql_type(field.data_type()));
            column_definition(field, sql, index == 0)
        })
        .join(",\n");
    format!("CREATE TABLE {table} (\n{columns}\n);\n")
}

fn column_definition(field: &Field, sql: &str, primary_key: bool) -> String {
    let mut definition = format!("    {} {sql}", field.name());
    if primary_key {
        definition.push_str(" PRIMARY KEY");
    } else if !field.is_nullable() {
        definition.push_str(" NOT NULL");
    }
    definition
}

/// Quote a string literal, doubling embedded single quotes
#[must_use]
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn is_numeric(data_type: &DataType) -> bool {
    data_type.is_integer() || data_type.is_floating()
}

/// `INSERT` statements for every row of a batch
pub fn insert_statements(table: &str, batch: &RecordBatch) -> Result<Vec<String>> {
    let schema = batch.schema();
    let column_list = schema.fields().iter().map(|f| f.name()).join(", ");

    let options = FormatOptions::default();
    let formatters = batch
        .columns()
        .iter()
        .map(|column| ArrayFormatter::try_new(column.as_ref(), &options))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    (0..batch.num_rows())
        .map(|row| -> Result<String> {
            let values = batch
                .columns()
                .iter()
                .zip(&formatters)
                .map(|(column, formatter)| -> Result<String> {
                    if column.is_null(row) {
                        return Ok("NULL".to_string());
                    }
                    if column.data_type() == &DataType::Boolean {
                        return Ok(u8::from(column.as_boolean().value(row)).to_string());
                    }
                    let text = formatter.value(row).try_to_string()?;
                    Ok(if is_numeric(column.data_type()) { text } else { quote(&text) })
                })
                .collect::<Result<Vec<String>>>()?;
            Ok(format!("INSERT INTO {table} ({column_list}) VALUES ({});", values.join(", ")))
        })
        .collect()
}

/// Write a table as a SQL script
pub fn write_sql(path: &Path, table: &str, batches: &[RecordBatch]) -> Result<usize> {
    let Some(first) = batches.first() else {
        return Err(SynthError::Export(format!("no batches to write to {}", path.display())));
    };

    let mut writer = BufWriter::new(safe_create_file(path, "SQL export")?);
    let types = column_types(batches);
    writeln!(writer, "{}", create_table_statement(table, &first.schema(), &types))?;

    let mut rows = 0;
    for batch in batches {
        for statement in insert_statements(table, batch)? {
            writeln!(writer, "{statement}")?;
        }
        rows += batch.num_rows();
    }
    writer.flush()?;
    Ok(rows)
}
