//! Table export and loading
//!
//! Every table is converted to Arrow record batches once and then written
//! in each requested format. Files are written in parallel on a dedicated
//! rayon pool; a table with no rows produces no file.

pub mod batches;
pub mod csv;
pub mod parquet;
pub mod sql;

use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::algorithm::Dataset;
use crate::analytics::{DatasetSummary, hospital_kpis, monthly_revenue, readmission_by_diagnosis};
use crate::config::{ExportConfig, ExportFormat};
use crate::error::util::{ensure_output_directory, safe_create_file, validate_directory};
use crate::error::{Result, SynthError};
use crate::utils::logging::{
    TableIo, create_main_progress_bar, finish_and_clear, log_table_finished, log_table_started,
};

pub use self::batches::{from_record_batches, to_record_batches};
pub use self::parquet::{read_parquet, read_table};

pub const PATIENTS: &str = "patients";
pub const HOSPITALS: &str = "hospitals";
pub const DEPARTMENTS: &str = "departments";
pub const MEDICAL_CONDITIONS: &str = "medical_conditions";
pub const ADMISSIONS: &str = "admissions";
pub const PROCEDURES: &str = "patient_procedures";
pub const MEDICATIONS: &str = "patient_medications";
pub const LAB_RESULTS: &str = "lab_results";
pub const BILLING: &str = "billing";
pub const HOSPITAL_KPIS: &str = "hospital_kpis";
pub const READMISSION_BY_DIAGNOSIS: &str = "readmission_by_diagnosis";
pub const MONTHLY_REVENUE: &str = "monthly_revenue";

/// File name of the dataset summary
pub const SUMMARY_FILE: &str = "summary.json";

/// One table converted to record batches
#[derive(Debug, Clone)]
pub struct TableData {
    pub name: &'static str,
    pub rows: usize,
    pub batches: Vec<RecordBatch>,
}

impl TableData {
    /// Convert `rows` into a table named `name`
    pub fn from_rows<T: Serialize>(name: &'static str, rows: &[T], batch_size: usize) -> Result<Self> {
        Ok(Self {
            name,
            rows: rows.len(),
            batches: to_record_batches(rows, batch_size)?,
        })
    }

    /// Path of this table in `dir` for `format`
    #[must_use]
    pub fn path(&self, dir: &Path, format: ExportFormat) -> PathBuf {
        table_path(dir, self.name, format)
    }
}

/// `<dir>/<table>.<extension>`
#[must_use]
pub fn table_path(dir: &Path, table: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{table}.{}", format.extension()))
}

/// The nine generated tables
pub fn dataset_tables(dataset: &Dataset, batch_size: usize) -> Result<Vec<TableData>> {
    Ok(vec![
        TableData::from_rows(PATIENTS, &dataset.patients, batch_size)?,
        TableData::from_rows(HOSPITALS, &dataset.hospitals, batch_size)?,
        TableData::from_rows(DEPARTMENTS, &dataset.departments, batch_size)?,
        TableData::from_rows(MEDICAL_CONDITIONS, &dataset.conditions, batch_size)?,
        TableData::from_rows(ADMISSIONS, &dataset.admissions, batch_size)?,
        TableData::from_rows(PROCEDURES, &dataset.procedures, batch_size)?,
        TableData::from_rows(MEDICATIONS, &dataset.medications, batch_size)?,
        TableData::from_rows(LAB_RESULTS, &dataset.lab_results, batch_size)?,
        TableData::from_rows(BILLING, &dataset.billing, batch_size)?,
    ])
}

/// The three analytics tables
pub fn analytics_tables(dataset: &Dataset, batch_size: usize) -> Result<Vec<TableData>> {
    Ok(vec![
        TableData::from_rows(
            HOSPITAL_KPIS,
            &hospital_kpis(&dataset.hospitals, &dataset.admissions, &dataset.billing),
            batch_size,
        )?,
        TableData::from_rows(
            READMISSION_BY_DIAGNOSIS,
            &readmission_by_diagnosis(&dataset.conditions, &dataset.admissions),
            batch_size,
        )?,
        TableData::from_rows(
            MONTHLY_REVENUE,
            &monthly_revenue(&dataset.admissions, &dataset.billing),
            batch_size,
        )?,
    ])
}

/// Write one table in one format
pub fn write_table(table: &TableData, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let start = Instant::now();
    let path = table.path(dir, format);
    log_table_started(TableIo::Write, &path);

    let rows = match format {
        ExportFormat::Parquet => self::parquet::write_parquet(&path, &table.batches)?,
        ExportFormat::Csv => self::csv::write_csv(&path, &table.batches)?,
        ExportFormat::Sql => self::sql::write_sql(&path, table.name, &table.batches)?,
    };

    log_table_finished(TableIo::Write, &path, rows, start.elapsed());
    Ok(path)
}

/// Write tables in every configured format, in parallel
///
/// Returns the written paths, in table order then format order.
pub fn write_tables(tables: &[TableData], config: &ExportConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    ensure_output_directory(&config.output_dir)?;

    let jobs: Vec<(&TableData, ExportFormat)> = tables
        .iter()
        .filter(|table| {
            if table.rows == 0 {
                log::warn!("Table {} is empty, skipping", table.name);
            }
            table.rows > 0
        })
        .flat_map(|table| config.formats.iter().map(move |format| (table, *format)))
        .collect();

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| SynthError::Export(format!("failed to start export threads: {e}")))?;

    let pb = create_main_progress_bar(jobs.len() as u64, Some("Writing tables"), config.show_progress);
    let written = pool.install(|| {
        jobs.par_iter()
            .map(|(table, format)| {
                let path = write_table(table, *format, &config.output_dir);
                pb.inc(1);
                path
            })
            .collect::<Result<Vec<_>>>()
    });
    finish_and_clear(&pb);
    written
}

/// Write the dataset summary as pretty-printed JSON
pub fn write_summary(dir: &Path, summary: &DatasetSummary) -> Result<PathBuf> {
    ensure_output_directory(dir)?;
    let path = dir.join(SUMMARY_FILE);
    let file = safe_create_file(&path, "dataset summary")?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(path)
}

/// Write every table of a dataset, the analytics tables if enabled, and the summary
pub fn write_dataset(dataset: &Dataset, config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let start = Instant::now();
    let mut tables = dataset_tables(dataset, config.batch_size)?;
    if config.include_analytics {
        tables.extend(analytics_tables(dataset, config.batch_size)?);
    }

    let mut written = write_tables(&tables, config)?;
    written.push(write_summary(&config.output_dir, &dataset.summary())?);

    log::info!(
        "Exported {} files to {} in {:?}",
        written.len(),
        config.output_dir.display(),
        start.elapsed()
    );
    Ok(written)
}

fn load_or_empty<T: DeserializeOwned>(dir: &Path, table: &str) -> Result<Vec<T>> {
    let path = table_path(dir, table, ExportFormat::Parquet);
    if path.is_file() {
        read_table(&path)
    } else {
        log::warn!("Table {table} not found at {}, treating it as empty", path.display());
        Ok(Vec::new())
    }
}

fn load_required<T: DeserializeOwned>(dir: &Path, table: &str) -> Result<Vec<T>> {
    let path = table_path(dir, table, ExportFormat::Parquet);
    if !path.is_file() {
        return Err(SynthError::Export(format!(
            "required table {table} not found at {}",
            path.display()
        )));
    }
    read_table(&path)
}

/// Load a dataset previously written as Parquet
///
/// The population, condition and admission tables must be present. Child
/// tables without a file load as empty, matching how empty tables are
/// skipped on export.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    validate_directory(dir, "dataset import")?;
    Ok(Dataset {
        patients: load_required(dir, PATIENTS)?,
        hospitals: load_required(dir, HOSPITALS)?,
        departments: load_required(dir, DEPARTMENTS)?,
        conditions: load_required(dir, MEDICAL_CONDITIONS)?,
        admissions: load_required(dir, ADMISSIONS)?,
        procedures: load_or_empty(dir, PROCEDURES)?,
        medications: load_or_empty(dir, MEDICATIONS)?,
        lab_results: load_or_empty(dir, LAB_RESULTS)?,
        billing: load_or_empty(dir, BILLING)?,
    })
}
