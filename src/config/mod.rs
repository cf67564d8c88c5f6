//! Configuration for dataset generation and export.
//!
//! Defaults reproduce the reference dataset: 5000 patients, 25 hospitals and
//! 15000 admissions between 2023-01-01 and 2024-12-31, seeded with 42.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{Result, SynthError};

/// Default batch size for Arrow conversion and file writing
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Environment variable overriding [`DEFAULT_BATCH_SIZE`]
pub const BATCH_SIZE_ENV: &str = "SYNTHCARE_BATCH_SIZE";

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date"),
    }
}

/// First day admissions may be scheduled on
pub const DEFAULT_WINDOW_START: NaiveDate = date(2023, 1, 1);
/// Last day admissions may be scheduled on (inclusive)
pub const DEFAULT_WINDOW_END: NaiveDate = date(2024, 12, 31);
/// Date patient ages are anchored to when drawing dates of birth
pub const DEFAULT_REFERENCE_DATE: NaiveDate = date(2025, 1, 1);

/// Helper function to get batch size from environment
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var(BATCH_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&size| size > 0)
}

/// Parameters of the admission simulation
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionConfig {
    /// First possible admission date
    pub window_start: NaiveDate,
    /// Last possible admission date (inclusive)
    pub window_end: NaiveDate,
    /// Probability that an admission ends in death
    pub mortality_probability: f64,
    /// Longest stay (days) of an admission ending in death
    pub mortality_max_days: u32,
    /// ICU probability is `condition risk * icu_risk_factor`
    pub icu_risk_factor: f64,
    /// Gap (days) up to which a readmission counts as a 30-day readmission
    pub short_readmission_days: i64,
    /// Gap (days) up to which an admission counts as a readmission at all
    pub readmission_days: i64,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            window_start: DEFAULT_WINDOW_START,
            window_end: DEFAULT_WINDOW_END,
            mortality_probability: 0.02,
            mortality_max_days: 3,
            icu_risk_factor: 0.5,
            short_readmission_days: 30,
            readmission_days: 90,
        }
    }
}

impl AdmissionConfig {
    /// Check that the parameters describe a usable simulation
    pub fn validate(&self) -> Result<()> {
        if self.window_end < self.window_start {
            return Err(SynthError::config(format!(
                "admission window ends ({}) before it starts ({})",
                self.window_end, self.window_start
            )));
        }
        if !(0.0..=1.0).contains(&self.mortality_probability) {
            return Err(SynthError::config(format!(
                "mortality probability {} is outside [0, 1]",
                self.mortality_probability
            )));
        }
        if self.mortality_max_days == 0 {
            return Err(SynthError::config("mortality stay must allow at least 1 day"));
        }
        if !self.icu_risk_factor.is_finite() || self.icu_risk_factor < 0.0 {
            return Err(SynthError::config(format!(
                "ICU risk factor {} must be a non-negative number",
                self.icu_risk_factor
            )));
        }
        if self.short_readmission_days < 0 || self.readmission_days < self.short_readmission_days {
            return Err(SynthError::config(format!(
                "readmission windows {} / {} days are inconsistent",
                self.short_readmission_days, self.readmission_days
            )));
        }
        Ok(())
    }

    /// Number of days in the admission window, counting both ends
    #[must_use]
    pub fn window_days(&self) -> i64 {
        (self.window_end - self.window_start).num_days() + 1
    }
}

/// Configuration for a full dataset generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Base seed; every stage derives its own stream from it
    pub seed: u64,
    /// Number of patients to generate
    pub patient_count: usize,
    /// Number of hospitals to generate
    pub hospital_count: usize,
    /// Number of admissions to generate
    pub admission_count: usize,
    /// Date patient ages are measured against when sampling dates of birth
    pub reference_date: NaiveDate,
    /// Youngest patient age at the reference date
    pub min_age: u32,
    /// Oldest patient age at the reference date
    pub max_age: u32,
    /// Mean number of procedures per admission (Poisson)
    pub procedures_per_admission: f64,
    /// Mean number of medications per admission (Poisson)
    pub medications_per_admission: f64,
    /// Mean number of lab results per admission (Poisson)
    pub labs_per_admission: f64,
    /// Admission simulation parameters
    pub admission: AdmissionConfig,
    /// Show progress bars for long stages
    pub show_progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            patient_count: 5000,
            hospital_count: 25,
            admission_count: 15000,
            reference_date: DEFAULT_REFERENCE_DATE,
            min_age: 18,
            max_age: 95,
            procedures_per_admission: 2.0,
            medications_per_admission: 3.0,
            labs_per_admission: 5.0,
            admission: AdmissionConfig::default(),
            show_progress: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a generator configuration
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Check the configuration before any sampling happens
    pub fn validate(&self) -> Result<()> {
        if self.patient_count == 0 {
            return Err(SynthError::config("at least one patient is required"));
        }
        if self.hospital_count == 0 {
            return Err(SynthError::config("at least one hospital is required"));
        }
        if self.min_age > self.max_age {
            return Err(SynthError::config(format!(
                "minimum age {} exceeds maximum age {}",
                self.min_age, self.max_age
            )));
        }
        for (name, mean) in [
            ("procedures", self.procedures_per_admission),
            ("medications", self.medications_per_admission),
            ("lab results", self.labs_per_admission),
        ] {
            if !mean.is_finite() || mean <= 0.0 {
                return Err(SynthError::config(format!(
                    "mean {name} per admission must be positive, got {mean}"
                )));
            }
        }
        self.admission.validate()
    }
}

/// Builder for constructing a generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Set the base random seed
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the number of patients
    #[must_use]
    pub const fn patients(mut self, count: usize) -> Self {
        self.config.patient_count = count;
        self
    }

    /// Set the number of hospitals
    #[must_use]
    pub const fn hospitals(mut self, count: usize) -> Self {
        self.config.hospital_count = count;
        self
    }

    /// Set the number of admissions
    #[must_use]
    pub const fn admissions(mut self, count: usize) -> Self {
        self.config.admission_count = count;
        self
    }

    /// Set the reference date for patient ages
    #[must_use]
    pub const fn reference_date(mut self, date: NaiveDate) -> Self {
        self.config.reference_date = date;
        self
    }

    /// Set the admission window
    #[must_use]
    pub const fn admission_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.config.admission.window_start = start;
        self.config.admission.window_end = end;
        self
    }

    /// Set the mortality probability
    #[must_use]
    pub const fn mortality_probability(mut self, probability: f64) -> Self {
        self.config.admission.mortality_probability = probability;
        self
    }

    /// Replace the admission simulation parameters
    #[must_use]
    pub fn admission_config(mut self, admission: AdmissionConfig) -> Self {
        self.config.admission = admission;
        self
    }

    /// Set the mean per-admission counts of procedures, medications and lab results
    #[must_use]
    pub const fn activity_means(mut self, procedures: f64, medications: f64, labs: f64) -> Self {
        self.config.procedures_per_admission = procedures;
        self.config.medications_per_admission = medications;
        self.config.labs_per_admission = labs;
        self
    }

    /// Enable or disable progress bars
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Build the generator configuration
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

/// Output file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Apache Parquet, one file per table
    Parquet,
    /// Comma separated values with a header row
    Csv,
    /// `CREATE TABLE` plus `INSERT` statements
    Sql,
}

impl ExportFormat {
    /// File extension used for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Parquet => "parquet",
            Self::Csv => "csv",
            Self::Sql => "sql",
        }
    }
}

/// Configuration for writing tables to disk
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory the tables are written to
    pub output_dir: PathBuf,
    /// Formats to write; each table is written once per format
    pub formats: Vec<ExportFormat>,
    /// Rows per record batch
    pub batch_size: usize,
    /// Worker threads used for writing tables
    pub threads: usize,
    /// Also write the analytics tables
    pub include_analytics: bool,
    /// Show a progress bar while writing
    pub show_progress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            formats: vec![ExportFormat::Parquet],
            batch_size: get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE),
            threads: num_cpus::get(),
            include_analytics: true,
            show_progress: true,
        }
    }
}

impl ExportConfig {
    /// Create an export configuration writing to `output_dir`
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the formats to write
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<ExportFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Check the export configuration
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(SynthError::config("no export format selected"));
        }
        if self.batch_size == 0 {
            return Err(SynthError::config("batch size must be positive"));
        }
        if self.threads == 0 {
            return Err(SynthError::config("at least one export thread is required"));
        }
        Ok(())
    }
}
