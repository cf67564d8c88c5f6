//! Synthetic hospital admission datasets with readmission linkage.
//!
//! Generates patients, hospitals and departments, simulates a sequence of
//! admissions whose 30- and 90-day readmission flags link back to each
//! patient's earlier stays, and derives procedures, medications, lab
//! results and bills from the admissions. Datasets can be checked for
//! consistency, summarized, and exported to Parquet, CSV or SQL.

pub mod algorithm;
pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod quality;
pub mod utils;

// Core types
pub use config::{AdmissionConfig, ExportConfig, ExportFormat, GeneratorConfig};
pub use error::{Result, SynthError};

// Generation
pub use algorithm::admission::{AdmissionHistory, AdmissionSimulator, SimulationInputs};
pub use algorithm::{Dataset, generate_dataset};

// Reporting and export
pub use analytics::DatasetSummary;
pub use export::{load_dataset, read_table, write_dataset};
pub use quality::{QualityReport, check_admissions, check_dataset};
