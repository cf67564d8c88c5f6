//! Error handling for dataset generation and export.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for synthcare operations
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// IO error tied to a specific path
    #[error("IO error at {path}: {context}: {source}")]
    PathError {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Error building or formatting Arrow data
    #[error("Arrow error: {0}")]
    ArrowError(#[from] ArrowError),

    /// Error reading or writing Parquet data
    #[error("Parquet error: {0}")]
    ParquetError(#[from] ParquetError),

    /// Error converting records to or from Arrow
    #[error("Serialization error: {0}")]
    SerdeArrowError(#[from] serde_arrow::Error),

    /// Error writing the JSON summary
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A random selection was attempted from an empty collection
    #[error("Empty selection: {0}")]
    EmptySelection(String),

    /// Input collections violate a generation precondition
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid distribution parameters
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// Error exporting or loading a table
    #[error("Export error: {0}")]
    Export(String),
}

impl SynthError {
    /// Create an IO error annotated with the path and what was being done
    pub fn at_path(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::PathError {
            path: path.into(),
            context: context.into(),
            source,
        }
    }

    /// Create an empty-selection error
    pub fn empty_selection(what: impl Into<String>) -> Self {
        Self::EmptySelection(what.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type for synthcare operations
pub type Result<T> = std::result::Result<T, SynthError>;
