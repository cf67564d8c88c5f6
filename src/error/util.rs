//! Utility functions for error handling
//!
//! File system helpers that attach the path and purpose to any failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SynthError};

/// Safely open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(SynthError::at_path(
            path,
            format!("Needed for: {purpose}"),
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        SynthError::at_path(path, context, e)
    })
}

/// Create (or truncate) a file for writing with rich error information
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path)
        .map_err(|e| SynthError::at_path(path, format!("Failed to create file for: {purpose}"), e))
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(SynthError::at_path(
            path,
            format!("Expected a directory for: {purpose}"),
            io::Error::new(io::ErrorKind::NotFound, "directory not found"),
        ));
    }

    fs::read_dir(path).map(|_| ()).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check directory permissions".to_string()
            }
            _ => format!("Failed to access directory for: {purpose}"),
        };
        SynthError::at_path(path, context, e)
    })
}

/// Make sure an output directory exists, creating it and its parents if needed
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
        .map_err(|e| SynthError::at_path(path, "Failed to create output directory", e))
}
