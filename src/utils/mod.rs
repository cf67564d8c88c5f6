//! Utility functions shared across the crate

pub mod logging;
pub mod test;
