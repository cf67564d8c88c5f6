//! Generation algorithms
//!
//! [`dataset::generate_dataset`] drives the stages; each submodule can also
//! be used on its own with caller-supplied inputs and random source.

pub mod admission;
pub mod billing;
pub mod clinical;
pub mod dataset;
pub mod population;
pub mod sampling;

pub use dataset::{Dataset, generate_dataset};
