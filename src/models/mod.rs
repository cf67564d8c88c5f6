//! Domain models for the synthetic hospital dataset
//!
//! Every record type derives serde traits so it can be converted to Arrow
//! record batches and written to any export format.

pub mod admission;
pub mod billing;
pub mod clinical;
pub mod condition;
pub mod hospital;
pub mod patient;
pub mod types;

pub use admission::Admission;
pub use billing::Billing;
pub use clinical::{LabResult, Medication, Procedure};
pub use condition::{MedicalCondition, reference_conditions};
pub use hospital::{Department, Hospital};
pub use patient::Patient;
pub use types::*;
