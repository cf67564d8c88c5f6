//! Population generation
//!
//! Patients, hospitals and departments: the fixed population an admission
//! run samples from.

pub mod hospitals;
pub mod patients;

pub use hospitals::{generate_departments, generate_hospitals};
pub use patients::generate_patients;
