//! Admission history simulation
//!
//! Generates admissions for a fixed population, linking each one to the
//! patient's earlier stays to derive 30- and 90-day readmission flags.
//!
//! 1. [`inputs`] validates and indexes patients, hospitals, departments and conditions
//! 2. [`history`] keeps the per-patient discharge history of the run
//! 3. [`readmission`] classifies a new admission against that history
//! 4. [`simulator`] samples and emits admissions in sequence

pub mod history;
pub mod inputs;
pub mod readmission;
pub mod simulator;

pub use history::{AdmissionHistory, PriorDischarge};
pub use inputs::SimulationInputs;
pub use readmission::{ReadmissionAssessment, assess_readmission};
pub use simulator::{AdmissionSimulator, emit_admission_on, emit_next_admission, sample_admission_date};
