//! Full dataset generation
//!
//! Runs every generation stage in order. Each stage draws from its own
//! random stream derived from the configured seed.

use std::time::Instant;

use log::info;

use crate::algorithm::admission::{AdmissionSimulator, SimulationInputs};
use crate::algorithm::billing::generate_billing;
use crate::algorithm::clinical::{generate_lab_results, generate_medications, generate_procedures};
use crate::algorithm::population::{generate_departments, generate_hospitals, generate_patients};
use crate::algorithm::sampling::{Stage, stage_rng};
use crate::analytics::DatasetSummary;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{
    Admission, Billing, Department, Hospital, LabResult, MedicalCondition, Medication, Patient,
    Procedure, reference_conditions,
};

/// Every table of one generated dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub patients: Vec<Patient>,
    pub hospitals: Vec<Hospital>,
    pub departments: Vec<Department>,
    pub conditions: Vec<MedicalCondition>,
    pub admissions: Vec<Admission>,
    pub procedures: Vec<Procedure>,
    pub medications: Vec<Medication>,
    pub lab_results: Vec<LabResult>,
    pub billing: Vec<Billing>,
}

impl Dataset {
    /// Row counts and readmission totals
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::from_dataset(self)
    }
}

/// Generate a complete dataset
///
/// Stage order: patients, hospitals, departments, admissions, procedures,
/// medications, lab results, billing.
pub fn generate_dataset(config: &GeneratorConfig) -> Result<Dataset> {
    config.validate()?;
    let start = Instant::now();
    info!(
        "Generating dataset: {} patients, {} hospitals, {} admissions (seed {})",
        config.patient_count, config.hospital_count, config.admission_count, config.seed
    );

    let patients = generate_patients(
        config.patient_count,
        config,
        &mut stage_rng(config.seed, Stage::Patients),
    )?;
    let hospitals = generate_hospitals(
        config.hospital_count,
        &mut stage_rng(config.seed, Stage::Hospitals),
    )?;
    let departments = generate_departments(&hospitals, &mut stage_rng(config.seed, Stage::Departments))?;
    let conditions = reference_conditions();
    info!(
        "Generated {} patients, {} hospitals, {} departments",
        patients.len(),
        hospitals.len(),
        departments.len()
    );

    let admissions = {
        let inputs = SimulationInputs::new(&patients, &hospitals, &departments, &conditions)?;
        let mut simulator = AdmissionSimulator::new(inputs, config.admission.clone())?;
        simulator.generate(
            config.admission_count,
            &mut stage_rng(config.seed, Stage::Admissions),
            config.show_progress,
        )?
    };

    let procedures = generate_procedures(
        &admissions,
        config.procedures_per_admission,
        &mut stage_rng(config.seed, Stage::Procedures),
    )?;
    let medications = generate_medications(
        &admissions,
        config.medications_per_admission,
        &mut stage_rng(config.seed, Stage::Medications),
    )?;
    let lab_results = generate_lab_results(
        &admissions,
        config.labs_per_admission,
        &mut stage_rng(config.seed, Stage::LabResults),
    )?;
    let billing = generate_billing(&admissions, &mut stage_rng(config.seed, Stage::Billing))?;

    let dataset = Dataset {
        patients,
        hospitals,
        departments,
        conditions,
        admissions,
        procedures,
        medications,
        lab_results,
        billing,
    };

    info!("Dataset generated in {:?}", start.elapsed());
    Ok(dataset)
}
