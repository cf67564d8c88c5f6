//! Dataset summary

use serde::{Deserialize, Serialize};

use crate::algorithm::Dataset;
use crate::analytics::percentage;
use crate::models::Admission;

/// Row counts and readmission totals of a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub patients: usize,
    pub hospitals: usize,
    pub departments: usize,
    pub medical_conditions: usize,
    pub admissions: usize,
    pub procedures: usize,
    pub medications: usize,
    pub lab_results: usize,
    pub billing: usize,
    pub readmissions: usize,
    pub readmissions_30day: usize,
    /// Percent of admissions flagged as 30-day readmissions
    pub readmission_rate_30day: f64,
}

impl DatasetSummary {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            patients: dataset.patients.len(),
            hospitals: dataset.hospitals.len(),
            departments: dataset.departments.len(),
            medical_conditions: dataset.conditions.len(),
            procedures: dataset.procedures.len(),
            medications: dataset.medications.len(),
            lab_results: dataset.lab_results.len(),
            billing: dataset.billing.len(),
            ..Self::from_admissions(&dataset.admissions)
        }
    }

    /// Admission and readmission counts only
    #[must_use]
    pub fn from_admissions(admissions: &[Admission]) -> Self {
        let readmissions = admissions.iter().filter(|a| a.readmission_flag).count();
        let readmissions_30day = admissions
            .iter()
            .filter(|a| a.readmission_within_30days)
            .count();
        Self {
            admissions: admissions.len(),
            readmissions,
            readmissions_30day,
            readmission_rate_30day: percentage(readmissions_30day, admissions.len()).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Log the summary at info level
    pub fn log(&self) {
        log::info!("Patients:            {}", self.patients);
        log::info!("Hospitals:           {}", self.hospitals);
        log::info!("Departments:         {}", self.departments);
        log::info!("Medical conditions:  {}", self.medical_conditions);
        log::info!("Admissions:          {}", self.admissions);
        log::info!("Procedures:          {}", self.procedures);
        log::info!("Medications:         {}", self.medications);
        log::info!("Lab results:         {}", self.lab_results);
        log::info!("Billing records:     {}", self.billing);
        log::info!(
            "Readmissions:        {} ({} within 30 days, {:.2}%)",
            self.readmissions,
            self.readmissions_30day,
            self.readmission_rate_30day
        );
    }
}
