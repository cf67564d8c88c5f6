//! Admission entity model
//!
//! Admissions are the records produced by the admission simulation. Each one
//! is created once and never modified; readmission flags refer back to an
//! earlier admission of the same patient.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::types::{AdmissionSource, AdmissionType, DischargeDisposition};

/// A single hospital stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    /// Identifier assigned in emission order (`A20001`, ...)
    pub admission_id: String,
    pub patient_id: String,
    pub hospital_id: String,
    /// Department of `hospital_id`
    pub department_id: String,
    pub admission_date: NaiveDate,
    /// Never before `admission_date`
    pub discharge_date: NaiveDate,
    pub admission_type: AdmissionType,
    pub admission_source: AdmissionSource,
    pub primary_diagnosis_id: String,
    /// Comma separated condition ids, excluding the primary diagnosis
    pub secondary_diagnoses: String,
    pub attending_physician: String,
    /// Discharge date minus admission date, at least 1
    pub length_of_stay_days: u32,
    pub patient_age_at_admission: i32,
    /// Admitted within the readmission window of a prior discharge
    pub readmission_flag: bool,
    /// Admitted within the 30-day window of a prior discharge
    pub readmission_within_30days: bool,
    /// The prior admission the readmission flags refer to
    pub previous_admission_id: Option<String>,
    pub discharge_disposition: DischargeDisposition,
    pub mortality_flag: bool,
    pub icu_stay_flag: bool,
    /// 0 unless `icu_stay_flag` is set and the stay is longer than a day
    pub icu_days: u32,
}

impl Admission {
    /// Days between admission and discharge
    #[must_use]
    pub fn stay_days(&self) -> i64 {
        (self.discharge_date - self.admission_date).num_days()
    }

    /// Secondary diagnosis ids as a list
    #[must_use]
    pub fn secondary_diagnosis_ids(&self) -> Vec<&str> {
        self.secondary_diagnoses
            .split(',')
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// `YYYY-MM` of the admission date
    #[must_use]
    pub fn admission_month(&self) -> String {
        self.admission_date.format("%Y-%m").to_string()
    }
}
