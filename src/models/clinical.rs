//! Clinical activity recorded during an admission

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::types::{AbnormalFlag, MedicationFrequency, ProcedureOutcome};

/// A procedure performed during an admission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    /// Identifier (`PP80001`, ...)
    pub patient_procedure_id: String,
    pub admission_id: String,
    /// Catalog procedure id (`P60001`, ...)
    pub procedure_id: String,
    pub procedure_date: NaiveDate,
    pub duration_minutes: u32,
    pub performing_physician: String,
    pub outcome: ProcedureOutcome,
    pub complications: Option<String>,
}

/// A medication administered during an admission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    /// Identifier (`PM90001`, ...)
    pub patient_medication_id: String,
    pub admission_id: String,
    /// Catalog medication id (`M70001`, ...)
    pub medication_id: String,
    pub start_date: NaiveDateTime,
    /// Never before `start_date`
    pub end_date: NaiveDateTime,
    pub dosage: String,
    pub frequency: MedicationFrequency,
    pub prescribing_physician: String,
}

/// A lab test result taken during an admission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    /// Identifier (`L100001`, ...)
    pub lab_result_id: String,
    pub admission_id: String,
    pub test_name: String,
    pub test_date: NaiveDateTime,
    /// Value formatted with two decimals
    pub result_value: String,
    pub result_unit: String,
    pub reference_range: String,
    pub abnormal_flag: AbnormalFlag,
    /// Free-text note, present only for abnormal results
    pub interpretation: Option<String>,
}
