//! Medical condition reference table and clinical catalogs
//!
//! The condition table drives length-of-stay and ICU sampling. The procedure,
//! medication and lab catalogs are only used when generating clinical
//! activity for admissions.

use serde::{Deserialize, Serialize};

use crate::models::types::{ConditionCategory, ProcedureComplexity, SeverityLevel};

/// A primary diagnosis with its simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalCondition {
    /// Identifier (`C10001` .. `C10010`)
    pub condition_id: String,
    pub condition_name: String,
    pub icd10_code: String,
    pub category: ConditionCategory,
    pub severity_level: SeverityLevel,
    /// Synthetic risk in [0, 1]; biases ICU admission only
    pub risk: f64,
    /// Mean length of stay in days
    pub los_mean: f64,
    /// Standard deviation of the length of stay in days
    pub los_std: f64,
}

impl MedicalCondition {
    /// Create a condition with the given simulation parameters
    #[must_use]
    pub fn new(condition_id: &str, condition_name: &str, risk: f64, los_mean: f64, los_std: f64) -> Self {
        Self {
            condition_id: condition_id.to_string(),
            condition_name: condition_name.to_string(),
            icd10_code: String::new(),
            category: ConditionCategory::Cardiovascular,
            severity_level: SeverityLevel::Moderate,
            risk,
            los_mean,
            los_std,
        }
    }
}

struct ConditionRow {
    id: &'static str,
    name: &'static str,
    icd10: &'static str,
    category: ConditionCategory,
    severity: SeverityLevel,
    risk: f64,
    los_mean: f64,
    los_std: f64,
}

#[rustfmt::skip]
const CONDITIONS: [ConditionRow; 10] = [
    ConditionRow { id: "C10001", name: "Diabetes Mellitus Type 2", icd10: "E11.9", category: ConditionCategory::Endocrine, severity: SeverityLevel::Moderate, risk: 0.30, los_mean: 4.0, los_std: 2.0 },
    ConditionRow { id: "C10002", name: "Hypertension", icd10: "I10", category: ConditionCategory::Cardiovascular, severity: SeverityLevel::Moderate, risk: 0.15, los_mean: 3.0, los_std: 1.0 },
    ConditionRow { id: "C10003", name: "Congestive Heart Failure", icd10: "I50.9", category: ConditionCategory::Cardiovascular, severity: SeverityLevel::Severe, risk: 0.45, los_mean: 7.0, los_std: 3.0 },
    ConditionRow { id: "C10004", name: "COPD", icd10: "J44.9", category: ConditionCategory::Respiratory, severity: SeverityLevel::Severe, risk: 0.40, los_mean: 6.0, los_std: 2.0 },
    ConditionRow { id: "C10005", name: "Acute Myocardial Infarction", icd10: "I21.9", category: ConditionCategory::Cardiovascular, severity: SeverityLevel::Critical, risk: 0.35, los_mean: 8.0, los_std: 3.0 },
    ConditionRow { id: "C10006", name: "Pneumonia", icd10: "J18.9", category: ConditionCategory::Respiratory, severity: SeverityLevel::Severe, risk: 0.38, los_mean: 5.0, los_std: 2.0 },
    ConditionRow { id: "C10007", name: "Chronic Kidney Disease", icd10: "N18.9", category: ConditionCategory::Renal, severity: SeverityLevel::Severe, risk: 0.42, los_mean: 6.0, los_std: 3.0 },
    ConditionRow { id: "C10008", name: "Sepsis", icd10: "A41.9", category: ConditionCategory::Infectious, severity: SeverityLevel::Critical, risk: 0.50, los_mean: 10.0, los_std: 4.0 },
    ConditionRow { id: "C10009", name: "Stroke", icd10: "I63.9", category: ConditionCategory::Neurological, severity: SeverityLevel::Critical, risk: 0.40, los_mean: 9.0, los_std: 4.0 },
    ConditionRow { id: "C10010", name: "Atrial Fibrillation", icd10: "I48.91", category: ConditionCategory::Cardiovascular, severity: SeverityLevel::Moderate, risk: 0.28, los_mean: 4.0, los_std: 2.0 },
];

/// The fixed table of ten reference conditions
#[must_use]
pub fn reference_conditions() -> Vec<MedicalCondition> {
    CONDITIONS
        .iter()
        .map(|row| MedicalCondition {
            condition_id: row.id.to_string(),
            condition_name: row.name.to_string(),
            icd10_code: row.icd10.to_string(),
            category: row.category,
            severity_level: row.severity,
            risk: row.risk,
            los_mean: row.los_mean,
            los_std: row.los_std,
        })
        .collect()
}

/// A procedure that can be performed during an admission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcedureDefinition {
    pub procedure_id: &'static str,
    pub name: &'static str,
    pub complexity: ProcedureComplexity,
    /// Typical duration in minutes
    pub base_duration_minutes: u32,
}

/// Procedure catalog
#[rustfmt::skip]
pub const PROCEDURES: [ProcedureDefinition; 10] = [
    ProcedureDefinition { procedure_id: "P60001", name: "Cardiac Catheterization", complexity: ProcedureComplexity::High, base_duration_minutes: 90 },
    ProcedureDefinition { procedure_id: "P60002", name: "Coronary Artery Bypass Graft", complexity: ProcedureComplexity::Critical, base_duration_minutes: 240 },
    ProcedureDefinition { procedure_id: "P60003", name: "Hip Replacement", complexity: ProcedureComplexity::Medium, base_duration_minutes: 120 },
    ProcedureDefinition { procedure_id: "P60004", name: "Appendectomy", complexity: ProcedureComplexity::Medium, base_duration_minutes: 60 },
    ProcedureDefinition { procedure_id: "P60005", name: "Colonoscopy", complexity: ProcedureComplexity::Low, base_duration_minutes: 30 },
    ProcedureDefinition { procedure_id: "P60006", name: "Chest X-Ray", complexity: ProcedureComplexity::Low, base_duration_minutes: 15 },
    ProcedureDefinition { procedure_id: "P60007", name: "CT Scan", complexity: ProcedureComplexity::Low, base_duration_minutes: 20 },
    ProcedureDefinition { procedure_id: "P60008", name: "MRI", complexity: ProcedureComplexity::Low, base_duration_minutes: 45 },
    ProcedureDefinition { procedure_id: "P60009", name: "Dialysis", complexity: ProcedureComplexity::Medium, base_duration_minutes: 180 },
    ProcedureDefinition { procedure_id: "P60010", name: "Mechanical Ventilation", complexity: ProcedureComplexity::Critical, base_duration_minutes: 360 },
];

/// A medication that can be prescribed during an admission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicationDefinition {
    pub medication_id: &'static str,
    pub name: &'static str,
    pub drug_class: &'static str,
}

/// Medication catalog
#[rustfmt::skip]
pub const MEDICATIONS: [MedicationDefinition; 10] = [
    MedicationDefinition { medication_id: "M70001", name: "Metformin", drug_class: "Antidiabetic" },
    MedicationDefinition { medication_id: "M70002", name: "Lisinopril", drug_class: "Antihypertensive" },
    MedicationDefinition { medication_id: "M70003", name: "Atorvastatin", drug_class: "Statin" },
    MedicationDefinition { medication_id: "M70004", name: "Aspirin", drug_class: "Antiplatelet" },
    MedicationDefinition { medication_id: "M70005", name: "Warfarin", drug_class: "Anticoagulant" },
    MedicationDefinition { medication_id: "M70006", name: "Insulin", drug_class: "Antidiabetic" },
    MedicationDefinition { medication_id: "M70007", name: "Furosemide", drug_class: "Diuretic" },
    MedicationDefinition { medication_id: "M70008", name: "Albuterol", drug_class: "Bronchodilator" },
    MedicationDefinition { medication_id: "M70009", name: "Morphine", drug_class: "Analgesic" },
    MedicationDefinition { medication_id: "M70010", name: "Vancomycin", drug_class: "Antibiotic" },
];

/// A lab test with its reference range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabTestDefinition {
    pub name: &'static str,
    pub low: f64,
    pub high: f64,
    pub unit: &'static str,
    /// Reference range as printed on reports
    pub reference_range: &'static str,
}

/// Lab test catalog
#[rustfmt::skip]
pub const LAB_TESTS: [LabTestDefinition; 10] = [
    LabTestDefinition { name: "Hemoglobin", low: 13.5, high: 17.5, unit: "g/dL", reference_range: "13.5-17.5" },
    LabTestDefinition { name: "White Blood Cell Count", low: 4.5, high: 11.0, unit: "10^9/L", reference_range: "4.5-11.0" },
    LabTestDefinition { name: "Glucose", low: 70.0, high: 100.0, unit: "mg/dL", reference_range: "70-100" },
    LabTestDefinition { name: "Creatinine", low: 0.7, high: 1.3, unit: "mg/dL", reference_range: "0.7-1.3" },
    LabTestDefinition { name: "Sodium", low: 135.0, high: 145.0, unit: "mmol/L", reference_range: "135-145" },
    LabTestDefinition { name: "Potassium", low: 3.5, high: 5.0, unit: "mmol/L", reference_range: "3.5-5.0" },
    LabTestDefinition { name: "BNP", low: 0.0, high: 100.0, unit: "pg/mL", reference_range: "0-100" },
    LabTestDefinition { name: "Troponin", low: 0.0, high: 0.04, unit: "ng/mL", reference_range: "0-0.04" },
    LabTestDefinition { name: "HbA1c", low: 4.0, high: 5.6, unit: "%", reference_range: "4.0-5.6" },
    LabTestDefinition { name: "D-Dimer", low: 0.0, high: 500.0, unit: "ng/mL", reference_range: "0-500" },
];
