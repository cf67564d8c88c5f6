//! Readmission rates by primary diagnosis

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::analytics::{mean, percentage};
use crate::models::{Admission, ConditionCategory, MedicalCondition};

/// Conditions with fewer admissions than this are left out
pub const MIN_DIAGNOSIS_ADMISSIONS: usize = 10;

/// Readmission figures for one primary condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReadmission {
    pub condition_id: String,
    pub condition_name: String,
    pub category: ConditionCategory,
    pub total_admissions: u64,
    pub readmissions_30day: u64,
    /// Percent of admissions flagged as 30-day readmissions
    pub readmission_rate: f64,
    pub avg_los: f64,
}

/// Readmission figures per primary condition, highest rate first
///
/// Only conditions with at least [`MIN_DIAGNOSIS_ADMISSIONS`] admissions are
/// reported. Equal rates keep the order of `conditions`.
pub fn readmission_by_diagnosis(
    conditions: &[MedicalCondition],
    admissions: &[Admission],
) -> Vec<DiagnosisReadmission> {
    let mut by_condition: FxHashMap<&str, Vec<&Admission>> = FxHashMap::default();
    for admission in admissions {
        by_condition
            .entry(admission.primary_diagnosis_id.as_str())
            .or_default()
            .push(admission);
    }

    conditions
        .iter()
        .filter_map(|condition| {
            let stays = by_condition.get(condition.condition_id.as_str())?;
            if stays.len() < MIN_DIAGNOSIS_ADMISSIONS {
                return None;
            }
            let readmissions = stays.iter().filter(|a| a.readmission_within_30days).count();
            Some(DiagnosisReadmission {
                condition_id: condition.condition_id.clone(),
                condition_name: condition.condition_name.clone(),
                category: condition.category,
                total_admissions: stays.len() as u64,
                readmissions_30day: readmissions as u64,
                readmission_rate: percentage(readmissions, stays.len()).unwrap_or_default(),
                avg_los: mean(stays.iter().map(|a| f64::from(a.length_of_stay_days))).unwrap_or_default(),
            })
        })
        .sorted_by(|a, b| b.readmission_rate.total_cmp(&a.readmission_rate))
        .collect()
}
