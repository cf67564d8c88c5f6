//! Readmission classification
//!
//! An admission is a readmission when the same patient was discharged within
//! the readmission window before it. Only the most recent earlier discharge is
//! considered.

use chrono::NaiveDate;

use crate::algorithm::admission::history::AdmissionHistory;
use crate::config::AdmissionConfig;

/// Readmission flags for a new admission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadmissionAssessment {
    /// Gap is within the readmission window (90 days by default)
    pub readmission: bool,
    /// Gap is within the short window (30 days by default)
    pub within_short_window: bool,
    /// The prior admission the flags refer to; `None` when no flag is set
    pub previous_admission_id: Option<String>,
    /// Days since the most recent earlier discharge, if there was one
    pub gap_days: Option<i64>,
}

/// Classify an admission on `admission_date` against the patient's history
#[must_use]
pub fn assess_readmission(
    history: &AdmissionHistory,
    patient_id: &str,
    admission_date: NaiveDate,
    config: &AdmissionConfig,
) -> ReadmissionAssessment {
    let Some(prior) = history.latest_discharge_before(patient_id, admission_date) else {
        return ReadmissionAssessment::default();
    };

    let gap = (admission_date - prior.discharge_date).num_days();
    if gap <= config.readmission_days {
        ReadmissionAssessment {
            readmission: true,
            within_short_window: gap <= config.short_readmission_days,
            previous_admission_id: Some(prior.admission_id.clone()),
            gap_days: Some(gap),
        }
    } else {
        ReadmissionAssessment {
            gap_days: Some(gap),
            ..ReadmissionAssessment::default()
        }
    }
}
