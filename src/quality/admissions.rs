//! Admission-level checks

use rustc_hash::FxHashSet;

use crate::algorithm::admission::{AdmissionHistory, assess_readmission};
use crate::config::AdmissionConfig;
use crate::models::{Admission, DischargeDisposition};
use crate::quality::{Check, QualityIssue, QualityReport};

const TABLE: &str = "admissions";

/// Check admissions given in emission order
///
/// Readmission flags are verified by replaying the history: each admission
/// is classified against the admissions before it in `admissions`.
#[must_use]
pub fn check_admissions(admissions: &[Admission], config: &AdmissionConfig) -> QualityReport {
    let mut issues = Vec::new();
    let mut seen_ids = FxHashSet::default();
    let mut history = AdmissionHistory::new();

    for admission in admissions {
        let id = admission.admission_id.as_str();
        let mut issue = |check, detail: String| issues.push(QualityIssue::new(check, TABLE, id, detail));

        if !seen_ids.insert(id) {
            issue(Check::DuplicateId, "admission id appears more than once".to_string());
        }

        if admission.discharge_date < admission.admission_date {
            issue(
                Check::DischargeBeforeAdmission,
                format!("discharged {} before admission {}", admission.discharge_date, admission.admission_date),
            );
        }

        if admission.length_of_stay_days < 1 {
            issue(Check::LengthOfStay, "length of stay is below 1 day".to_string());
        }
        if admission.stay_days() != i64::from(admission.length_of_stay_days) {
            issue(
                Check::LengthOfStay,
                format!(
                    "length of stay {} does not match {} days between admission and discharge",
                    admission.length_of_stay_days,
                    admission.stay_days()
                ),
            );
        }

        if admission.mortality_flag {
            if admission.discharge_disposition != DischargeDisposition::Expired {
                issue(
                    Check::Mortality,
                    format!("mortality with disposition {}", admission.discharge_disposition),
                );
            }
            if admission.length_of_stay_days > config.mortality_max_days {
                issue(
                    Check::Mortality,
                    format!("mortality after {} days", admission.length_of_stay_days),
                );
            }
        } else if admission.discharge_disposition == DischargeDisposition::Expired {
            issue(Check::Mortality, "expired without mortality flag".to_string());
        }

        if admission.icu_days > admission.length_of_stay_days {
            issue(
                Check::IcuDays,
                format!("{} ICU days in a {} day stay", admission.icu_days, admission.length_of_stay_days),
            );
        }
        if !admission.icu_stay_flag && admission.icu_days > 0 {
            issue(Check::IcuDays, format!("{} ICU days without ICU stay", admission.icu_days));
        }

        let expected = assess_readmission(
            &history,
            &admission.patient_id,
            admission.admission_date,
            config,
        );
        if expected.readmission != admission.readmission_flag
            || expected.within_short_window != admission.readmission_within_30days
            || expected.previous_admission_id != admission.previous_admission_id
        {
            issue(
                Check::Readmission,
                format!(
                    "flags ({}, {}, {:?}) expected ({}, {}, {:?})",
                    admission.readmission_flag,
                    admission.readmission_within_30days,
                    admission.previous_admission_id,
                    expected.readmission,
                    expected.within_short_window,
                    expected.previous_admission_id
                ),
            );
        }

        history.record(&admission.patient_id, id, admission.discharge_date);
    }

    QualityReport {
        records_checked: admissions.len(),
        issues,
    }
}
