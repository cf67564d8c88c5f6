//! Per-patient admission history
//!
//! The history is the only mutable state of an admission run. It is owned by
//! the caller and threaded through every emission; it only ever grows.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// An admission already emitted for a patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorDischarge {
    pub admission_id: String,
    pub discharge_date: NaiveDate,
}

/// Emitted admissions grouped by patient, in emission order
#[derive(Debug, Clone, Default)]
pub struct AdmissionHistory {
    by_patient: FxHashMap<String, SmallVec<[PriorDischarge; 4]>>,
    recorded: usize,
}

impl AdmissionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an admission to the patient's history
    pub fn record(&mut self, patient_id: &str, admission_id: &str, discharge_date: NaiveDate) {
        self.by_patient
            .entry(patient_id.to_string())
            .or_default()
            .push(PriorDischarge {
                admission_id: admission_id.to_string(),
                discharge_date,
            });
        self.recorded += 1;
    }

    /// All admissions recorded for a patient, in emission order
    #[must_use]
    pub fn discharges(&self, patient_id: &str) -> &[PriorDischarge] {
        self.by_patient
            .get(patient_id)
            .map(|entries| entries.as_slice())
            .unwrap_or_default()
    }

    /// The most recent discharge strictly before `date`
    ///
    /// Admissions discharged on or after `date` are ignored, so an admission
    /// never links to a stay that had not ended yet. On equal discharge dates
    /// the earlier-emitted admission wins.
    #[must_use]
    pub fn latest_discharge_before(&self, patient_id: &str, date: NaiveDate) -> Option<&PriorDischarge> {
        self.discharges(patient_id)
            .iter()
            .filter(|prior| prior.discharge_date < date)
            .reduce(|best, prior| {
                if prior.discharge_date > best.discharge_date {
                    prior
                } else {
                    best
                }
            })
    }

    /// Total number of recorded admissions
    #[must_use]
    pub const fn len(&self) -> usize {
        self.recorded
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    /// Number of patients with at least one admission
    #[must_use]
    pub fn patient_count(&self) -> usize {
        self.by_patient.len()
    }
}
