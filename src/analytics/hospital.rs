//! Per-hospital performance indicators

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::analytics::{mean, percentage};
use crate::models::{Admission, Billing, Hospital};

/// Indicators for one hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalKpi {
    pub hospital_id: String,
    pub hospital_name: String,
    pub city: String,
    pub state: String,
    pub total_beds: u32,
    pub total_admissions: u64,
    pub unique_patients: u64,
    pub avg_length_of_stay: Option<f64>,
    /// Percent of admissions flagged as 30-day readmissions
    pub readmission_rate_30day: Option<f64>,
    pub avg_charges_per_admission: Option<f64>,
}

/// Indicators for every hospital, including those without admissions
///
/// Rows follow the order of `hospitals`.
pub fn hospital_kpis(hospitals: &[Hospital], admissions: &[Admission], billing: &[Billing]) -> Vec<HospitalKpi> {
    let charges: FxHashMap<&str, f64> = billing
        .iter()
        .map(|bill| (bill.admission_id.as_str(), bill.total_charges))
        .collect();

    let mut by_hospital: FxHashMap<&str, Vec<&Admission>> = FxHashMap::default();
    for admission in admissions {
        by_hospital
            .entry(admission.hospital_id.as_str())
            .or_default()
            .push(admission);
    }

    hospitals
        .iter()
        .map(|hospital| {
            let stays = by_hospital
                .get(hospital.hospital_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let unique_patients: FxHashSet<&str> = stays.iter().map(|a| a.patient_id.as_str()).collect();
            let readmissions = stays.iter().filter(|a| a.readmission_within_30days).count();

            HospitalKpi {
                hospital_id: hospital.hospital_id.clone(),
                hospital_name: hospital.hospital_name.clone(),
                city: hospital.city.clone(),
                state: hospital.state.clone(),
                total_beds: hospital.total_beds,
                total_admissions: stays.len() as u64,
                unique_patients: unique_patients.len() as u64,
                avg_length_of_stay: mean(stays.iter().map(|a| f64::from(a.length_of_stay_days))),
                readmission_rate_30day: percentage(readmissions, stays.len()),
                avg_charges_per_admission: mean(
                    stays
                        .iter()
                        .filter_map(|a| charges.get(a.admission_id.as_str()).copied()),
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::fixtures::{admission, bill, hospital};
    use chrono::NaiveDate;

    #[test]
    fn test_hospital_without_admissions_is_reported() {
        let day = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let hospitals = vec![hospital("H40001"), hospital("H40002")];
        let mut second = admission("A20002", "P10001", day, 4);
        second.readmission_within_30days = true;
        second.readmission_flag = true;
        let admissions = vec![admission("A20001", "P10001", day, 2), second];
        let billing = vec![bill("B90001", &admissions[0], 10000.0), bill("B90002", &admissions[1], 20000.0)];

        let kpis = hospital_kpis(&hospitals, &admissions, &billing);
        assert_eq!(kpis.len(), 2);

        assert_eq!(kpis[0].total_admissions, 2);
        assert_eq!(kpis[0].unique_patients, 1);
        assert_eq!(kpis[0].avg_length_of_stay, Some(3.0));
        assert_eq!(kpis[0].readmission_rate_30day, Some(50.0));
        assert_eq!(kpis[0].avg_charges_per_admission, Some(15000.0));

        assert_eq!(kpis[1].total_admissions, 0);
        assert_eq!(kpis[1].readmission_rate_30day, None);
        assert_eq!(kpis[1].avg_charges_per_admission, None);
    }
}
