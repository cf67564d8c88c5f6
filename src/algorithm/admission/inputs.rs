//! Validated inputs of the admission simulation

use rand_distr::Normal;
use rustc_hash::FxHashMap;

use crate::error::{Result, SynthError};
use crate::models::{Department, Hospital, MedicalCondition, Patient};

/// Read-only collections an admission run samples from
///
/// Construction checks every precondition up front so that emission can
/// only fail on a programming error.
#[derive(Debug, Clone)]
pub struct SimulationInputs<'a> {
    patients: &'a [Patient],
    hospitals: &'a [Hospital],
    departments_by_hospital: FxHashMap<&'a str, Vec<&'a Department>>,
    conditions: &'a [MedicalCondition],
    length_of_stay: Vec<Normal<f64>>,
}

impl<'a> SimulationInputs<'a> {
    /// Index and validate the simulation inputs
    ///
    /// # Errors
    /// Fails when any collection is empty, when a department refers to an
    /// unknown hospital, when a hospital has no departments, or when a
    /// condition has an invalid risk or length-of-stay distribution.
    pub fn new(
        patients: &'a [Patient],
        hospitals: &'a [Hospital],
        departments: &'a [Department],
        conditions: &'a [MedicalCondition],
    ) -> Result<Self> {
        if patients.is_empty() {
            return Err(SynthError::precondition("patient list is empty"));
        }
        if hospitals.is_empty() {
            return Err(SynthError::precondition("hospital list is empty"));
        }
        if departments.is_empty() {
            return Err(SynthError::precondition("department list is empty"));
        }
        if conditions.is_empty() {
            return Err(SynthError::precondition("condition table is empty"));
        }

        let mut departments_by_hospital: FxHashMap<&str, Vec<&Department>> = hospitals
            .iter()
            .map(|hospital| (hospital.hospital_id.as_str(), Vec::new()))
            .collect();

        for department in departments {
            match departments_by_hospital.get_mut(department.hospital_id.as_str()) {
                Some(owned) => owned.push(department),
                None => {
                    return Err(SynthError::precondition(format!(
                        "department {} belongs to unknown hospital {}",
                        department.department_id, department.hospital_id
                    )));
                }
            }
        }

        if let Some(hospital) = hospitals
            .iter()
            .find(|h| departments_by_hospital[h.hospital_id.as_str()].is_empty())
        {
            return Err(SynthError::empty_selection(format!(
                "hospital {} has no departments",
                hospital.hospital_id
            )));
        }

        let length_of_stay = conditions
            .iter()
            .map(|condition| {
                if !(0.0..=1.0).contains(&condition.risk) {
                    return Err(SynthError::Distribution(format!(
                        "condition {} has risk {} outside [0, 1]",
                        condition.condition_id, condition.risk
                    )));
                }
                // Normal::new only rejects a non-finite std-dev
                if !condition.los_mean.is_finite() || condition.los_std.is_nan() || condition.los_std < 0.0 {
                    return Err(SynthError::Distribution(format!(
                        "condition {} has length of stay mean {} and std-dev {}",
                        condition.condition_id, condition.los_mean, condition.los_std
                    )));
                }
                Normal::new(condition.los_mean, condition.los_std).map_err(|e| {
                    SynthError::Distribution(format!(
                        "condition {} has invalid length of stay parameters: {e}",
                        condition.condition_id
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patients,
            hospitals,
            departments_by_hospital,
            conditions,
            length_of_stay,
        })
    }

    #[must_use]
    pub const fn patients(&self) -> &'a [Patient] {
        self.patients
    }

    #[must_use]
    pub const fn hospitals(&self) -> &'a [Hospital] {
        self.hospitals
    }

    #[must_use]
    pub const fn conditions(&self) -> &'a [MedicalCondition] {
        self.conditions
    }

    /// Departments owned by a hospital; empty for unknown hospitals
    #[must_use]
    pub fn departments_of(&self, hospital_id: &str) -> &[&'a Department] {
        self.departments_by_hospital
            .get(hospital_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Length-of-stay distribution of the condition at `index`
    #[must_use]
    pub fn length_of_stay(&self, index: usize) -> Option<&Normal<f64>> {
        self.length_of_stay.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reference_conditions;
    use crate::utils::test::fixtures::{department, hospital, patient};

    #[test]
    fn test_departments_indexed_by_hospital() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001"), hospital("H40002")];
        let departments = vec![
            department("D50001", "H40001"),
            department("D50002", "H40002"),
            department("D50003", "H40001"),
        ];
        let conditions = reference_conditions();
        let inputs = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap();

        let ids: Vec<&str> = inputs
            .departments_of("H40001")
            .iter()
            .map(|d| d.department_id.as_str())
            .collect();
        assert_eq!(ids, ["D50001", "D50003"]);
        assert!(inputs.departments_of("H49999").is_empty());
    }

    #[test]
    fn test_hospital_without_departments_fails_fast() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001"), hospital("H40002")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = reference_conditions();
        let err = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap_err();
        assert!(matches!(err, SynthError::EmptySelection(ref msg) if msg.contains("H40002")));
    }

    #[test]
    fn test_empty_and_dangling_inputs_rejected() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = reference_conditions();

        assert!(SimulationInputs::new(&[], &hospitals, &departments, &conditions).is_err());
        assert!(SimulationInputs::new(&patients, &[], &departments, &conditions).is_err());
        assert!(SimulationInputs::new(&patients, &hospitals, &departments, &[]).is_err());

        let dangling = vec![department("D50001", "H40001"), department("D50002", "H40009")];
        let err = SimulationInputs::new(&patients, &hospitals, &dangling, &conditions).unwrap_err();
        assert!(matches!(err, SynthError::Precondition(_)));
    }

    #[test]
    fn test_invalid_condition_parameters_rejected() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001")];
        let departments = vec![department("D50001", "H40001")];
        for (mean, std) in [(4.0, -1.0), (f64::NAN, 1.0), (f64::INFINITY, 1.0), (4.0, f64::NAN)] {
            let conditions = vec![MedicalCondition::new("C1", "Broken", 0.2, mean, std)];
            assert!(
                matches!(
                    SimulationInputs::new(&patients, &hospitals, &departments, &conditions),
                    Err(SynthError::Distribution(_))
                ),
                "mean {mean} std {std}"
            );
        }
        let zero_spread = vec![MedicalCondition::new("C1", "Fixed", 0.2, 4.0, 0.0)];
        assert!(SimulationInputs::new(&patients, &hospitals, &departments, &zero_spread).is_ok());
    }
}
