#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use synthcare::algorithm::admission::{AdmissionSimulator, SimulationInputs};
    use synthcare::algorithm::population::{generate_departments, generate_hospitals};
    use synthcare::algorithm::sampling::{Stage, stage_rng};
    use synthcare::models::{
        Admission, Department, DischargeDisposition, Hospital, MedicalCondition, Patient,
        reference_conditions,
    };
    use synthcare::utils::test::fixtures::{department, hospital, patient};
    use synthcare::{AdmissionConfig, SynthError};

    use crate::utils::admissions_by_id;

    struct Population {
        patients: Vec<Patient>,
        hospitals: Vec<Hospital>,
        departments: Vec<Department>,
        conditions: Vec<MedicalCondition>,
    }

    fn population(seed: u64, patient_count: usize) -> Population {
        let hospitals = generate_hospitals(4, &mut stage_rng(seed, Stage::Hospitals)).unwrap();
        let departments = generate_departments(&hospitals, &mut stage_rng(seed, Stage::Departments)).unwrap();
        Population {
            patients: (0..patient_count).map(|i| patient(&format!("P{}", 10001 + i))).collect(),
            hospitals,
            departments,
            conditions: reference_conditions(),
        }
    }

    fn simulate(population: &Population, count: usize, seed: u64, config: AdmissionConfig) -> Vec<Admission> {
        let inputs = SimulationInputs::new(
            &population.patients,
            &population.hospitals,
            &population.departments,
            &population.conditions,
        )
        .unwrap();
        let mut simulator = AdmissionSimulator::new(inputs, config).unwrap();
        simulator
            .generate(count, &mut stage_rng(seed, Stage::Admissions), false)
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn admissions_respect_invariants(seed in any::<u64>(), patient_count in 1usize..40) {
            let population = population(seed, patient_count);
            let admissions = simulate(&population, 300, seed, AdmissionConfig::default());
            let by_id = admissions_by_id(&admissions);

            for (index, admission) in admissions.iter().enumerate() {
                prop_assert!(admission.discharge_date >= admission.admission_date);
                prop_assert!(admission.length_of_stay_days >= 1);
                prop_assert_eq!(admission.stay_days(), i64::from(admission.length_of_stay_days));
                prop_assert!(admission.icu_days <= admission.length_of_stay_days);
                if !admission.icu_stay_flag {
                    prop_assert_eq!(admission.icu_days, 0);
                }

                if admission.mortality_flag {
                    prop_assert_eq!(admission.discharge_disposition, DischargeDisposition::Expired);
                    prop_assert!(admission.length_of_stay_days <= 3);
                }

                if admission.readmission_within_30days {
                    prop_assert!(admission.readmission_flag);
                }

                // Most recent earlier discharge; ties go to the first emitted
                let earlier = &admissions[..index];
                let latest = earlier
                    .iter()
                    .filter(|prior| {
                        prior.patient_id == admission.patient_id
                            && prior.discharge_date < admission.admission_date
                    })
                    .reduce(|best, prior| if prior.discharge_date > best.discharge_date { prior } else { best });

                match latest {
                    Some(prior) if (admission.admission_date - prior.discharge_date).num_days() <= 90 => {
                        let gap = (admission.admission_date - prior.discharge_date).num_days();
                        prop_assert!(admission.readmission_flag);
                        prop_assert_eq!(admission.readmission_within_30days, gap <= 30);
                        prop_assert_eq!(
                            admission.previous_admission_id.as_deref(),
                            Some(prior.admission_id.as_str())
                        );
                    }
                    _ => {
                        prop_assert!(!admission.readmission_flag);
                        prop_assert!(!admission.readmission_within_30days);
                        prop_assert!(admission.previous_admission_id.is_none());
                    }
                }

                if let Some(previous_id) = admission.previous_admission_id.as_deref() {
                    let previous = by_id[previous_id];
                    prop_assert_eq!(&previous.patient_id, &admission.patient_id);
                    let gap = (admission.admission_date - previous.discharge_date).num_days();
                    prop_assert!((1..=90).contains(&gap));
                }
            }
        }

        #[test]
        fn same_seed_same_admissions(seed in any::<u64>()) {
            let population = population(seed, 25);
            let first = simulate(&population, 200, seed, AdmissionConfig::default());
            let second = simulate(&population, 200, seed, AdmissionConfig::default());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_admission_dates_stay_in_window() {
        let population = population(3, 10);
        let config = AdmissionConfig {
            window_start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            window_end: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
            ..AdmissionConfig::default()
        };
        for admission in simulate(&population, 100, 3, config) {
            assert!(admission.admission_date >= NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
            assert!(admission.admission_date <= NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
        }
    }

    #[test]
    fn test_dense_history_produces_readmissions() {
        // 3 patients sharing 300 admissions over two years
        let population = population(11, 3);
        let admissions = simulate(&population, 300, 11, AdmissionConfig::default());
        let short = admissions.iter().filter(|a| a.readmission_within_30days).count();
        assert!(short > 0);
        assert!(admissions.iter().all(|a| a.readmission_flag == a.previous_admission_id.is_some()));
    }

    #[test]
    fn test_empty_inputs_are_rejected() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = reference_conditions();

        let err = SimulationInputs::new(&[], &hospitals, &departments, &conditions).unwrap_err();
        assert!(matches!(err, SynthError::Precondition(_)));
        let err = SimulationInputs::new(&patients, &hospitals, &[], &conditions).unwrap_err();
        assert!(matches!(err, SynthError::Precondition(_)));
        let err = SimulationInputs::new(&patients, &hospitals, &departments, &[]).unwrap_err();
        assert!(matches!(err, SynthError::Precondition(_)));
    }

    #[test]
    fn test_hospital_without_departments_is_rejected() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001"), hospital("H40002")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = reference_conditions();

        let err = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap_err();
        assert!(matches!(err, SynthError::EmptySelection(_)));
    }
}
