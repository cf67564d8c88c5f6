#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use synthcare::models::{AbnormalFlag, DischargeDisposition, PaymentStatus};
    use synthcare::{GeneratorConfig, SynthError, generate_dataset};

    use crate::utils::{admissions_by_id, small_dataset};

    #[test]
    fn test_identical_seeds_give_identical_datasets() {
        let (_, first) = small_dataset(99);
        let (_, second) = small_dataset(99);
        assert_eq!(first, second);
        assert_eq!(first.summary(), second.summary());
    }

    #[test]
    fn test_identifiers_follow_sequences() {
        let (_, dataset) = small_dataset(5);
        assert_eq!(dataset.patients[0].patient_id, "P10001");
        assert_eq!(dataset.hospitals[0].hospital_id, "H40001");
        assert_eq!(dataset.departments[0].department_id, "D50001");
        assert_eq!(dataset.admissions[0].admission_id, "A20001");
        assert_eq!(dataset.admissions[399].admission_id, "A20400");
        assert_eq!(dataset.billing[0].billing_id, "B90001");
        if let Some(first) = dataset.lab_results.first() {
            assert_eq!(first.lab_result_id, "L100001");
        }
    }

    #[test]
    fn test_clinical_records_fall_inside_their_stay() {
        let (_, dataset) = small_dataset(6);
        let by_id = admissions_by_id(&dataset.admissions);

        for procedure in &dataset.procedures {
            let admission = by_id[procedure.admission_id.as_str()];
            assert!(procedure.procedure_date >= admission.admission_date);
            assert!(procedure.procedure_date <= admission.discharge_date);
            assert!(procedure.duration_minutes >= 1);
        }
        for medication in &dataset.medications {
            let admission = by_id[medication.admission_id.as_str()];
            assert!(medication.start_date.date() >= admission.admission_date);
            assert!(medication.end_date >= medication.start_date);
        }
        for lab in &dataset.lab_results {
            let admission = by_id[lab.admission_id.as_str()];
            assert!(lab.test_date.date() >= admission.admission_date);
            assert_eq!(lab.interpretation.is_some(), lab.abnormal_flag != AbnormalFlag::Normal);
        }
    }

    #[test]
    fn test_expired_patients_are_flagged() {
        let (_, dataset) = small_dataset(7);
        for admission in &dataset.admissions {
            assert_eq!(
                admission.mortality_flag,
                admission.discharge_disposition == DischargeDisposition::Expired
            );
        }
    }

    #[test]
    fn test_departments_have_distinct_kinds() {
        let (_, dataset) = small_dataset(8);
        for hospital in &dataset.hospitals {
            let kinds: Vec<_> = dataset
                .departments
                .iter()
                .filter(|d| d.hospital_id == hospital.hospital_id)
                .map(|d| d.department_name)
                .collect();
            let unique: HashSet<_> = kinds.iter().collect();
            assert!((5..=10).contains(&kinds.len()));
            assert_eq!(unique.len(), kinds.len());
        }
    }

    #[test]
    fn test_paid_bills_have_payment_dates() {
        let (_, dataset) = small_dataset(9);
        assert!(dataset.billing.iter().any(|b| b.payment_status == PaymentStatus::Paid));
        for bill in &dataset.billing {
            assert_eq!(bill.payment_date.is_some(), bill.payment_status == PaymentStatus::Paid);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GeneratorConfig::builder()
            .hospitals(0)
            .show_progress(false)
            .build();
        assert!(matches!(generate_dataset(&config), Err(SynthError::Config(_))));
    }
}
