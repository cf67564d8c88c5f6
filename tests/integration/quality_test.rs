#[cfg(test)]
mod tests {
    use synthcare::quality::Check;
    use synthcare::{AdmissionConfig, ExportConfig, ExportFormat, check_admissions, check_dataset, load_dataset, write_dataset};

    use crate::utils::small_dataset;

    #[test]
    fn test_generated_dataset_passes_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let (config, dataset) = small_dataset(51);
        let export = ExportConfig {
            show_progress: false,
            ..ExportConfig::new(dir.path()).with_formats(vec![ExportFormat::Parquet])
        };
        write_dataset(&dataset, &export).unwrap();

        let loaded = load_dataset(dir.path()).unwrap();
        let report = check_dataset(&loaded, &config.admission);
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn test_tampered_readmission_is_detected() {
        let (_, mut dataset) = small_dataset(52);
        let target = dataset
            .admissions
            .iter()
            .position(|a| a.readmission_flag)
            .expect("some readmission in 400 admissions of 60 patients");
        dataset.admissions[target].readmission_flag = false;
        dataset.admissions[target].readmission_within_30days = false;
        dataset.admissions[target].previous_admission_id = None;

        let report = check_admissions(&dataset.admissions, &AdmissionConfig::default());
        let issues: Vec<_> = report.issues_for(Check::Readmission).collect();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].record_id, dataset.admissions[target].admission_id);
    }

    #[test]
    fn test_unbalanced_bill_is_detected() {
        let (config, mut dataset) = small_dataset(53);
        dataset.billing[0].patient_responsibility += 5.0;
        dataset.patients.retain(|p| p.patient_id != dataset.admissions[0].patient_id);

        let report = check_dataset(&dataset, &config.admission);
        assert_eq!(report.issues_for(Check::BillingBalance).count(), 1);
        assert!(report.issues_for(Check::MissingReference).count() >= 1);
        assert!(!report.is_clean());
    }
}
