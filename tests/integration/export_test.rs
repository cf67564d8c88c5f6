#[cfg(test)]
mod tests {
    use std::fs;

    use synthcare::analytics::HospitalKpi;
    use synthcare::export::{self, ADMISSIONS, HOSPITAL_KPIS, SUMMARY_FILE, table_path};
    use synthcare::models::{Admission, Patient};
    use synthcare::utils::test::fixtures::small_config;
    use synthcare::{
        DatasetSummary, ExportConfig, ExportFormat, generate_dataset, load_dataset, read_table, write_dataset,
    };

    use crate::utils::small_dataset;

    fn quiet_config(dir: &std::path::Path, formats: Vec<ExportFormat>) -> ExportConfig {
        ExportConfig {
            show_progress: false,
            threads: 2,
            batch_size: 128,
            ..ExportConfig::new(dir).with_formats(formats)
        }
    }

    #[test]
    fn test_parquet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let (_, dataset) = small_dataset(41);
        let config = quiet_config(dir.path(), vec![ExportFormat::Parquet]);

        let written = write_dataset(&dataset, &config).unwrap();
        // 9 base tables + 3 analytics tables + summary
        assert_eq!(written.len(), 13);

        let admissions: Vec<Admission> =
            read_table(&table_path(dir.path(), ADMISSIONS, ExportFormat::Parquet)).unwrap();
        assert_eq!(admissions, dataset.admissions);

        let loaded = load_dataset(dir.path()).unwrap();
        assert_eq!(loaded, dataset);

        let kpis: Vec<HospitalKpi> =
            read_table(&table_path(dir.path(), HOSPITAL_KPIS, ExportFormat::Parquet)).unwrap();
        assert_eq!(kpis.len(), dataset.hospitals.len());

        let summary: DatasetSummary =
            serde_json::from_str(&fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap()).unwrap();
        assert_eq!(summary, dataset.summary());
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let (_, dataset) = small_dataset(42);
        let mut config = quiet_config(dir.path(), vec![ExportFormat::Csv]);
        config.include_analytics = false;

        write_dataset(&dataset, &config).unwrap();
        let text = fs::read_to_string(table_path(dir.path(), "patients", ExportFormat::Csv)).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("patient_id,first_name,last_name,date_of_birth,gender"));
        assert_eq!(lines.count(), dataset.patients.len());
        assert!(text.contains(&dataset.patients[0].patient_id));
        assert!(!dir.path().join("hospital_kpis.csv").exists());
    }

    #[test]
    fn test_sql_script_creates_and_inserts() {
        let dir = tempfile::tempdir().unwrap();
        let (_, dataset) = small_dataset(43);
        let config = quiet_config(dir.path(), vec![ExportFormat::Sql, ExportFormat::Parquet]);

        write_dataset(&dataset, &config).unwrap();
        let script = fs::read_to_string(table_path(dir.path(), ADMISSIONS, ExportFormat::Sql)).unwrap();
        assert!(script.starts_with("CREATE TABLE admissions ("));
        assert!(script.contains("admission_id VARCHAR(255) PRIMARY KEY"));
        assert!(script.contains("admission_date DATE NOT NULL"));
        assert!(script.contains("discharge_date DATE NOT NULL"));
        assert_eq!(
            script.lines().filter(|l| l.starts_with("INSERT INTO admissions")).count(),
            dataset.admissions.len()
        );
        assert!(script.contains("'A20001'"));
        assert!(table_path(dir.path(), ADMISSIONS, ExportFormat::Parquet).is_file());
    }

    #[test]
    fn test_empty_tables_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let (_, mut dataset) = small_dataset(44);
        dataset.lab_results.clear();
        let config = quiet_config(dir.path(), vec![ExportFormat::Parquet]);

        let written = write_dataset(&dataset, &config).unwrap();
        assert_eq!(written.len(), 12);
        assert!(!table_path(dir.path(), "lab_results", ExportFormat::Parquet).exists());

        let loaded = load_dataset(dir.path()).unwrap();
        assert!(loaded.lab_results.is_empty());
        assert_eq!(loaded.admissions.len(), dataset.admissions.len());
    }

    #[test]
    fn test_patients_survive_batching() {
        let dir = tempfile::tempdir().unwrap();
        let (_, dataset) = small_dataset(45);
        let tables = vec![export::TableData::from_rows("patients", &dataset.patients, 7).unwrap()];
        assert_eq!(tables[0].batches.len(), dataset.patients.len().div_ceil(7));

        let config = quiet_config(dir.path(), vec![ExportFormat::Parquet]);
        export::write_tables(&tables, &config).unwrap();
        let patients: Vec<Patient> =
            read_table(&table_path(dir.path(), "patients", ExportFormat::Parquet)).unwrap();
        assert_eq!(patients, dataset.patients);
    }

    #[test]
    fn test_missing_input_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dataset(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_few_hospitals_export_and_reload() {
        for hospitals in 2..=5 {
            let dir = tempfile::tempdir().unwrap();
            let mut config = small_config(60 + hospitals as u64);
            config.hospital_count = hospitals;
            let dataset = generate_dataset(&config).unwrap();
            let export = quiet_config(dir.path(), vec![ExportFormat::Parquet, ExportFormat::Csv]);

            write_dataset(&dataset, &export).unwrap();
            let loaded = load_dataset(dir.path()).unwrap();
            assert_eq!(loaded.hospitals, dataset.hospitals, "{hospitals} hospitals");
            assert_eq!(loaded, dataset);
        }
    }

    #[test]
    fn test_text_only_export_cannot_be_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let (_, dataset) = small_dataset(46);
        let config = quiet_config(dir.path(), vec![ExportFormat::Csv]);

        write_dataset(&dataset, &config).unwrap();
        let err = load_dataset(dir.path()).unwrap_err();
        assert!(err.to_string().contains("patients"), "{err}");
    }

    #[test]
    fn test_missing_admissions_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (_, dataset) = small_dataset(47);
        let config = quiet_config(dir.path(), vec![ExportFormat::Parquet]);

        write_dataset(&dataset, &config).unwrap();
        fs::remove_file(table_path(dir.path(), ADMISSIONS, ExportFormat::Parquet)).unwrap();
        let err = load_dataset(dir.path()).unwrap_err();
        assert!(err.to_string().contains("admissions"), "{err}");
    }
}
