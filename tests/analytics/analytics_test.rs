#[cfg(test)]
mod tests {
    use synthcare::analytics::{
        MIN_DIAGNOSIS_ADMISSIONS, hospital_kpis, monthly_revenue, readmission_by_diagnosis,
    };

    use crate::utils::small_dataset;

    #[test]
    fn test_hospital_kpis_cover_every_admission() {
        let (_, dataset) = small_dataset(31);
        let kpis = hospital_kpis(&dataset.hospitals, &dataset.admissions, &dataset.billing);

        assert_eq!(kpis.len(), dataset.hospitals.len());
        let total: u64 = kpis.iter().map(|k| k.total_admissions).sum();
        assert_eq!(total, dataset.admissions.len() as u64);
        for kpi in kpis.iter().filter(|k| k.total_admissions > 0) {
            let rate = kpi.readmission_rate_30day.unwrap();
            assert!((0.0..=100.0).contains(&rate));
            assert!(kpi.unique_patients <= kpi.total_admissions);
            assert!(kpi.avg_length_of_stay.unwrap() >= 1.0);
        }
    }

    #[test]
    fn test_diagnosis_rows_sorted_and_thresholded() {
        let (_, dataset) = small_dataset(32);
        let rows = readmission_by_diagnosis(&dataset.conditions, &dataset.admissions);

        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!(pair[0].readmission_rate >= pair[1].readmission_rate);
        }
        for row in &rows {
            assert!(row.total_admissions >= MIN_DIAGNOSIS_ADMISSIONS as u64);
            assert!(row.readmissions_30day <= row.total_admissions);
        }
    }

    #[test]
    fn test_monthly_revenue_matches_billing() {
        let (_, dataset) = small_dataset(33);
        let rows = monthly_revenue(&dataset.admissions, &dataset.billing);

        for pair in rows.windows(2) {
            assert!(pair[0].year_month > pair[1].year_month);
        }
        let admissions: u64 = rows.iter().map(|r| r.total_admissions).sum();
        assert_eq!(admissions, dataset.billing.len() as u64);

        let revenue: f64 = rows.iter().map(|r| r.total_revenue).sum();
        let billed: f64 = dataset.billing.iter().map(|b| b.total_charges).sum();
        assert!((revenue - billed).abs() < 1.0);
    }

    #[test]
    fn test_summary_counts() {
        let (_, dataset) = small_dataset(34);
        let summary = dataset.summary();
        assert_eq!(summary.admissions, 400);
        assert_eq!(summary.billing, 400);
        assert!(summary.readmissions_30day <= summary.readmissions);
        let expected = summary.readmissions_30day as f64 * 100.0 / 400.0;
        assert!((summary.readmission_rate_30day - expected).abs() < 0.01);
    }
}
