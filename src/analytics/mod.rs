//! In-memory analytics over generated or reloaded tables
//!
//! Every function takes plain slices so it works the same on a freshly
//! generated [`Dataset`](crate::algorithm::Dataset) and on tables read
//! back from Parquet.

pub mod diagnosis;
pub mod hospital;
pub mod revenue;
pub mod summary;

pub use diagnosis::{DiagnosisReadmission, MIN_DIAGNOSIS_ADMISSIONS, readmission_by_diagnosis};
pub use hospital::{HospitalKpi, hospital_kpis};
pub use revenue::{MonthlyRevenue, monthly_revenue};
pub use summary::DatasetSummary;

/// Round to two decimals
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole` as a percentage with two decimals, `None` for an empty whole
#[must_use]
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| round2(part as f64 * 100.0 / whole as f64))
}

/// Mean rounded to two decimals, `None` for no values
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| round2(sum / count as f64))
}
