//! Monthly revenue

use chrono::Datelike;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::analytics::round2;
use crate::models::{Admission, Billing};

/// Billed revenue for admissions starting in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`
    pub year_month: String,
    pub year: i32,
    pub month: u32,
    pub total_admissions: u64,
    pub total_revenue: f64,
    pub avg_revenue_per_admission: f64,
}

/// Revenue per admission month, newest month first
///
/// Admissions without a bill are not counted.
pub fn monthly_revenue(admissions: &[Admission], billing: &[Billing]) -> Vec<MonthlyRevenue> {
    let charges: FxHashMap<&str, f64> = billing
        .iter()
        .map(|bill| (bill.admission_id.as_str(), bill.total_charges))
        .collect();

    admissions
        .iter()
        .filter_map(|a| {
            let total = charges.get(a.admission_id.as_str())?;
            Some(((a.admission_date.year(), a.admission_date.month()), *total))
        })
        .into_group_map()
        .into_iter()
        .sorted_by(|(a, _), (b, _)| b.cmp(a))
        .map(|((year, month), totals)| {
            let revenue: f64 = totals.iter().sum();
            MonthlyRevenue {
                year_month: format!("{year:04}-{month:02}"),
                year,
                month,
                total_admissions: totals.len() as u64,
                total_revenue: round2(revenue),
                avg_revenue_per_admission: round2(revenue / totals.len() as f64),
            }
        })
        .collect()
}
