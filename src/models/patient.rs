//! Patient entity model
//!
//! Patients are generated once per run and are read-only inputs to the
//! admission simulation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::types::{BloodType, Gender, InsuranceProvider};

/// Number of days per year used for age calculations
pub const DAYS_PER_YEAR: i64 = 365;

/// A synthetic patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Stable identifier (`P10001`, `P10002`, ...)
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_type: BloodType,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub insurance_provider: InsuranceProvider,
    /// Policy number in `###-??-####` form
    pub insurance_policy_number: String,
}

impl Patient {
    /// Age in whole years on `date`, counting 365 days per year
    ///
    /// Leap days are ignored, so the result can be one year ahead of the
    /// calendar age for a few days around a birthday.
    #[must_use]
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        age_in_years(self.date_of_birth, date)
    }
}

/// Whole years between `date_of_birth` and `date` using 365-day years
#[must_use]
pub fn age_in_years(date_of_birth: NaiveDate, date: NaiveDate) -> i32 {
    let days = (date - date_of_birth).num_days();
    i32::try_from(days.div_euclid(DAYS_PER_YEAR)).unwrap_or(i32::MAX)
}
