//! Billing entity model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::types::PaymentStatus;

/// The bill for one admission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    /// Identifier (`B90001`, ...)
    pub billing_id: String,
    pub admission_id: String,
    pub total_charges: f64,
    pub insurance_covered: f64,
    pub patient_responsibility: f64,
    pub payment_status: PaymentStatus,
    /// Discharge date of the admission
    pub billing_date: NaiveDate,
    /// Set only when the bill is paid
    pub payment_date: Option<NaiveDate>,
}

impl Billing {
    /// Whether covered plus patient share adds up to the total, to the cent
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.insurance_covered + self.patient_responsibility - self.total_charges).abs() < 0.011
    }
}

/// Round a currency amount to cents
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
