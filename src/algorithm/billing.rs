//! Billing generation
//!
//! One bill per admission. Charges are a daily rate for the whole stay, an
//! ICU surcharge per ICU day and a flat procedure charge.

use rand::Rng;

use crate::algorithm::sampling::{self, IdSequence};
use crate::error::Result;
use crate::models::billing::round_cents;
use crate::models::{Admission, Billing, PaymentStatus};

/// Charge per day of stay
pub const DAILY_RATE: f64 = 2500.0;
/// Extra charge per ICU day
pub const ICU_DAILY_RATE: f64 = 5000.0;

/// Generate the bill for every admission
pub fn generate_billing<R: Rng>(admissions: &[Admission], rng: &mut R) -> Result<Vec<Billing>> {
    let mut ids = IdSequence::billing();
    let mut bills = Vec::with_capacity(admissions.len());

    for admission in admissions {
        let mut total_charges = DAILY_RATE * f64::from(admission.length_of_stay_days);
        if admission.icu_stay_flag {
            total_charges += ICU_DAILY_RATE * f64::from(admission.icu_days);
        }
        total_charges += f64::from(rng.random_range(5000..=25000u32));

        let coverage_rate = rng.random_range(0.7..0.9);
        let total_charges = round_cents(total_charges);
        let insurance_covered = round_cents(total_charges * coverage_rate);
        // Derived from the rounded amounts so the parts add up to the total
        let patient_responsibility = round_cents(total_charges - insurance_covered);

        let payment_status = sampling::choose_weighted(PaymentStatus::ALL, &PaymentStatus::WEIGHTS, rng)?;
        let payment_date = if payment_status == PaymentStatus::Paid {
            Some(sampling::add_days(admission.discharge_date, rng.random_range(1..=90))?)
        } else {
            None
        };

        bills.push(Billing {
            billing_id: ids.next_id(),
            admission_id: admission.admission_id.clone(),
            total_charges,
            insurance_covered,
            patient_responsibility,
            payment_status,
            billing_date: admission.discharge_date,
            payment_date,
        });
    }

    Ok(bills)
}
