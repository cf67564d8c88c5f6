//! Medication generation

use chrono::NaiveTime;
use rand::Rng;

use crate::algorithm::clinical::RecordCount;
use crate::algorithm::sampling::{self, IdSequence};
use crate::error::Result;
use crate::models::condition::MEDICATIONS;
use crate::models::{Admission, Medication, MedicationFrequency};

/// Generate medications for every admission, `mean` per admission on average
///
/// A medication starts within the first day of the stay and ends up to
/// twelve hours before discharge, but never before it started.
pub fn generate_medications<R: Rng>(admissions: &[Admission], mean: f64, rng: &mut R) -> Result<Vec<Medication>> {
    let counts = RecordCount::with_mean(mean)?;
    let mut ids = IdSequence::medications();
    let mut medications = Vec::new();

    for admission in admissions {
        let admitted = admission.admission_date.and_time(NaiveTime::MIN);
        let discharged = admission.discharge_date.and_time(NaiveTime::MIN);

        for _ in 0..counts.sample(rng) {
            let definition = sampling::choose(&MEDICATIONS, rng, "medications")?;
            let start_date = sampling::add_hours(admitted, rng.random_range(0..=24i64))?;
            let end_date = sampling::add_hours(discharged, -rng.random_range(0..=12i64))?.max(start_date);

            medications.push(Medication {
                patient_medication_id: ids.next_id(),
                admission_id: admission.admission_id.clone(),
                medication_id: definition.medication_id.to_string(),
                start_date,
                end_date,
                dosage: format!("{} mg", rng.random_range(1..=100u32)),
                frequency: *sampling::choose(MedicationFrequency::ALL, rng, "frequencies")?,
                prescribing_physician: sampling::physician_name(rng),
            });
        }
    }

    Ok(medications)
}
