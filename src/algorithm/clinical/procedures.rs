//! Procedure generation

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::Rng;

use crate::algorithm::clinical::RecordCount;
use crate::algorithm::sampling::{self, IdSequence};
use crate::error::Result;
use crate::models::condition::PROCEDURES;
use crate::models::{Admission, Procedure, ProcedureOutcome};

/// Probability that a procedure records a complication note
const COMPLICATION_NOTE_PROBABILITY: f64 = 0.1;

/// Generate procedures for every admission, `mean` per admission on average
pub fn generate_procedures<R: Rng>(admissions: &[Admission], mean: f64, rng: &mut R) -> Result<Vec<Procedure>> {
    let counts = RecordCount::with_mean(mean)?;
    let mut ids = IdSequence::procedures();
    let mut procedures = Vec::new();

    for admission in admissions {
        for _ in 0..counts.sample(rng) {
            let definition = sampling::choose(&PROCEDURES, rng, "procedures")?;
            let day = rng.random_range(0..=i64::from(admission.length_of_stay_days));
            let procedure_date = sampling::add_days(admission.admission_date, day)?;
            let duration = i64::from(definition.base_duration_minutes) + rng.random_range(-20..=20i64);
            let performing_physician = sampling::physician_name(rng);
            let outcome = sampling::choose_weighted(ProcedureOutcome::ALL, &ProcedureOutcome::WEIGHTS, rng)?;
            let complications = (rng.random::<f64>() < COMPLICATION_NOTE_PROBABILITY)
                .then(|| -> String { Sentence(4..10).fake_with_rng(rng) });

            procedures.push(Procedure {
                patient_procedure_id: ids.next_id(),
                admission_id: admission.admission_id.clone(),
                procedure_id: definition.procedure_id.to_string(),
                procedure_date,
                duration_minutes: u32::try_from(duration.max(1)).unwrap_or(1),
                performing_physician,
                outcome,
                complications,
            });
        }
    }

    Ok(procedures)
}
