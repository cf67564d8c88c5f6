//! Lab result generation

use chrono::NaiveTime;
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::Rng;

use crate::algorithm::clinical::RecordCount;
use crate::algorithm::sampling::{self, IdSequence};
use crate::error::Result;
use crate::models::condition::{LAB_TESTS, LabTestDefinition};
use crate::models::{AbnormalFlag, Admission, LabResult};

/// Share of results inside the reference range
const NORMAL_RESULT_PROBABILITY: f64 = 0.8;

/// Draw a value for `test` and classify it against its reference range
///
/// Abnormal values fall below the range (down to half the lower bound) or
/// above it (up to one and a half times the upper bound) with equal odds.
pub fn sample_lab_value<R: Rng>(test: &LabTestDefinition, rng: &mut R) -> (f64, AbnormalFlag) {
    if rng.random::<f64>() < NORMAL_RESULT_PROBABILITY {
        (uniform(test.low, test.high, rng), AbnormalFlag::Normal)
    } else if rng.random_bool(0.5) {
        (uniform(test.low * 0.5, test.low, rng), AbnormalFlag::Low)
    } else {
        (uniform(test.high, test.high * 1.5, rng), AbnormalFlag::High)
    }
}

fn uniform<R: Rng>(low: f64, high: f64, rng: &mut R) -> f64 {
    // A zero lower bound makes the "low" range empty
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// Generate lab results for every admission, `mean` per admission on average
pub fn generate_lab_results<R: Rng>(admissions: &[Admission], mean: f64, rng: &mut R) -> Result<Vec<LabResult>> {
    let counts = RecordCount::with_mean(mean)?;
    let mut ids = IdSequence::lab_results();
    let mut results = Vec::new();

    for admission in admissions {
        let admitted = admission.admission_date.and_time(NaiveTime::MIN);
        let stay_hours = i64::from(admission.length_of_stay_days) * 24;

        for _ in 0..counts.sample(rng) {
            let test = sampling::choose(&LAB_TESTS, rng, "lab tests")?;
            let test_date = sampling::add_hours(admitted, rng.random_range(0..=stay_hours))?;
            let (value, abnormal_flag) = sample_lab_value(test, rng);
            let interpretation = (abnormal_flag != AbnormalFlag::Normal)
                .then(|| -> String { Sentence(4..10).fake_with_rng(rng) });

            results.push(LabResult {
                lab_result_id: ids.next_id(),
                admission_id: admission.admission_id.clone(),
                test_name: test.name.to_string(),
                test_date,
                result_value: format!("{value:.2}"),
                result_unit: test.unit.to_string(),
                reference_range: test.reference_range.to_string(),
                abnormal_flag,
                interpretation,
            });
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::sampling::{Stage, stage_rng};

    #[test]
    fn test_lab_values_match_flags() {
        let mut rng = stage_rng(4, Stage::LabResults);
        for test in &LAB_TESTS {
            for _ in 0..200 {
                let (value, flag) = sample_lab_value(test, &mut rng);
                match flag {
                    AbnormalFlag::Normal => assert!(value >= test.low && value <= test.high),
                    AbnormalFlag::Low => assert!(value <= test.low),
                    AbnormalFlag::High => assert!(value >= test.high),
                }
            }
        }
    }
}
