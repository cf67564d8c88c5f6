//! Admission emission
//!
//! Admissions are produced strictly in sequence: the readmission flags of each
//! new admission depend on everything already recorded for the same patient.

use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_distr::Distribution;

use crate::algorithm::admission::history::AdmissionHistory;
use crate::algorithm::admission::inputs::SimulationInputs;
use crate::algorithm::admission::readmission::assess_readmission;
use crate::algorithm::sampling::{self, IdSequence};
use crate::config::AdmissionConfig;
use crate::error::{Result, SynthError};
use crate::models::patient::age_in_years;
use crate::models::{
    Admission, AdmissionSource, AdmissionType, Department, DischargeDisposition, Hospital,
    MedicalCondition, Patient,
};
use crate::utils::logging::{create_main_progress_bar, finish_and_clear};

/// Most secondary diagnoses attached to one admission
const MAX_SECONDARY_DIAGNOSES: usize = 3;

/// The participants of one admission
struct Selection<'a> {
    patient: &'a Patient,
    hospital: &'a Hospital,
    department: &'a Department,
    condition_index: usize,
    condition: &'a MedicalCondition,
}

fn select<'a, R: Rng>(inputs: &SimulationInputs<'a>, rng: &mut R) -> Result<Selection<'a>> {
    let patient = sampling::choose(inputs.patients(), rng, "patients")?;
    let hospital = sampling::choose(inputs.hospitals(), rng, "hospitals")?;
    let department = *inputs
        .departments_of(&hospital.hospital_id)
        .choose(rng)
        .ok_or_else(|| {
            SynthError::empty_selection(format!(
                "hospital {} has no departments",
                hospital.hospital_id
            ))
        })?;
    let condition_index = rng.random_range(0..inputs.conditions().len().max(1));
    let condition = inputs
        .conditions()
        .get(condition_index)
        .ok_or_else(|| SynthError::empty_selection("no conditions to choose from"))?;

    Ok(Selection {
        patient,
        hospital,
        department,
        condition_index,
        condition,
    })
}

/// Draw an admission date uniformly from the configured window
pub fn sample_admission_date<R: Rng>(config: &AdmissionConfig, rng: &mut R) -> Result<NaiveDate> {
    sampling::uniform_date(config.window_start, config.window_days(), rng)
}

/// Emit the next admission of a run
///
/// Selects patient, hospital, department and primary condition, schedules
/// the admission inside the configured window, then builds it against the
/// patient's history. The new admission is appended to `history`.
pub fn emit_next_admission<R: Rng>(
    inputs: &SimulationInputs<'_>,
    history: &mut AdmissionHistory,
    admission_id: String,
    config: &AdmissionConfig,
    rng: &mut R,
) -> Result<Admission> {
    let selection = select(inputs, rng)?;
    let admission_date = sample_admission_date(config, rng)?;
    build_admission(inputs, history, admission_id, &selection, admission_date, config, rng)
}

/// Emit an admission on a caller-chosen date
///
/// Identical to [`emit_next_admission`] except that the admission date is
/// not sampled.
pub fn emit_admission_on<R: Rng>(
    inputs: &SimulationInputs<'_>,
    history: &mut AdmissionHistory,
    admission_id: String,
    admission_date: NaiveDate,
    config: &AdmissionConfig,
    rng: &mut R,
) -> Result<Admission> {
    let selection = select(inputs, rng)?;
    build_admission(inputs, history, admission_id, &selection, admission_date, config, rng)
}

fn build_admission<R: Rng>(
    inputs: &SimulationInputs<'_>,
    history: &mut AdmissionHistory,
    admission_id: String,
    selection: &Selection<'_>,
    admission_date: NaiveDate,
    config: &AdmissionConfig,
    rng: &mut R,
) -> Result<Admission> {
    let condition = selection.condition;
    let los_distribution = inputs
        .length_of_stay(selection.condition_index)
        .ok_or_else(|| SynthError::empty_selection("no length of stay for condition"))?;

    // Truncate toward zero, then floor at one day
    let sampled = los_distribution.sample(rng) as i64;
    let mut length_of_stay = u32::try_from(sampled.max(1)).unwrap_or(u32::MAX);

    let mortality = rng.random::<f64>() < config.mortality_probability;
    if mortality {
        length_of_stay = rng.random_range(1..=config.mortality_max_days);
    }
    let discharge_date = sampling::add_days(admission_date, i64::from(length_of_stay))?;

    let readmission = assess_readmission(
        history,
        &selection.patient.patient_id,
        admission_date,
        config,
    );

    let icu_stay = rng.random::<f64>() < condition.risk * config.icu_risk_factor;
    // A one-day stay leaves no room for ICU days
    let icu_days = if icu_stay && length_of_stay > 1 {
        rng.random_range(1..=length_of_stay / 2)
    } else {
        0
    };

    let admission_type = sampling::choose_weighted(AdmissionType::ALL, &AdmissionType::WEIGHTS, rng)?;
    let admission_source = *sampling::choose(AdmissionSource::ALL, rng, "admission sources")?;
    let secondary_diagnoses = sample_secondary_diagnoses(inputs.conditions(), &condition.condition_id, rng);
    let attending_physician = sampling::physician_name(rng);

    let discharge_disposition = if mortality {
        DischargeDisposition::Expired
    } else {
        *sampling::choose(DischargeDisposition::LIVE, rng, "discharge dispositions")?
    };

    let admission = Admission {
        admission_id,
        patient_id: selection.patient.patient_id.clone(),
        hospital_id: selection.hospital.hospital_id.clone(),
        department_id: selection.department.department_id.clone(),
        admission_date,
        discharge_date,
        admission_type,
        admission_source,
        primary_diagnosis_id: condition.condition_id.clone(),
        secondary_diagnoses,
        attending_physician,
        length_of_stay_days: length_of_stay,
        patient_age_at_admission: age_in_years(selection.patient.date_of_birth, admission_date),
        readmission_flag: readmission.readmission,
        readmission_within_30days: readmission.within_short_window,
        previous_admission_id: readmission.previous_admission_id,
        discharge_disposition,
        mortality_flag: mortality,
        icu_stay_flag: icu_stay,
        icu_days,
    };

    history.record(
        &admission.patient_id,
        &admission.admission_id,
        admission.discharge_date,
    );

    debug!(
        "{} for {}: {} -> {} (readmission: {})",
        admission.admission_id,
        admission.patient_id,
        admission.admission_date,
        admission.discharge_date,
        admission.readmission_flag
    );

    Ok(admission)
}

fn sample_secondary_diagnoses<R: Rng>(
    conditions: &[MedicalCondition],
    primary_id: &str,
    rng: &mut R,
) -> String {
    let others: Vec<&str> = conditions
        .iter()
        .map(|c| c.condition_id.as_str())
        .filter(|id| *id != primary_id)
        .collect();
    let count = rng.random_range(0..=MAX_SECONDARY_DIAGNOSES).min(others.len());
    others.choose_multiple(rng, count).join(",")
}

/// Owns the state of one admission generation run
#[derive(Debug)]
pub struct AdmissionSimulator<'a> {
    inputs: SimulationInputs<'a>,
    config: AdmissionConfig,
    history: AdmissionHistory,
    ids: IdSequence,
}

impl<'a> AdmissionSimulator<'a> {
    /// Create a simulator with an empty history
    pub fn new(inputs: SimulationInputs<'a>, config: AdmissionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inputs,
            config,
            history: AdmissionHistory::new(),
            ids: IdSequence::admissions(),
        })
    }

    /// Emit the next admission and record it in the history
    pub fn emit_next_admission<R: Rng>(&mut self, rng: &mut R) -> Result<Admission> {
        let admission_id = self.ids.next_id();
        emit_next_admission(&self.inputs, &mut self.history, admission_id, &self.config, rng)
    }

    /// Emit an admission on a fixed date and record it in the history
    pub fn emit_admission_on<R: Rng>(&mut self, admission_date: NaiveDate, rng: &mut R) -> Result<Admission> {
        let admission_id = self.ids.next_id();
        emit_admission_on(
            &self.inputs,
            &mut self.history,
            admission_id,
            admission_date,
            &self.config,
            rng,
        )
    }

    /// Emit `count` admissions in order
    pub fn generate<R: Rng>(&mut self, count: usize, rng: &mut R, show_progress: bool) -> Result<Vec<Admission>> {
        info!("Simulating {count} admissions");
        let pb = create_main_progress_bar(count as u64, Some("Simulating admissions"), show_progress);

        let mut admissions = Vec::with_capacity(count);
        for _ in 0..count {
            admissions.push(self.emit_next_admission(rng)?);
            pb.inc(1);
        }
        finish_and_clear(&pb);

        let readmissions = admissions.iter().filter(|a| a.readmission_flag).count();
        info!(
            "Simulated {} admissions for {} patients ({} readmissions)",
            admissions.len(),
            self.history.patient_count(),
            readmissions
        );
        Ok(admissions)
    }

    /// History accumulated so far
    #[must_use]
    pub const fn history(&self) -> &AdmissionHistory {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &AdmissionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::sampling::{Stage, stage_rng};
    use crate::models::reference_conditions;
    use crate::utils::test::fixtures::{department, hospital, patient};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn no_mortality() -> AdmissionConfig {
        AdmissionConfig {
            mortality_probability: 0.0,
            ..AdmissionConfig::default()
        }
    }

    #[test]
    fn test_three_admission_chain() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = vec![MedicalCondition::new("C1", "Fixed stay", 0.2, 5.0, 0.0)];
        let inputs = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap();
        let mut simulator = AdmissionSimulator::new(inputs, no_mortality()).unwrap();
        let mut rng = stage_rng(11, Stage::Admissions);

        let first = simulator.emit_admission_on(date(2023, 1, 1), &mut rng).unwrap();
        assert_eq!(first.discharge_date, date(2023, 1, 6));
        assert!(!first.readmission_flag);
        assert!(first.previous_admission_id.is_none());

        // 10 days after the first discharge
        let second = simulator.emit_admission_on(date(2023, 1, 16), &mut rng).unwrap();
        assert!(second.readmission_flag);
        assert!(second.readmission_within_30days);
        assert_eq!(second.previous_admission_id.as_deref(), Some("A20001"));

        // 60 days after the second discharge (2023-01-21)
        let third = simulator.emit_admission_on(date(2023, 3, 22), &mut rng).unwrap();
        assert!(third.readmission_flag);
        assert!(!third.readmission_within_30days);
        assert_eq!(third.previous_admission_id.as_deref(), Some("A20002"));

        assert_eq!(simulator.history().discharges("P10001").len(), 3);
    }

    #[test]
    fn test_one_day_icu_stay_has_no_icu_days() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = vec![MedicalCondition::new("C1", "Short stay", 1.0, 1.0, 0.0)];
        let inputs = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap();
        let config = AdmissionConfig {
            icu_risk_factor: 2.0,
            ..no_mortality()
        };
        let mut simulator = AdmissionSimulator::new(inputs, config).unwrap();
        let mut rng = stage_rng(5, Stage::Admissions);

        for _ in 0..50 {
            let admission = simulator.emit_next_admission(&mut rng).unwrap();
            assert!(admission.icu_stay_flag);
            assert_eq!(admission.length_of_stay_days, 1);
            assert_eq!(admission.icu_days, 0);
        }
    }

    #[test]
    fn test_mortality_forces_expired_short_stay() {
        let patients = vec![patient("P10001"), patient("P10002")];
        let hospitals = vec![hospital("H40001")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = reference_conditions();
        let inputs = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap();
        let config = AdmissionConfig {
            mortality_probability: 1.0,
            ..AdmissionConfig::default()
        };
        let mut simulator = AdmissionSimulator::new(inputs, config).unwrap();
        let mut rng = stage_rng(8, Stage::Admissions);

        let admissions = simulator.generate(100, &mut rng, false).unwrap();
        for admission in &admissions {
            assert!(admission.mortality_flag);
            assert_eq!(admission.discharge_disposition, DischargeDisposition::Expired);
            assert!((1..=3).contains(&admission.length_of_stay_days));
            assert_eq!(admission.stay_days(), i64::from(admission.length_of_stay_days));
        }
    }

    #[test]
    fn test_department_matches_hospital() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001"), hospital("H40002")];
        let departments = vec![
            department("D50001", "H40001"),
            department("D50002", "H40002"),
            department("D50003", "H40002"),
        ];
        let conditions = reference_conditions();
        let inputs = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap();
        let mut simulator = AdmissionSimulator::new(inputs, AdmissionConfig::default()).unwrap();
        let mut rng = stage_rng(2, Stage::Admissions);

        for admission in simulator.generate(200, &mut rng, false).unwrap() {
            let owner = departments
                .iter()
                .find(|d| d.department_id == admission.department_id)
                .map(|d| d.hospital_id.as_str());
            assert_eq!(owner, Some(admission.hospital_id.as_str()));
            assert!(!admission.secondary_diagnosis_ids().contains(&admission.primary_diagnosis_id.as_str()));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let patients = vec![patient("P10001")];
        let hospitals = vec![hospital("H40001")];
        let departments = vec![department("D50001", "H40001")];
        let conditions = reference_conditions();
        let inputs = SimulationInputs::new(&patients, &hospitals, &departments, &conditions).unwrap();
        let config = AdmissionConfig {
            mortality_max_days: 0,
            ..AdmissionConfig::default()
        };
        assert!(AdmissionSimulator::new(inputs, config).is_err());
    }
}
