//! Patient generation

use chrono::{Months, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

use crate::algorithm::sampling::{self, IdSequence};
use crate::config::GeneratorConfig;
use crate::error::{Result, SynthError};
use crate::models::{BloodType, Gender, InsuranceProvider, Patient};
use crate::utils::logging::{create_main_progress_bar, finish_and_clear};

/// Earliest and latest date of birth giving an age in `min_age..=max_age` on `reference`
pub fn birth_date_range(reference: NaiveDate, min_age: u32, max_age: u32) -> Result<(NaiveDate, NaiveDate)> {
    let years_back = |years: u32| {
        reference
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .ok_or_else(|| SynthError::config(format!("{years} years before {reference} is out of range")))
    };
    let latest = years_back(min_age)?;
    let earliest = sampling::add_days(years_back(max_age.saturating_add(1))?, 1)?;
    Ok((earliest, latest))
}

/// Street address such as `1234 Maple Street`
pub(crate) fn street_address<R: Rng>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

/// Generate `count` patients with ids starting at `P10001`
pub fn generate_patients<R: Rng>(count: usize, config: &GeneratorConfig, rng: &mut R) -> Result<Vec<Patient>> {
    let (earliest, latest) = birth_date_range(config.reference_date, config.min_age, config.max_age)?;
    let span = (latest - earliest).num_days() + 1;

    let mut ids = IdSequence::patients();
    let pb = create_main_progress_bar(count as u64, Some("Generating patients"), config.show_progress);
    let mut patients = Vec::with_capacity(count);

    for _ in 0..count {
        let patient_id = ids.next_id();
        let date_of_birth = sampling::uniform_date(earliest, span, rng)?;
        let patient = Patient {
            patient_id,
            first_name: FirstName().fake_with_rng(rng),
            last_name: LastName().fake_with_rng(rng),
            date_of_birth,
            gender: *sampling::choose(Gender::ALL, rng, "genders")?,
            blood_type: *sampling::choose(BloodType::ALL, rng, "blood types")?,
            phone: PhoneNumber().fake_with_rng(rng),
            email: SafeEmail().fake_with_rng(rng),
            address: street_address(rng),
            city: CityName().fake_with_rng(rng),
            state: StateAbbr().fake_with_rng(rng),
            zip_code: ZipCode().fake_with_rng(rng),
            country: "USA".to_string(),
            emergency_contact_name: Name().fake_with_rng(rng),
            emergency_contact_phone: PhoneNumber().fake_with_rng(rng),
            insurance_provider: *sampling::choose(InsuranceProvider::ALL, rng, "insurance providers")?,
            insurance_policy_number: sampling::bothify("###-??-####", rng),
        };
        patients.push(patient);
        pb.inc(1);
    }

    finish_and_clear(&pb);
    Ok(patients)
}
