//! Hospital and department generation

use fake::Fake;
use fake::faker::address::en::{CityName, StateAbbr, ZipCode};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::algorithm::population::patients::street_address;
use crate::algorithm::sampling::{self, IdSequence};
use crate::error::Result;
use crate::models::{Department, DepartmentKind, Hospital, HospitalType, TraumaLevel};

const HOSPITAL_SUFFIXES: [&str; 4] = [
    "Medical Center",
    "General Hospital",
    "Regional Hospital",
    "Community Hospital",
];

/// Generate `count` hospitals with ids starting at `H40001`
pub fn generate_hospitals<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<Hospital>> {
    let mut ids = IdSequence::hospitals();
    let mut hospitals = Vec::with_capacity(count);

    for _ in 0..count {
        let total_beds = rng.random_range(100..=800u32);
        // At most 30% of beds free, but never fewer than 10
        let available_beds = rng.random_range(10..=(total_beds * 3 / 10).max(10));
        let name_city: String = CityName().fake_with_rng(rng);
        let suffix = sampling::choose(&HOSPITAL_SUFFIXES, rng, "hospital names")?;

        // One extra slot for hospitals without a trauma designation
        let trauma_slot = rng.random_range(0..=TraumaLevel::ALL.len());

        hospitals.push(Hospital {
            hospital_id: ids.next_id(),
            hospital_name: format!("{name_city} {suffix}"),
            address: street_address(rng),
            city: CityName().fake_with_rng(rng),
            state: StateAbbr().fake_with_rng(rng),
            zip_code: ZipCode().fake_with_rng(rng),
            phone: PhoneNumber().fake_with_rng(rng),
            total_beds,
            available_beds,
            hospital_type: *sampling::choose(HospitalType::ALL, rng, "hospital types")?,
            trauma_level: TraumaLevel::ALL.get(trauma_slot).copied(),
        });
    }

    Ok(hospitals)
}

/// Generate 5 to 10 distinct departments for every hospital
pub fn generate_departments<R: Rng>(hospitals: &[Hospital], rng: &mut R) -> Result<Vec<Department>> {
    let mut ids = IdSequence::departments();
    let mut departments = Vec::new();

    for hospital in hospitals {
        let count = rng.random_range(5..=DepartmentKind::ALL.len());
        let kinds: Vec<DepartmentKind> = DepartmentKind::ALL.choose_multiple(rng, count).copied().collect();

        for kind in kinds {
            let total_beds = rng.random_range(10..=50u32);
            let available_beds = rng.random_range(1..=(total_beds * 2 / 5).max(1));
            departments.push(Department {
                department_id: ids.next_id(),
                hospital_id: hospital.hospital_id.clone(),
                department_name: kind,
                department_type: kind,
                head_physician: sampling::physician_name(rng),
                total_beds,
                available_beds,
            });
        }
    }

    Ok(departments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::sampling::{Stage, stage_rng};
    use std::collections::HashSet;

    #[test]
    fn test_hospital_capacity_bounds() {
        let mut rng = stage_rng(42, Stage::Hospitals);
        let hospitals = generate_hospitals(50, &mut rng).unwrap();
        assert_eq!(hospitals.len(), 50);
        assert_eq!(hospitals[0].hospital_id, "H40001");
        for hospital in &hospitals {
            assert!((100..=800).contains(&hospital.total_beds));
            assert!(hospital.available_beds >= 10);
            assert!(hospital.available_beds <= hospital.total_beds * 3 / 10);
        }
    }

    #[test]
    fn test_departments_distinct_per_hospital() {
        let mut rng = stage_rng(42, Stage::Hospitals);
        let hospitals = generate_hospitals(10, &mut rng).unwrap();
        let mut rng = stage_rng(42, Stage::Departments);
        let departments = generate_departments(&hospitals, &mut rng).unwrap();

        assert_eq!(departments[0].department_id, "D50001");
        for hospital in &hospitals {
            let kinds: Vec<_> = departments
                .iter()
                .filter(|d| d.belongs_to(&hospital.hospital_id))
                .map(|d| d.department_name)
                .collect();
            assert!((5..=10).contains(&kinds.len()));
            let unique: HashSet<_> = kinds.iter().collect();
            assert_eq!(unique.len(), kinds.len());
        }
        for department in &departments {
            assert!((10..=50).contains(&department.total_beds));
            assert!((1..=department.total_beds * 2 / 5).contains(&department.available_beds));
        }
    }
}
