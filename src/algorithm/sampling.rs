//! Shared sampling helpers
//!
//! All randomness flows through an explicitly passed [`Rng`]. Generation
//! stages each get their own ChaCha stream derived from the run seed, so a
//! stage's output depends only on the seed and its inputs.

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use fake::Fake;
use fake::faker::name::en::LastName;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SynthError};

/// Generation stages, each with its own random stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Patients = 1,
    Hospitals = 2,
    Departments = 3,
    Admissions = 4,
    Procedures = 5,
    Medications = 6,
    LabResults = 7,
    Billing = 8,
}

/// Create the random stream for `stage` from the run seed
#[must_use]
pub fn stage_rng(seed: u64, stage: Stage) -> ChaCha8Rng {
    // Spread stage offsets so neighbouring seeds do not share streams
    let offset = (stage as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(offset))
}

/// Sequential prefixed identifiers (`A20001`, `A20002`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    #[must_use]
    pub const fn new(prefix: &'static str, first: u64) -> Self {
        Self { prefix, next: first }
    }

    pub const fn patients() -> Self {
        Self::new("P", 10001)
    }

    pub const fn hospitals() -> Self {
        Self::new("H", 40001)
    }

    pub const fn departments() -> Self {
        Self::new("D", 50001)
    }

    pub const fn admissions() -> Self {
        Self::new("A", 20001)
    }

    pub const fn procedures() -> Self {
        Self::new("PP", 80001)
    }

    pub const fn medications() -> Self {
        Self::new("PM", 90001)
    }

    pub const fn lab_results() -> Self {
        Self::new("L", 100001)
    }

    pub const fn billing() -> Self {
        Self::new("B", 90001)
    }

    /// Take the next identifier
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Pick one element uniformly, failing on an empty slice
pub fn choose<'a, T, R: Rng>(items: &'a [T], rng: &mut R, what: &str) -> Result<&'a T> {
    items
        .choose(rng)
        .ok_or_else(|| SynthError::empty_selection(format!("no {what} to choose from")))
}

/// Pick one element with the given relative weights
pub fn choose_weighted<T: Copy, R: Rng>(items: &[T], weights: &[f64], rng: &mut R) -> Result<T> {
    let index = WeightedIndex::new(weights)
        .map_err(|e| SynthError::Distribution(format!("invalid weights: {e}")))?;
    items
        .get(index.sample(rng))
        .copied()
        .ok_or_else(|| SynthError::Distribution("weights longer than choices".to_string()))
}

/// Uniform date in `start ..= start + (days - 1)`
pub fn uniform_date<R: Rng>(start: NaiveDate, days: i64, rng: &mut R) -> Result<NaiveDate> {
    if days <= 0 {
        return Err(SynthError::empty_selection(format!(
            "date range starting {start} has no days"
        )));
    }
    let offset = rng.random_range(0..days);
    add_days(start, offset)
}

/// `date + days`, reporting overflow instead of panicking
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| SynthError::Distribution(format!("{date} shifted by {days} days is out of range")))
}

/// `timestamp + hours`, reporting overflow instead of panicking
pub fn add_hours(timestamp: NaiveDateTime, hours: i64) -> Result<NaiveDateTime> {
    TimeDelta::try_hours(hours)
        .and_then(|delta| timestamp.checked_add_signed(delta))
        .ok_or_else(|| {
            SynthError::Distribution(format!("{timestamp} shifted by {hours} hours is out of range"))
        })
}

/// `Dr. <last name>`
pub fn physician_name<R: Rng>(rng: &mut R) -> String {
    let last_name: String = LastName().fake_with_rng(rng);
    format!("Dr. {last_name}")
}

/// Fill a pattern: `#` becomes a digit, `?` an upper-case letter
pub fn bothify<R: Rng>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.random_range(0..10u8)),
            '?' => char::from(b'A' + rng.random_range(0..26u8)),
            other => other,
        })
        .collect()
}
