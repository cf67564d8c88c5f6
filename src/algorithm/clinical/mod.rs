//! Clinical activity generation
//!
//! Procedures, medications and lab results recorded during each admission.
//! The number of records per admission follows a Poisson distribution.

pub mod labs;
pub mod medications;
pub mod procedures;

pub use labs::generate_lab_results;
pub use medications::generate_medications;
pub use procedures::generate_procedures;

use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::error::{Result, SynthError};

/// Poisson sampler for per-admission record counts
#[derive(Debug, Clone, Copy)]
pub struct RecordCount(Poisson<f64>);

impl RecordCount {
    /// Counts with the given mean
    pub fn with_mean(mean: f64) -> Result<Self> {
        Poisson::new(mean)
            .map(Self)
            .map_err(|e| SynthError::Distribution(format!("invalid Poisson mean {mean}: {e}")))
    }

    /// Draw a count
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        // Poisson samples are non-negative whole numbers stored as f64
        self.0.sample(rng) as usize
    }
}
