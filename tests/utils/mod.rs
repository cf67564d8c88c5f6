use std::collections::HashMap;

use synthcare::models::Admission;
use synthcare::utils::test::fixtures::small_config;
use synthcare::{Dataset, GeneratorConfig, generate_dataset};

/// Generate the small test dataset for `seed`
pub fn small_dataset(seed: u64) -> (GeneratorConfig, Dataset) {
    let config = small_config(seed);
    let dataset = generate_dataset(&config).expect("small dataset generates");
    (config, dataset)
}

/// Admissions by id
pub fn admissions_by_id(admissions: &[Admission]) -> HashMap<&str, &Admission> {
    admissions.iter().map(|a| (a.admission_id.as_str(), a)).collect()
}
