//! Hospital and department entity models

use serde::{Deserialize, Serialize};

use crate::models::types::{DepartmentKind, HospitalType, TraumaLevel};

/// A synthetic hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    /// Stable identifier (`H40001`, ...)
    pub hospital_id: String,
    pub hospital_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub total_beds: u32,
    pub available_beds: u32,
    pub hospital_type: HospitalType,
    /// Trauma center designation, if any
    pub trauma_level: Option<TraumaLevel>,
}

/// A department owned by exactly one hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Stable identifier (`D50001`, ...)
    pub department_id: String,
    /// Owning hospital
    pub hospital_id: String,
    pub department_name: DepartmentKind,
    pub department_type: DepartmentKind,
    pub head_physician: String,
    pub total_beds: u32,
    pub available_beds: u32,
}

impl Department {
    /// Whether the department belongs to `hospital_id`
    #[must_use]
    pub fn belongs_to(&self, hospital_id: &str) -> bool {
        self.hospital_id == hospital_id
    }
}
