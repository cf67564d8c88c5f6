//! Data quality checks
//!
//! Checks never fail: every violated property becomes a [`QualityIssue`] in
//! the returned [`QualityReport`].

pub mod admissions;
pub mod integrity;

use std::fmt;

use itertools::Itertools;
use log::{info, warn};

pub use admissions::check_admissions;
pub use integrity::check_dataset;

/// The property a [`QualityIssue`] violates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Check {
    DischargeBeforeAdmission,
    LengthOfStay,
    Mortality,
    IcuDays,
    DuplicateId,
    Readmission,
    MissingReference,
    DepartmentHospital,
    SecondaryDiagnoses,
    BillingBalance,
    BillingCoverage,
    PaymentDate,
    MedicationDates,
}

impl Check {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DischargeBeforeAdmission => "discharge before admission",
            Self::LengthOfStay => "length of stay",
            Self::Mortality => "mortality",
            Self::IcuDays => "ICU days",
            Self::DuplicateId => "duplicate id",
            Self::Readmission => "readmission linkage",
            Self::MissingReference => "missing reference",
            Self::DepartmentHospital => "department hospital",
            Self::SecondaryDiagnoses => "secondary diagnoses",
            Self::BillingBalance => "billing balance",
            Self::BillingCoverage => "billing coverage",
            Self::PaymentDate => "payment date",
            Self::MedicationDates => "medication dates",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated property of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityIssue {
    pub check: Check,
    pub table: &'static str,
    pub record_id: String,
    pub detail: String,
}

impl QualityIssue {
    pub fn new(check: Check, table: &'static str, record_id: &str, detail: impl Into<String>) -> Self {
        Self {
            check,
            table,
            record_id: record_id.to_string(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}: {}", self.check, self.table, self.record_id, self.detail)
    }
}

/// Outcome of a quality run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualityReport {
    /// Records inspected, across all tables
    pub records_checked: usize,
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues with the given check
    pub fn issues_for(&self, check: Check) -> impl Iterator<Item = &QualityIssue> {
        self.issues.iter().filter(move |issue| issue.check == check)
    }

    /// Number of issues per check, ordered by check
    #[must_use]
    pub fn counts(&self) -> Vec<(Check, usize)> {
        self.issues
            .iter()
            .map(|issue| issue.check)
            .counts()
            .into_iter()
            .sorted()
            .collect()
    }

    /// Append another report
    pub fn merge(&mut self, other: Self) {
        self.records_checked += other.records_checked;
        self.issues.extend(other.issues);
    }

    /// Log the outcome; at most `max_listed` issues are listed individually
    pub fn log(&self, max_listed: usize) {
        if self.is_clean() {
            info!("Quality check passed: {} records, no issues", self.records_checked);
            return;
        }
        warn!(
            "Quality check found {} issues in {} records",
            self.issues.len(),
            self.records_checked
        );
        for (check, count) in self.counts() {
            warn!("  {check}: {count}");
        }
        for issue in self.issues.iter().take(max_listed) {
            warn!("  {issue}");
        }
    }
}
