//! Cross-table checks

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithm::Dataset;
use crate::config::AdmissionConfig;
use crate::models::PaymentStatus;
use crate::quality::{Check, QualityIssue, QualityReport, check_admissions};

/// Check every table of a dataset
///
/// Runs [`check_admissions`] and verifies that every foreign key resolves,
/// that departments belong to the admission's hospital, and that bills add up.
#[must_use]
pub fn check_dataset(dataset: &Dataset, config: &AdmissionConfig) -> QualityReport {
    let mut report = check_admissions(&dataset.admissions, config);
    let mut issues = Vec::new();

    let patients: FxHashSet<&str> = dataset.patients.iter().map(|p| p.patient_id.as_str()).collect();
    let hospitals: FxHashSet<&str> = dataset.hospitals.iter().map(|h| h.hospital_id.as_str()).collect();
    let conditions: FxHashSet<&str> = dataset
        .conditions
        .iter()
        .map(|c| c.condition_id.as_str())
        .collect();
    let department_owner: FxHashMap<&str, &str> = dataset
        .departments
        .iter()
        .map(|d| (d.department_id.as_str(), d.hospital_id.as_str()))
        .collect();
    let admission_ids: FxHashSet<&str> = dataset
        .admissions
        .iter()
        .map(|a| a.admission_id.as_str())
        .collect();

    for department in &dataset.departments {
        if !hospitals.contains(department.hospital_id.as_str()) {
            issues.push(QualityIssue::new(
                Check::MissingReference,
                "departments",
                &department.department_id,
                format!("unknown hospital {}", department.hospital_id),
            ));
        }
    }

    for admission in &dataset.admissions {
        let id = admission.admission_id.as_str();
        let missing = |what: &str, value: &str| {
            QualityIssue::new(Check::MissingReference, "admissions", id, format!("unknown {what} {value}"))
        };

        if !patients.contains(admission.patient_id.as_str()) {
            issues.push(missing("patient", &admission.patient_id));
        }
        if !hospitals.contains(admission.hospital_id.as_str()) {
            issues.push(missing("hospital", &admission.hospital_id));
        }
        if !conditions.contains(admission.primary_diagnosis_id.as_str()) {
            issues.push(missing("condition", &admission.primary_diagnosis_id));
        }
        for secondary in admission.secondary_diagnosis_ids() {
            if !conditions.contains(secondary) {
                issues.push(missing("secondary condition", secondary));
            }
        }
        if let Some(previous) = admission.previous_admission_id.as_deref() {
            if !admission_ids.contains(previous) {
                issues.push(missing("previous admission", previous));
            }
        }

        match department_owner.get(admission.department_id.as_str()) {
            None => issues.push(missing("department", &admission.department_id)),
            Some(owner) if *owner != admission.hospital_id => {
                issues.push(QualityIssue::new(
                    Check::DepartmentHospital,
                    "admissions",
                    id,
                    format!(
                        "department {} belongs to {}, not {}",
                        admission.department_id, owner, admission.hospital_id
                    ),
                ));
            }
            Some(_) => {}
        }

        if admission
            .secondary_diagnosis_ids()
            .contains(&admission.primary_diagnosis_id.as_str())
        {
            issues.push(QualityIssue::new(
                Check::SecondaryDiagnoses,
                "admissions",
                id,
                "primary diagnosis repeated as secondary",
            ));
        }
    }

    let mut check_admission_ref = |table: &'static str, record_id: &str, admission_id: &str| {
        if !admission_ids.contains(admission_id) {
            issues.push(QualityIssue::new(
                Check::MissingReference,
                table,
                record_id,
                format!("unknown admission {admission_id}"),
            ));
        }
    };
    for procedure in &dataset.procedures {
        check_admission_ref("patient_procedures", &procedure.patient_procedure_id, &procedure.admission_id);
    }
    for medication in &dataset.medications {
        check_admission_ref("patient_medications", &medication.patient_medication_id, &medication.admission_id);
    }
    for lab in &dataset.lab_results {
        check_admission_ref("lab_results", &lab.lab_result_id, &lab.admission_id);
    }
    for bill in &dataset.billing {
        check_admission_ref("billing", &bill.billing_id, &bill.admission_id);
    }

    for medication in &dataset.medications {
        if medication.end_date < medication.start_date {
            issues.push(QualityIssue::new(
                Check::MedicationDates,
                "patient_medications",
                &medication.patient_medication_id,
                format!("ends {} before it starts {}", medication.end_date, medication.start_date),
            ));
        }
    }

    let mut billed: FxHashMap<&str, usize> = FxHashMap::default();
    for bill in &dataset.billing {
        *billed.entry(bill.admission_id.as_str()).or_default() += 1;

        if !bill.is_balanced() {
            issues.push(QualityIssue::new(
                Check::BillingBalance,
                "billing",
                &bill.billing_id,
                format!(
                    "{:.2} covered + {:.2} patient != {:.2} total",
                    bill.insurance_covered, bill.patient_responsibility, bill.total_charges
                ),
            ));
        }
        let paid = bill.payment_status == PaymentStatus::Paid;
        match bill.payment_date {
            Some(date) if !paid => issues.push(QualityIssue::new(
                Check::PaymentDate,
                "billing",
                &bill.billing_id,
                format!("payment date {date} on a {} bill", bill.payment_status),
            )),
            Some(date) if date < bill.billing_date => issues.push(QualityIssue::new(
                Check::PaymentDate,
                "billing",
                &bill.billing_id,
                format!("paid {date} before billing {}", bill.billing_date),
            )),
            None if paid => issues.push(QualityIssue::new(
                Check::PaymentDate,
                "billing",
                &bill.billing_id,
                "paid bill without payment date",
            )),
            _ => {}
        }
    }
    for admission in &dataset.admissions {
        let bills = billed.get(admission.admission_id.as_str()).copied().unwrap_or(0);
        if bills != 1 {
            issues.push(QualityIssue::new(
                Check::BillingCoverage,
                "admissions",
                &admission.admission_id,
                format!("{bills} bills instead of 1"),
            ));
        }
    }

    let summary = dataset.summary();
    report.merge(QualityReport {
        records_checked: summary.patients
            + summary.hospitals
            + summary.departments
            + summary.medical_conditions
            + summary.procedures
            + summary.medications
            + summary.lab_results
            + summary.billing,
        issues,
    });
    report
}
