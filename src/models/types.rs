//! Common domain type definitions
//!
//! Coded categorical values shared by the generated tables. Every enum
//! serializes as a plain string holding its human-readable label, which is
//! also what ends up in the exported files.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Define a categorical enum with a fixed label per variant.
///
/// Generates `ALL`, `as_str`, `from_label`, `Display` and string serde
/// impls so the label is the wire value.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The label written to exported tables
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// The variant carrying `label`, if any
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Self::from_label(&label)
                    .ok_or_else(|| de::Error::unknown_variant(&label, &[$($label),+]))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

coded_enum! {
    /// Gender of a patient
    pub enum Gender {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

coded_enum! {
    /// ABO/Rh blood type
    pub enum BloodType {
        APositive => "A+",
        ANegative => "A-",
        BPositive => "B+",
        BNegative => "B-",
        AbPositive => "AB+",
        AbNegative => "AB-",
        OPositive => "O+",
        ONegative => "O-",
    }
}

coded_enum! {
    /// Insurance carrier of a patient
    pub enum InsuranceProvider {
        BlueCross => "Blue Cross",
        Aetna => "Aetna",
        UnitedHealthcare => "UnitedHealthcare",
        Cigna => "Cigna",
        Humana => "Humana",
        Medicare => "Medicare",
        Medicaid => "Medicaid",
    }
}

coded_enum! {
    /// How urgent an admission was
    pub enum AdmissionType {
        Emergency => "Emergency",
        Urgent => "Urgent",
        Elective => "Elective",
        Transfer => "Transfer",
    }
}

impl AdmissionType {
    /// Relative frequency of each admission type, aligned with [`Self::ALL`]
    pub const WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];
}

coded_enum! {
    /// Where the patient came from
    pub enum AdmissionSource {
        EmergencyRoom => "Emergency Room",
        PhysicianReferral => "Physician Referral",
        TransferFromOther => "Transfer from Other",
        ClinicReferral => "Clinic Referral",
    }
}

coded_enum! {
    /// Where the patient went at the end of the stay
    pub enum DischargeDisposition {
        Home => "Home",
        HomeHealthService => "Home Health Service",
        SkilledNursingFacility => "Skilled Nursing Facility",
        RehabFacility => "Rehab Facility",
        /// Patient died during the stay
        Expired => "Expired",
        LeftAgainstMedicalAdvice => "Left AMA",
    }
}

impl DischargeDisposition {
    /// Dispositions available to a patient discharged alive
    pub const LIVE: &'static [Self] = &[
        Self::Home,
        Self::HomeHealthService,
        Self::SkilledNursingFacility,
        Self::RehabFacility,
        Self::LeftAgainstMedicalAdvice,
    ];

    /// Whether the disposition ends the patient's history
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Expired)
    }
}

coded_enum! {
    /// Kind of hospital
    pub enum HospitalType {
        General => "General",
        Specialty => "Specialty",
        Teaching => "Teaching",
        Community => "Community",
    }
}

coded_enum! {
    /// Trauma center designation
    pub enum TraumaLevel {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
    }
}

coded_enum! {
    /// Clinical department of a hospital
    pub enum DepartmentKind {
        Emergency => "Emergency",
        Cardiology => "Cardiology",
        Neurology => "Neurology",
        Oncology => "Oncology",
        Orthopedics => "Orthopedics",
        Pediatrics => "Pediatrics",
        Surgery => "Surgery",
        Icu => "ICU",
        InternalMedicine => "Internal Medicine",
        Radiology => "Radiology",
    }
}

coded_enum! {
    /// Body system a medical condition belongs to
    pub enum ConditionCategory {
        Endocrine => "Endocrine",
        Cardiovascular => "Cardiovascular",
        Respiratory => "Respiratory",
        Renal => "Renal",
        Infectious => "Infectious",
        Neurological => "Neurological",
    }
}

coded_enum! {
    /// Severity grading of a medical condition
    pub enum SeverityLevel {
        Moderate => "Moderate",
        Severe => "Severe",
        Critical => "Critical",
    }
}

coded_enum! {
    /// Complexity of a procedure
    pub enum ProcedureComplexity {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

coded_enum! {
    /// Result of a procedure
    pub enum ProcedureOutcome {
        Success => "Success",
        Complicated => "Complicated",
        AdverseEvent => "Adverse Event",
    }
}

impl ProcedureOutcome {
    /// Relative frequency of each outcome, aligned with [`Self::ALL`]
    pub const WEIGHTS: [f64; 3] = [0.85, 0.12, 0.03];
}

coded_enum! {
    /// Administration schedule of a medication
    pub enum MedicationFrequency {
        OnceDaily => "Once daily",
        TwiceDaily => "Twice daily",
        ThreeTimesDaily => "Three times daily",
        EverySixHours => "Every 6 hours",
        AsNeeded => "As needed",
    }
}

coded_enum! {
    /// Lab value relative to its reference range
    pub enum AbnormalFlag {
        Normal => "Normal",
        Low => "Low",
        High => "High",
    }
}

coded_enum! {
    /// Settlement state of a bill
    pub enum PaymentStatus {
        Paid => "Paid",
        Partial => "Partial",
        Pending => "Pending",
        Outstanding => "Outstanding",
    }
}

impl PaymentStatus {
    /// Relative frequency of each status, aligned with [`Self::ALL`]
    pub const WEIGHTS: [f64; 4] = [0.6, 0.2, 0.15, 0.05];
}
