//! Doctor and patient directory logic: free-text filtering over the
//! already-fetched lists, and local validation for the create/edit forms.
//!
//! Filtering is pure and synchronous — typing in the search box never
//! re-queries the backend; it narrows the in-memory list the screen already
//! holds.

use serde::Deserialize;

use crate::booking::FieldError;
use crate::models::{Doctor, DoctorInput, Patient, PatientInput};

const MAX_TEXT_LEN: usize = 200;

// ─── Free-text filtering ──────────────────────────────────────────────────────

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive substring match on name, paternal surname, or specialty.
/// A blank query keeps the full list.
pub fn filter_doctors(doctors: &[Doctor], query: &str) -> Vec<Doctor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return doctors.to_vec();
    }
    doctors
        .iter()
        .filter(|d| {
            matches(&d.name, &needle)
                || matches(&d.paternal_surname, &needle)
                || matches(&d.specialty, &needle)
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match on name, surname, or email.
/// A blank query keeps the full list.
pub fn filter_patients(patients: &[Patient], query: &str) -> Vec<Patient> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return patients.to_vec();
    }
    patients
        .iter()
        .filter(|p| {
            matches(&p.name, &needle)
                || matches(&p.surname, &needle)
                || p.email.as_deref().is_some_and(|email| matches(email, &needle))
        })
        .cloned()
        .collect()
}

// ─── Form drafts ──────────────────────────────────────────────────────────────

fn require(
    value: &str,
    field: &'static str,
    missing: &'static str,
    too_long: &'static str,
) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError {
            field,
            message: missing,
        });
    }
    if trimmed.len() > MAX_TEXT_LEN {
        return Err(FieldError {
            field,
            message: too_long,
        });
    }
    Ok(trimmed.to_string())
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Doctor create/edit form, validated locally before any network call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub paternal_surname: String,
    #[serde(default)]
    pub maternal_surname: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub consultation_days: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl DoctorDraft {
    pub fn validate(&self) -> Result<DoctorInput, FieldError> {
        let name = require(&self.name, "name", "Name is required", "Name too long")?;
        let paternal_surname = require(
            &self.paternal_surname,
            "paternalSurname",
            "Paternal surname is required",
            "Paternal surname too long",
        )?;
        let maternal_surname = require(
            &self.maternal_surname,
            "maternalSurname",
            "Maternal surname is required",
            "Maternal surname too long",
        )?;
        let specialty = require(
            &self.specialty,
            "specialty",
            "Specialty is required",
            "Specialty too long",
        )?;

        Ok(DoctorInput {
            name,
            paternal_surname,
            maternal_surname,
            specialty,
            license_number: optional(&self.license_number),
            consultation_days: optional(&self.consultation_days),
            start_time: optional(&self.start_time),
            end_time: optional(&self.end_time),
        })
    }
}

/// Patient create/edit form, validated locally before any network call.
/// Also reachable from the booking screen's quick-create dialog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub national_health_id: Option<String>,
}

impl PatientDraft {
    pub fn validate(&self) -> Result<PatientInput, FieldError> {
        let name = require(&self.name, "name", "Name is required", "Name too long")?;
        let surname = require(
            &self.surname,
            "surname",
            "Surname is required",
            "Surname too long",
        )?;

        let email = optional(&self.email);
        if let Some(ref email) = email {
            if !email.contains('@') {
                return Err(FieldError {
                    field: "email",
                    message: "Email address is not valid",
                });
            }
        }

        Ok(PatientInput {
            name,
            surname,
            email,
            phone: optional(&self.phone),
            birth_date: self.birth_date,
            national_health_id: optional(&self.national_health_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: i64, name: &str, paternal: &str, specialty: &str) -> Doctor {
        Doctor {
            id,
            name: name.into(),
            paternal_surname: paternal.into(),
            maternal_surname: "Lopez".into(),
            specialty: specialty.into(),
            license_number: None,
            consultation_days: None,
            start_time: None,
            end_time: None,
        }
    }

    fn patient(id: i64, name: &str, surname: &str, email: Option<&str>) -> Patient {
        Patient {
            id,
            name: name.into(),
            surname: surname.into(),
            email: email.map(Into::into),
            phone: None,
            birth_date: None,
            national_health_id: None,
        }
    }

    #[test]
    fn patient_substring_match_is_case_insensitive() {
        let patients = vec![
            patient(1, "Luis", "Garcia", None),
            patient(2, "Margarita", "Flores", None),
            patient(3, "Pedro", "Martinez", None),
        ];

        let hits = filter_patients(&patients, "gar");
        let surnames: Vec<&str> = hits.iter().map(|p| p.surname.as_str()).collect();
        assert_eq!(surnames, vec!["Garcia", "Flores"]);

        // "Margarita" matched on the name, "Martinez" matched nothing.
        assert!(hits.iter().any(|p| p.name == "Margarita"));
        assert!(!hits.iter().any(|p| p.surname == "Martinez"));
    }

    #[test]
    fn patient_matches_on_email() {
        let patients = vec![
            patient(1, "Luis", "Flores", Some("luis@example.com")),
            patient(2, "Ana", "Reyes", None),
        ];
        let hits = filter_patients(&patients, "EXAMPLE.COM");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Luis");
    }

    #[test]
    fn doctor_matches_on_specialty() {
        let doctors = vec![
            doctor(1, "Ana", "Garcia", "Cardiology"),
            doctor(2, "Luis", "Reyes", "Dermatology"),
        ];
        let hits = filter_doctors(&doctors, "cardio");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].paternal_surname, "Garcia");
    }

    #[test]
    fn blank_query_keeps_the_full_list() {
        let doctors = vec![
            doctor(1, "Ana", "Garcia", "Cardiology"),
            doctor(2, "Luis", "Reyes", "Dermatology"),
        ];
        assert_eq!(filter_doctors(&doctors, "").len(), 2);
        assert_eq!(filter_doctors(&doctors, "   ").len(), 2);
    }

    #[test]
    fn doctor_draft_requires_core_fields() {
        let draft = DoctorDraft {
            name: "Ana".into(),
            paternal_surname: "  ".into(),
            maternal_surname: "Lopez".into(),
            specialty: "Cardiology".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, "paternalSurname");
    }

    #[test]
    fn doctor_draft_trims_and_drops_blank_optionals() {
        let draft = DoctorDraft {
            name: " Ana ".into(),
            paternal_surname: "Garcia".into(),
            maternal_surname: "Lopez".into(),
            specialty: "Cardiology".into(),
            license_number: Some("  ".into()),
            start_time: Some(" 09:00 ".into()),
            ..Default::default()
        };
        let input = draft.validate().unwrap();
        assert_eq!(input.name, "Ana");
        assert_eq!(input.license_number, None);
        assert_eq!(input.start_time.as_deref(), Some("09:00"));
    }

    #[test]
    fn patient_draft_rejects_malformed_email() {
        let draft = PatientDraft {
            name: "Luis".into(),
            surname: "Garcia".into(),
            email: Some("not-an-address".into()),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, "email");
    }

    #[test]
    fn patient_draft_accepts_minimal_fields() {
        let draft = PatientDraft {
            name: "Luis".into(),
            surname: "Garcia".into(),
            ..Default::default()
        };
        let input = draft.validate().unwrap();
        assert_eq!(input.surname, "Garcia");
        assert_eq!(input.email, None);
    }

    #[test]
    fn overlong_field_is_rejected() {
        let draft = PatientDraft {
            name: "x".repeat(300),
            surname: "Garcia".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, "name");
    }
}
