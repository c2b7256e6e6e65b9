use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub specialty: String,
    pub license_number: Option<String>,
    /// Free-text description of the days this doctor sees patients.
    pub consultation_days: Option<String>,
    /// Time-of-day strings ("09:00"), display only.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Write payload for doctor create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorInput {
    pub name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}
