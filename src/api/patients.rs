use super::client::HospitalClient;
use super::error::ApiError;
use crate::models::{Patient, PatientInput};

impl HospitalClient {
    pub fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get_json("/patients")
    }

    pub fn get_patient(&self, id: i64) -> Result<Patient, ApiError> {
        self.get_json(&format!("/patients/{id}"))
    }

    pub fn create_patient(&self, input: &PatientInput) -> Result<Patient, ApiError> {
        self.post_json("/patients", input)
    }

    pub fn update_patient(&self, id: i64, input: &PatientInput) -> Result<Patient, ApiError> {
        self.put_json(&format!("/patients/{id}"), input)
    }

    /// Hard delete.
    pub fn delete_patient(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/patients/{id}"))
    }
}
