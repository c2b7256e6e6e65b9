use super::client::HospitalClient;
use super::error::ApiError;
use crate::models::{Doctor, DoctorInput};

impl HospitalClient {
    pub fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.get_json("/doctors")
    }

    pub fn get_doctor(&self, id: i64) -> Result<Doctor, ApiError> {
        self.get_json(&format!("/doctors/{id}"))
    }

    pub fn create_doctor(&self, input: &DoctorInput) -> Result<Doctor, ApiError> {
        self.post_json("/doctors", input)
    }

    pub fn update_doctor(&self, id: i64, input: &DoctorInput) -> Result<Doctor, ApiError> {
        self.put_json(&format!("/doctors/{id}"), input)
    }

    /// Hard delete. Doctors, unlike appointments, are removed outright.
    pub fn delete_doctor(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/doctors/{id}"))
    }
}
