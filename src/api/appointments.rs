use chrono::NaiveDate;

use super::client::HospitalClient;
use super::error::ApiError;
use crate::booking::AppointmentLookup;
use crate::models::{Appointment, AppointmentInput};

impl HospitalClient {
    /// Every appointment in the system, regardless of date.
    pub fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("/appointments")
    }

    pub fn get_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        self.get_json(&format!("/appointments/{id}"))
    }

    pub fn create_appointment(&self, input: &AppointmentInput) -> Result<Appointment, ApiError> {
        self.post_json("/appointments", input)
    }

    pub fn update_appointment(
        &self,
        id: i64,
        input: &AppointmentInput,
    ) -> Result<Appointment, ApiError> {
        self.put_json(&format!("/appointments/{id}"), input)
    }

    /// Soft cancel: flips `active` to false on the backend. The record stays
    /// retrievable by id; there is no hard delete for appointments.
    pub fn cancel_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        self.patch_json(&format!("/appointments/{id}/cancel"))
    }
}

/// The three date-scoped lookups behind the list screen. Dates travel as
/// `YYYY-MM-DD` path segments.
impl AppointmentLookup for HospitalClient {
    fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!("/appointments/date/{date}"))
    }

    fn appointments_for_doctor(
        &self,
        doctor_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!("/appointments/doctor/{doctor_id}/date/{date}"))
    }

    fn appointments_for_room(
        &self,
        room_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!("/appointments/room/{room_id}/date/{date}"))
    }
}
