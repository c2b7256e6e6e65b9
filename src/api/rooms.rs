use super::client::HospitalClient;
use super::error::ApiError;
use crate::models::Room;

impl HospitalClient {
    pub fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get_json("/rooms")
    }

    pub fn get_room(&self, id: i64) -> Result<Room, ApiError> {
        self.get_json(&format!("/rooms/{id}"))
    }
}
