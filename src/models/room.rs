use serde::{Deserialize, Serialize};

/// Examination room. Read-only from this application: rooms are provisioned
/// on the backend side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub number: i32,
    pub floor: i32,
    pub room_type: Option<String>,
    pub available: Option<bool>,
}
