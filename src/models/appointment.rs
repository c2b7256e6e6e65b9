use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled consultation linking one doctor, one room, one patient, and
/// one instant in time.
///
/// The display fields (doctor/room/patient names) are denormalized by the
/// backend join and present on read paths only; they are never written back.
/// `active` is the only cancellation state — appointments are soft-cancelled,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub room_id: i64,
    pub patient_id: i64,
    /// Combined date+time of the consultation, RFC 3339 UTC on the wire.
    pub scheduled_at: DateTime<Utc>,
    pub active: bool,

    // Display fields from the backend join, read paths only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_paternal_surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_maternal_surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_surname: Option<String>,
}

/// Write payload for appointment create/update.
///
/// `scheduled_at` is only ever produced by `booking::compose_schedule` — the
/// two picker values are merged before anything crosses the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    pub doctor_id: i64,
    pub room_id: i64,
    pub patient_id: i64,
    pub scheduled_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn appointment_deserializes_backend_row() {
        let json = r#"{
            "id": 42,
            "doctorId": 7,
            "roomId": 3,
            "patientId": 19,
            "scheduledAt": "2024-03-15T14:30:00Z",
            "active": true,
            "doctorName": "Ana",
            "doctorPaternalSurname": "Garcia",
            "doctorSpecialty": "Cardiology",
            "roomNumber": 101,
            "roomFloor": 1,
            "patientName": "Luis",
            "patientSurname": "Hernandez"
        }"#;

        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.id, 42);
        assert_eq!(appt.doctor_id, 7);
        assert!(appt.active);
        assert_eq!(
            appt.scheduled_at,
            Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap()
        );
        assert_eq!(appt.doctor_paternal_surname.as_deref(), Some("Garcia"));
        assert_eq!(appt.room_number, Some(101));
    }

    #[test]
    fn appointment_tolerates_missing_display_fields() {
        let json = r#"{
            "id": 1,
            "doctorId": 2,
            "roomId": 3,
            "patientId": 4,
            "scheduledAt": "2024-06-01T09:00:00Z",
            "active": false
        }"#;

        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert!(!appt.active);
        assert!(appt.doctor_name.is_none());
        assert!(appt.room_number.is_none());
    }

    #[test]
    fn input_serializes_absolute_timestamp() {
        let input = AppointmentInput {
            doctor_id: 7,
            room_id: 3,
            patient_id: 19,
            scheduled_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["doctorId"], 7);
        // Unambiguous absolute timestamp, never a bare local date/time pair.
        assert_eq!(json["scheduledAt"], "2024-03-15T14:30:00Z");
    }
}
