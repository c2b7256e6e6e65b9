use std::sync::Mutex;

use chrono::Local;

use crate::api::HospitalClient;
use crate::booking::AppointmentListState;
use crate::config::{AppSettings, UiConfig};
use crate::models::{Doctor, Patient};

/// Global application state managed by Tauri.
///
/// The only shared mutable state is the in-memory lists the screens display;
/// each is wholly replaced (never merged) on a successful fetch. Settings
/// and `UiConfig` are read-only after construction.
pub struct AppState {
    settings: AppSettings,
    pub ui: UiConfig,
    /// Appointment list screen: filters, table, and the request token guard.
    pub appointments: Mutex<AppointmentListState>,
    /// Directory snapshots the filter commands narrow without re-querying.
    pub doctors: Mutex<Vec<Doctor>>,
    pub patients: Mutex<Vec<Patient>>,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            ui: UiConfig::standard(),
            appointments: Mutex::new(AppointmentListState::new(Local::now().date_naive())),
            doctors: Mutex::new(Vec::new()),
            patients: Mutex::new(Vec::new()),
            settings,
        }
    }

    /// Factory for backend clients. Every command goes through here so the
    /// whole application shares one base URL and timeout configuration.
    pub fn client(&self) -> HospitalClient {
        HospitalClient::from_settings(&self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::TableState;

    #[test]
    fn new_state_starts_with_empty_snapshots() {
        let state = AppState::new(AppSettings::default());
        assert!(state.doctors.lock().unwrap().is_empty());
        assert!(state.patients.lock().unwrap().is_empty());
        assert_eq!(state.appointments.lock().unwrap().table, TableState::Loading);
    }

    #[test]
    fn appointment_filters_default_to_today() {
        let state = AppState::new(AppSettings::default());
        let list = state.appointments.lock().unwrap();
        assert_eq!(list.filters.date, Local::now().date_naive());
        assert_eq!(list.filters.doctor_id, None);
        assert_eq!(list.filters.room_id, None);
    }

    #[test]
    fn client_uses_configured_backend() {
        let state = AppState::new(AppSettings {
            api_base_url: "http://hospital.internal/api".into(),
            request_timeout_secs: 5,
        });
        assert_eq!(state.client().base_url(), "http://hospital.internal/api");
    }
}
