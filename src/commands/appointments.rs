//! IPC commands for the appointment list and booking screens.
//!
//! Fetches run on blocking threads; results are committed through the
//! [`AppointmentListState`] token guard, so a superseded search can never
//! overwrite a newer table.
//!
//! [`AppointmentListState`]: crate::booking::AppointmentListState

use std::sync::Arc;

use tauri::State;

use crate::booking::{AppointmentDraft, AppointmentQuery, TableState};
use crate::commands::state::AppState;
use crate::commands::ScreenError;
use crate::models::Appointment;

/// Run the appointment search for the given filter selections.
///
/// Exactly one backend lookup is issued per call (doctor filter wins over
/// room filter, else by date). Returns the table the screen should render —
/// which is the newer search's table if this one arrived stale.
#[tauri::command]
pub async fn search_appointments(
    query: AppointmentQuery,
    state: State<'_, Arc<AppState>>,
) -> Result<TableState, ScreenError> {
    let token = {
        let mut list = state
            .appointments
            .lock()
            .map_err(|_| ScreenError::internal())?;
        list.begin(query)
    };

    let app = Arc::clone(state.inner());
    let outcome = tauri::async_runtime::spawn_blocking(move || query.run(&app.client()))
        .await
        .map_err(ScreenError::task_failure)?;

    let mut list = state
        .appointments
        .lock()
        .map_err(|_| ScreenError::internal())?;
    list.apply(token, outcome);
    Ok(list.table.clone())
}

/// The "show all appointments" reset: bypasses the date filter entirely and
/// clears the doctor and room selections as a side effect.
#[tauri::command]
pub async fn load_all_appointments(
    state: State<'_, Arc<AppState>>,
) -> Result<TableState, ScreenError> {
    let token = {
        let mut list = state
            .appointments
            .lock()
            .map_err(|_| ScreenError::internal())?;
        list.begin_show_all()
    };

    let app = Arc::clone(state.inner());
    let outcome = tauri::async_runtime::spawn_blocking(move || app.client().list_appointments())
        .await
        .map_err(ScreenError::task_failure)?;

    let mut list = state
        .appointments
        .lock()
        .map_err(|_| ScreenError::internal())?;
    list.apply(token, outcome);
    Ok(list.table.clone())
}

/// Single appointment for the edit screen.
#[tauri::command]
pub async fn get_appointment(
    id: i64,
    state: State<'_, Arc<AppState>>,
) -> Result<Appointment, ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || app.client().get_appointment(id))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)
}

/// Book a new appointment. The draft is validated locally (every reference
/// present, date and time composed into one instant); on a validation error
/// no network call is issued.
#[tauri::command]
pub async fn create_appointment(
    draft: AppointmentDraft,
    state: State<'_, Arc<AppState>>,
) -> Result<Appointment, ScreenError> {
    let input = draft.validate()?;

    let app = Arc::clone(state.inner());
    let created = tauri::async_runtime::spawn_blocking(move || app.client().create_appointment(&input))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id = created.id, at = %created.scheduled_at, "Appointment booked");
    Ok(created)
}

/// Reschedule or reassign an existing appointment. Same local validation as
/// [`create_appointment`].
#[tauri::command]
pub async fn update_appointment(
    id: i64,
    draft: AppointmentDraft,
    state: State<'_, Arc<AppState>>,
) -> Result<Appointment, ScreenError> {
    let input = draft.validate()?;

    let app = Arc::clone(state.inner());
    let updated =
        tauri::async_runtime::spawn_blocking(move || app.client().update_appointment(id, &input))
            .await
            .map_err(ScreenError::task_failure)?
            .map_err(ScreenError::backend)?;

    tracing::info!(id, at = %updated.scheduled_at, "Appointment updated");
    Ok(updated)
}

/// Soft cancel: the backend flips `active` to false; the record remains
/// retrievable by id. There is no undo.
#[tauri::command]
pub async fn cancel_appointment(
    id: i64,
    state: State<'_, Arc<AppState>>,
) -> Result<Appointment, ScreenError> {
    let app = Arc::clone(state.inner());
    let cancelled = tauri::async_runtime::spawn_blocking(move || app.client().cancel_appointment(id))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id, "Appointment cancelled");
    Ok(cancelled)
}
