//! IPC commands for the patient directory screen. `create_patient` is also
//! reachable from the booking screen's quick-create dialog.

use std::sync::Arc;

use tauri::State;

use crate::commands::state::AppState;
use crate::commands::ScreenError;
use crate::directory::{self, PatientDraft};
use crate::models::Patient;

/// Fetch the full patient list and replace the directory snapshot with it.
#[tauri::command]
pub async fn list_patients(state: State<'_, Arc<AppState>>) -> Result<Vec<Patient>, ScreenError> {
    let app = Arc::clone(state.inner());
    let patients = tauri::async_runtime::spawn_blocking(move || app.client().list_patients())
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    *state.patients.lock().map_err(|_| ScreenError::internal())? = patients.clone();
    Ok(patients)
}

/// Narrow the already-fetched snapshot. Pure and synchronous — typing in the
/// search box never re-queries the backend.
#[tauri::command]
pub fn filter_patients(
    query: String,
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<Patient>, ScreenError> {
    let patients = state.patients.lock().map_err(|_| ScreenError::internal())?;
    Ok(directory::filter_patients(&patients, &query))
}

#[tauri::command]
pub async fn get_patient(id: i64, state: State<'_, Arc<AppState>>) -> Result<Patient, ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || app.client().get_patient(id))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)
}

#[tauri::command]
pub async fn create_patient(
    draft: PatientDraft,
    state: State<'_, Arc<AppState>>,
) -> Result<Patient, ScreenError> {
    let input = draft.validate()?;

    let app = Arc::clone(state.inner());
    let created = tauri::async_runtime::spawn_blocking(move || app.client().create_patient(&input))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id = created.id, "Patient registered");
    Ok(created)
}

#[tauri::command]
pub async fn update_patient(
    id: i64,
    draft: PatientDraft,
    state: State<'_, Arc<AppState>>,
) -> Result<Patient, ScreenError> {
    let input = draft.validate()?;

    let app = Arc::clone(state.inner());
    let updated = tauri::async_runtime::spawn_blocking(move || app.client().update_patient(id, &input))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id, "Patient updated");
    Ok(updated)
}

/// Hard delete, confirmed by the user in the webview first.
#[tauri::command]
pub async fn delete_patient(id: i64, state: State<'_, Arc<AppState>>) -> Result<(), ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || app.client().delete_patient(id))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id, "Patient deleted");
    Ok(())
}
