//! IPC commands for the doctor directory screen.

use std::sync::Arc;

use tauri::State;

use crate::commands::state::AppState;
use crate::commands::ScreenError;
use crate::directory::{self, DoctorDraft};
use crate::models::Doctor;

/// Fetch the full doctor list and replace the directory snapshot with it.
#[tauri::command]
pub async fn list_doctors(state: State<'_, Arc<AppState>>) -> Result<Vec<Doctor>, ScreenError> {
    let app = Arc::clone(state.inner());
    let doctors = tauri::async_runtime::spawn_blocking(move || app.client().list_doctors())
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    *state.doctors.lock().map_err(|_| ScreenError::internal())? = doctors.clone();
    Ok(doctors)
}

/// Narrow the already-fetched snapshot. Pure and synchronous — typing in the
/// search box never re-queries the backend.
#[tauri::command]
pub fn filter_doctors(
    query: String,
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<Doctor>, ScreenError> {
    let doctors = state.doctors.lock().map_err(|_| ScreenError::internal())?;
    Ok(directory::filter_doctors(&doctors, &query))
}

#[tauri::command]
pub async fn get_doctor(id: i64, state: State<'_, Arc<AppState>>) -> Result<Doctor, ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || app.client().get_doctor(id))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)
}

#[tauri::command]
pub async fn create_doctor(
    draft: DoctorDraft,
    state: State<'_, Arc<AppState>>,
) -> Result<Doctor, ScreenError> {
    let input = draft.validate()?;

    let app = Arc::clone(state.inner());
    let created = tauri::async_runtime::spawn_blocking(move || app.client().create_doctor(&input))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id = created.id, "Doctor registered");
    Ok(created)
}

#[tauri::command]
pub async fn update_doctor(
    id: i64,
    draft: DoctorDraft,
    state: State<'_, Arc<AppState>>,
) -> Result<Doctor, ScreenError> {
    let input = draft.validate()?;

    let app = Arc::clone(state.inner());
    let updated = tauri::async_runtime::spawn_blocking(move || app.client().update_doctor(id, &input))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id, "Doctor updated");
    Ok(updated)
}

/// Hard delete, confirmed by the user in the webview first.
#[tauri::command]
pub async fn delete_doctor(id: i64, state: State<'_, Arc<AppState>>) -> Result<(), ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || app.client().delete_doctor(id))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)?;

    tracing::info!(id, "Doctor deleted");
    Ok(())
}
