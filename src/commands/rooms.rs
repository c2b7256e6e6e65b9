//! IPC commands for the examination-room screen. Rooms are read-only here;
//! provisioning happens on the backend side.

use std::sync::Arc;

use tauri::State;

use crate::commands::state::AppState;
use crate::commands::ScreenError;
use crate::models::Room;

#[tauri::command]
pub async fn list_rooms(state: State<'_, Arc<AppState>>) -> Result<Vec<Room>, ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || app.client().list_rooms())
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)
}

#[tauri::command]
pub async fn get_room(id: i64, state: State<'_, Arc<AppState>>) -> Result<Room, ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || app.client().get_room(id))
        .await
        .map_err(ScreenError::task_failure)?
        .map_err(ScreenError::backend)
}
