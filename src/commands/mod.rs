pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod rooms;
pub mod state;

use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::api::ApiError;
use crate::booking::FieldError;
use crate::config::UiConfig;
use self::state::AppState;

/// Shown when the failure is ours rather than the backend's (poisoned lock,
/// dead worker thread). Still generic; detail goes to the log.
const INTERNAL_NOTICE: &str = "Something went wrong. Please try again.";

/// Error surface of every IPC command. Serialized with a `kind` tag so the
/// webview routes `validation` inline next to the offending field and
/// `backend` to a screen-level notice. Nothing technical crosses this
/// boundary, and nothing is swallowed: every failure is logged here or at
/// the call site.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScreenError {
    #[error("{0}")]
    Validation(FieldError),
    #[error("{notice}")]
    Backend { notice: String },
}

impl ScreenError {
    pub(crate) fn backend(err: ApiError) -> Self {
        tracing::warn!(error = %err, "Backend request failed");
        Self::Backend {
            notice: err.user_notice().to_string(),
        }
    }

    pub(crate) fn task_failure(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "Background task failed");
        Self::Backend {
            notice: INTERNAL_NOTICE.to_string(),
        }
    }

    pub(crate) fn internal() -> Self {
        tracing::error!("Application state lock poisoned");
        Self::Backend {
            notice: INTERNAL_NOTICE.to_string(),
        }
    }
}

impl From<FieldError> for ScreenError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err)
    }
}

/// Health check IPC command — verifies the Rust side is running.
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Backend reachability for the status indicator in the shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendStatus {
    pub reachable: bool,
    pub base_url: String,
}

/// Probe the hospital backend so the shell can show whether the screens
/// will be able to load anything before the user navigates into one.
#[tauri::command]
pub async fn check_backend_status(
    state: State<'_, Arc<AppState>>,
) -> Result<BackendStatus, ScreenError> {
    let app = Arc::clone(state.inner());
    tauri::async_runtime::spawn_blocking(move || {
        let client = app.client();
        BackendStatus {
            reachable: client.probe(),
            base_url: client.base_url().to_string(),
        }
    })
    .await
    .map_err(ScreenError::task_failure)
}

/// The immutable theme + navigation object, built once at startup.
#[tauri::command]
pub fn get_ui_config(state: State<'_, Arc<AppState>>) -> UiConfig {
    state.ui.clone()
}
