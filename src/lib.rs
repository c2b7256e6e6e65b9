pub mod api; // Typed client for the hospital REST backend
pub mod booking; // Appointment search + booking-form logic
pub mod commands;
pub mod config;
pub mod directory; // Doctor/patient directory filtering + forms
pub mod models;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Citadesk starting v{}", config::APP_VERSION);

    let settings = config::AppSettings::from_env();
    tracing::info!(api = %settings.api_base_url, "Hospital backend configured");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(Arc::new(commands::state::AppState::new(settings)))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::check_backend_status,
            commands::get_ui_config,
            // Appointment list + booking screens
            commands::appointments::search_appointments,
            commands::appointments::load_all_appointments,
            commands::appointments::get_appointment,
            commands::appointments::create_appointment,
            commands::appointments::update_appointment,
            commands::appointments::cancel_appointment,
            // Doctor directory
            commands::doctors::list_doctors,
            commands::doctors::filter_doctors,
            commands::doctors::get_doctor,
            commands::doctors::create_doctor,
            commands::doctors::update_doctor,
            commands::doctors::delete_doctor,
            // Patient directory
            commands::patients::list_patients,
            commands::patients::filter_patients,
            commands::patients::get_patient,
            commands::patients::create_patient,
            commands::patients::update_patient,
            commands::patients::delete_patient,
            // Examination rooms
            commands::rooms::list_rooms,
            commands::rooms::get_room,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Citadesk")
}
