use serde::Serialize;

/// Application-level constants
pub const APP_NAME: &str = "Citadesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL of the hospital REST backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default per-request timeout for backend calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info,citadesk_lib=debug".to_string()
}

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the hospital REST backend (CITADESK_API_URL).
    pub api_base_url: String,
    /// Per-request timeout in seconds (CITADESK_HTTP_TIMEOUT_SECS).
    pub request_timeout_secs: u64,
}

impl AppSettings {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("CITADESK_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout_secs = std::env::var("CITADESK_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            api_base_url,
            request_timeout_secs,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Process-wide UI configuration: theme palette and navigation layout.
///
/// Built once at startup, managed as Tauri state, and served read-only to
/// the webview through `get_ui_config`. Never mutated after construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    pub app_name: &'static str,
    pub theme: Theme,
    pub navigation: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub mode: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

/// One sidebar entry: display label and webview route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
}

impl UiConfig {
    pub fn standard() -> Self {
        Self {
            app_name: APP_NAME,
            theme: Theme {
                mode: "light",
                primary: "#1976d2",
                secondary: "#9c27b0",
                success: "#2e7d32",
                error: "#d32f2f",
            },
            navigation: vec![
                NavItem {
                    label: "Home",
                    route: "/",
                    icon: "home",
                },
                NavItem {
                    label: "Appointments",
                    route: "/appointments",
                    icon: "event",
                },
                NavItem {
                    label: "Doctors",
                    route: "/doctors",
                    icon: "medical_services",
                },
                NavItem {
                    label: "Patients",
                    route: "/patients",
                    icon: "people",
                },
                NavItem {
                    label: "Rooms",
                    route: "/rooms",
                    icon: "meeting_room",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_local_backend() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8080/api");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn ui_config_lists_every_screen() {
        let ui = UiConfig::standard();
        let routes: Vec<&str> = ui.navigation.iter().map(|n| n.route).collect();
        assert_eq!(
            routes,
            vec!["/", "/appointments", "/doctors", "/patients", "/rooms"]
        );
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
