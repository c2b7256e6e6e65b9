use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use crate::config::AppSettings;

/// HTTP client for the hospital REST backend.
///
/// Blocking on purpose: commands run it on `tauri::async_runtime::
/// spawn_blocking` threads, so the UI never waits on a socket. At most one
/// request is in flight per user-triggered action.
pub struct HospitalClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HospitalClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(&settings.api_base_url, settings.request_timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Is the backend reachable at all? Any HTTP response counts — a 404 on
    /// the bare base URL still means the service is up.
    pub fn probe(&self) -> bool {
        self.client.get(&self.base_url).send().is_ok()
    }

    // ── Request plumbing shared by the endpoint modules ─────────────────

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|e| self.transport_error(e))?;
        Self::read_json(response)
    }

    pub(super) fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|e| self.transport_error(e))?;
        Self::read_json(response)
    }

    pub(super) fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .map_err(|e| self.transport_error(e))?;
        Self::read_json(response)
    }

    pub(super) fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .patch(self.url(path))
            .send()
            .map_err(|e| self.transport_error(e))?;
        Self::read_json(response)
    }

    pub(super) fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .map_err(|e| self.transport_error(e))?;
        Self::check_status(response).map(|_| ())
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ApiError::Timeout(self.timeout_secs)
        } else {
            ApiError::Transport(e.to_string())
        }
    }

    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Backend {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn read_json<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, ApiError> {
        Self::check_status(response)?
            .json()
            .map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = HospitalClient::new("http://localhost:8080/api/", 30);
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/doctors/7"), "http://localhost:8080/api/doctors/7");
    }

    #[test]
    fn from_settings_uses_configured_url() {
        let settings = AppSettings {
            api_base_url: "http://hospital.internal/api".into(),
            request_timeout_secs: 5,
        };
        let client = HospitalClient::from_settings(&settings);
        assert_eq!(client.base_url(), "http://hospital.internal/api");
    }
}
