use thiserror::Error;

/// Failures crossing the backend boundary.
///
/// Technical detail stays in the variant (for logs); screens display
/// `user_notice()` instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Cannot reach the hospital backend at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Malformed response from backend: {0}")]
    ResponseParsing(String),

    #[error("HTTP transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Generic, non-technical notice shown to the user. Screens add their
    /// own context ("appointments", "doctors"); the failure cause never
    /// leaks into the UI.
    pub fn user_notice(&self) -> &'static str {
        "Could not load the data. Please try again."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_notice_never_leaks_detail() {
        let err = ApiError::Backend {
            status: 500,
            body: "java.lang.NullPointerException at CitaServiceImpl".into(),
        };
        assert!(!err.user_notice().contains("500"));
        assert!(!err.user_notice().contains("Exception"));
    }
}
