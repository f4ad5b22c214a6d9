//! Hebcal client error types.

/// Errors from the Hebcal HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum HebcalError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl HebcalError {
    /// Whether this error means the provider itself failed us, as opposed to
    /// us failing to make sense of what it sent.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, HebcalError::Http(_) | HebcalError::Api { .. })
    }
}

impl From<serde_json::Error> for HebcalError {
    fn from(err: serde_json::Error) -> Self {
        HebcalError::Json {
            message: err.to_string(),
            body: None,
        }
    }
}
