use mesas_core::error::CoreError;

/// Errors surfaced by the client flows.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Invalid(String),
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ClientError::Invalid(msg),
            other => ClientError::Invalid(other.to_string()),
        }
    }
}

impl ClientError {
    /// Whether the API reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Text shown to the user when a command fails.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Request(_) => {
                format!("Could not reach the API. Check that the backend is running. ({self})")
            }
            other => other.to_string(),
        }
    }
}
