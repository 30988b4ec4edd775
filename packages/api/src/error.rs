use thiserror::Error;

/// Failure of a request that never produced a usable response envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or body decoding failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}{}", suffix(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("invalid API base URL {0:?}")]
    BaseUrl(String),
    #[error("user id is required")]
    MissingId,
    /// The backend could not be reached at all.
    #[error("{0}")]
    Unavailable(String),
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// Message the backend put in the error body, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}
