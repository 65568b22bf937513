use thiserror::Error;

/// Errors raised while talking to the remote players API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to make http request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote API answered {status} to {operation}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    #[error("malformed response body from {operation}: {reason}")]
    MalformedBody {
        operation: &'static str,
        reason: String,
    },

    #[error("invalid remote API base URL `{0}`")]
    InvalidBaseUrl(String),
}
