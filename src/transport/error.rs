use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request/response exchange with the control plane.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request value could not be serialized.
    #[error("marshal request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP request could not be built (bad URL or header value).
    #[error("create request: {0}")]
    Request(String),

    /// The exchange failed before a complete response was obtained.
    #[error("send request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a status other than 200.
    #[error("unexpected status code: {status} (message: {message:?})")]
    Remote { status: StatusCode, message: String },

    /// The response body does not match the expected schema.
    #[error("unmarshal response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a remote error, `None` for every other kind.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message extracted from a remote error body.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ClientError::Remote { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}
