//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Shown when `submit` is called with nothing selected.
pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

/// Shown for any HTTP or network failure.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Error processing the file. Please ensure the backend server is running and try again.";

/// Shown when the backend answered 2xx with a body we cannot use.
pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "The summarization backend returned an unexpected response.";

#[derive(Error, Debug)]
pub enum DomainError {
    /// Local precondition failed; no request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Non-2xx status (`status` set) or network failure (`status` is None).
    #[error("Transport error: {detail}")]
    Transport { status: Option<u16>, detail: String },

    /// 2xx body that does not match the response schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("File error: {0}")]
    File(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The submission was replaced by a newer one; its outcome is discarded.
    #[error("Submission #{0} superseded by a newer request")]
    Superseded(u64),

    /// The submission was aborted by the user before it resolved.
    #[error("Submission #{0} cancelled")]
    Cancelled(u64),

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    pub fn transport_status(status: u16, detail: impl Into<String>) -> Self {
        Self::Transport {
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            detail: detail.into(),
        }
    }

    /// HTTP status carried by a transport error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Message stored in the view state for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Transport { .. } => TRANSPORT_FAILURE_MESSAGE.to_string(),
            Self::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_is_fixed() {
        let http = DomainError::transport_status(500, "HTTP 500: boom");
        let net = DomainError::network("connection refused");

        assert_eq!(http.user_message(), TRANSPORT_FAILURE_MESSAGE);
        assert_eq!(net.user_message(), TRANSPORT_FAILURE_MESSAGE);
        assert_eq!(http.status(), Some(500));
        assert_eq!(net.status(), None);
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = DomainError::Validation(NO_FILE_MESSAGE.to_string());
        assert_eq!(err.user_message(), "Please select a file first.");
        assert_eq!(err.to_string(), "Validation failed: Please select a file first.");
    }

    #[test]
    fn test_malformed_message() {
        let err = DomainError::MalformedResponse("missing field `summary`".to_string());
        assert_eq!(err.user_message(), MALFORMED_RESPONSE_MESSAGE);
        assert!(err.to_string().contains("missing field `summary`"));
    }
}
