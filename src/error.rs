//! Error types for the request pipeline.
//!
//! Two failure shapes exist: the transport never reached a response
//! (`TransportFailure`), or a response arrived with a non-2xx status
//! (`StatusError`). Both surface to callers through `RequestError`;
//! nothing is ever swallowed.

use serde_json::Value;
use thiserror::Error;

/// Network-level failure reported by the transport before any response
/// descriptor existed (connect error, timeout, DNS, ...). The message is
/// surfaced verbatim from the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{err_msg}")]
pub struct TransportFailure {
    pub err_msg: String,
}

impl TransportFailure {
    pub fn new(err_msg: impl Into<String>) -> Self {
        Self {
            err_msg: err_msg.into(),
        }
    }
}

/// Classified rejection for a response outside [200, 300).
///
/// Carries the numeric status, the transport's status message (or the
/// generic fallback when it was empty), and the raw response payload.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("http status {status_code}: {err_msg}")]
pub struct StatusError {
    pub status_code: u16,
    pub err_msg: String,
    /// Server-supplied body, untouched.
    pub data: Value,
}

/// Any failure a request can settle with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The transport never produced a response.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportFailure),
    /// The response arrived with a non-2xx status.
    #[error(transparent)]
    Status(#[from] StatusError),
}

impl RequestError {
    /// HTTP status code, when a response was actually received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => None,
            Self::Status(err) => Some(err.status_code),
        }
    }

    /// The underlying error message, whichever side it came from.
    pub fn err_msg(&self) -> &str {
        match self {
            Self::Transport(failure) => &failure.err_msg,
            Self::Status(err) => &err.err_msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transport_failure_displays_raw_message() {
        let err = RequestError::from(TransportFailure::new("request:fail timeout"));
        assert_eq!(err.to_string(), "transport failure: request:fail timeout");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.err_msg(), "request:fail timeout");
    }

    #[test]
    fn status_error_carries_code_and_data() {
        let err = RequestError::from(StatusError {
            status_code: 404,
            err_msg: "request failed".to_string(),
            data: json!({"detail": "missing"}),
        });
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "http status 404: request failed");
    }
}
