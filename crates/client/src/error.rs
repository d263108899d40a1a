//! Error types for the audit client.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during audit client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure: connection refused, TLS handshake,
    /// connection dropped mid-stream.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the audit service.
    #[error("API error ({status}) at {url}: {message}")]
    Remote {
        status: u16,
        url: String,
        message: String,
        /// Structured error body, if the response carried one.
        error: Option<ApiErrorBody>,
    },

    /// Response body was not valid JSON where JSON was expected.
    #[error("Invalid response format: {0}")]
    Decode(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Credentials could not be turned into request headers.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),
}

impl ClientError {
    /// The structured error kind, when the failure carried a parseable
    /// error body.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Remote {
                error: Some(body), ..
            } => Some(body.kind()),
            _ => None,
        }
    }

    /// The HTTP status, for remote failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error kind reported by the audit service, resolved from the `kind`
/// string of a structured error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    RecordNotFound,
    RecordExists,
    Forbidden,
    /// Any kind this client does not recognize.
    Other(String),
}

impl ErrorKind {
    fn from_str(kind: &str) -> Self {
        match kind {
            "RecordNotFound" => Self::RecordNotFound,
            "RecordExists" => Self::RecordExists,
            "Forbidden" => Self::Forbidden,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Structured error body returned by the audit service.
///
/// Bodies have the shape `{"error": {"kind": ..., "message": ..., "details": ...}}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

impl ApiErrorBody {
    /// Parse a response body into a structured error.
    ///
    /// Returns `None` if the body is not valid JSON or lacks the expected
    /// `{"error": {...}}` shape.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }

    /// Resolve the `kind` string to a known [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_str(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"error": {"kind": "RecordNotFound", "message": "a descriptive error message", "details": "details of the error"}}"#;

    #[test]
    fn test_from_body_parses_structured_error() {
        let error = ApiErrorBody::from_body(BODY).unwrap();
        assert_eq!(error.kind(), ErrorKind::RecordNotFound);
        assert_eq!(error.message, "a descriptive error message");
        assert_eq!(error.details, Some(serde_json::json!("details of the error")));
    }

    #[test]
    fn test_from_body_rejects_unparseable_input() {
        assert!(ApiErrorBody::from_body("something inappropriate").is_none());
        assert!(ApiErrorBody::from_body("").is_none());
        assert!(ApiErrorBody::from_body(r#"{"kind": "RecordNotFound"}"#).is_none());
    }

    #[test]
    fn test_unrecognized_kind_falls_back_to_other() {
        let error =
            ApiErrorBody::from_body(r#"{"error": {"kind": "SomethingNew", "message": "m"}}"#)
                .unwrap();
        assert_eq!(error.kind(), ErrorKind::Other("SomethingNew".to_string()));
    }

    #[test]
    fn test_error_kind_exposed_on_remote_error() {
        let err = ClientError::Remote {
            status: 404,
            url: "https://audit.example.com/".to_string(),
            message: "a descriptive error message".to_string(),
            error: ApiErrorBody::from_body(BODY),
        };
        assert_eq!(err.error_kind(), Some(ErrorKind::RecordNotFound));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_error_kind_absent_without_structured_body() {
        let err = ClientError::Remote {
            status: 500,
            url: "https://audit.example.com/".to_string(),
            message: "oops".to_string(),
            error: None,
        };
        assert_eq!(err.error_kind(), None);
    }
}
