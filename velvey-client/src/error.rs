//! Client error types

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Body of a failed remote response, JSON where possible.
///
/// Remote services answer errors with either a JSON object or plain
/// text; a body that fails to parse as JSON is kept as raw text
/// instead of surfacing the parse failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Body parsed as JSON
    Json(serde_json::Value),
    /// Body kept as raw text
    Text(String),
}

impl ErrorBody {
    /// Parse a raw body, falling back to text when it is not JSON.
    pub fn from_raw(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(raw),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{}", value),
            ErrorBody::Text(text) => f.write_str(text),
        }
    }
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure, no usable response received
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote service answered with a non-2xx status
    #[error("{service} returned {status}: {body}")]
    RemoteService {
        /// Which hop failed ("worker" or "backend")
        service: &'static str,
        status: StatusCode,
        body: ErrorBody,
    },

    /// Response body was present but not the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_json() {
        let body = ErrorBody::from_raw(r#"{"error":"order not found"}"#.to_string());
        assert_eq!(
            body,
            ErrorBody::Json(serde_json::json!({"error": "order not found"}))
        );
    }

    #[test]
    fn test_error_body_text_fallback() {
        let body = ErrorBody::from_raw("upstream unavailable".to_string());
        assert_eq!(body, ErrorBody::Text("upstream unavailable".to_string()));
    }

    #[test]
    fn test_remote_service_display() {
        let err = ClientError::RemoteService {
            service: "worker",
            status: StatusCode::BAD_GATEWAY,
            body: ErrorBody::Text("boom".to_string()),
        };
        assert_eq!(format!("{}", err), "worker returned 502 Bad Gateway: boom");
    }
}
