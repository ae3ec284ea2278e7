//! Typed errors for Content Hub API calls.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error produced by Content Hub API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout, or other transport-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the JSON shape the call required.
    #[error("failed to parse JSON response: {source}. body preview: {preview}")]
    Json {
        #[source]
        source: serde_json::Error,
        preview: String,
    },

    /// A configured base URL failed validation.
    #[error("{0}")]
    InvalidBaseUrl(String),

    /// Adapter settings failed validation before any network use.
    #[error("invalid settings: {0}")]
    Settings(String),
}

impl ApiError {
    /// Whether the error is an authentication or authorization rejection.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Status { status, .. } if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Parse a response body as the required JSON shape.
///
/// Failures carry the serde error plus a truncated preview of the body to
/// aid debugging truncated or malformed payloads.
pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|source| ApiError::Json {
        source,
        preview: truncate_body_preview(text, 200),
    })
}

/// Collapse whitespace and truncate a response body for error messages.
pub(crate) fn truncate_body_preview(text: &str, limit: usize) -> String {
    if text.trim().is_empty() {
        return "<empty>".to_string();
    }

    let mut preview = String::new();
    for ch in text.chars() {
        if preview.len() >= limit {
            preview.push_str("...");
            break;
        }
        match ch {
            '\n' | '\r' | '\t' => {
                if !preview.ends_with(' ') {
                    preview.push(' ');
                }
            }
            _ => preview.push(ch),
        }
    }

    preview.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn is_auth_covers_unauthorized_and_forbidden() {
        let unauthorized = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "no".into(),
        };
        let forbidden = ApiError::Status {
            status: StatusCode::FORBIDDEN,
            body: "no".into(),
        };
        let server_error = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        assert!(unauthorized.is_auth());
        assert!(forbidden.is_auth());
        assert!(!server_error.is_auth());
        assert!(!ApiError::Settings("clientId is required".into()).is_auth());
    }

    #[test]
    fn parse_json_failure_carries_a_body_preview() {
        let err = parse_json::<Value>("<html>not json</html>").unwrap_err();
        let ApiError::Json { preview, .. } = &err else {
            panic!("expected Json error, got {err:?}");
        };
        assert_eq!(preview, "<html>not json</html>");
    }

    #[test]
    fn preview_collapses_whitespace_and_truncates() {
        let long_body = format!("line one\n\tline two {}", "x".repeat(400));
        let preview = truncate_body_preview(&long_body, 200);
        assert!(preview.starts_with("line one line two"));
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= 204);

        assert_eq!(truncate_body_preview("   \n ", 200), "<empty>");
    }
}
