//! Shared error types and failure classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body returned by the backend.
///
/// Validation and permission errors come back as `{"detail": "..."}`; some
/// endpoints add a `title`. Both fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Attempt to parse a JSON error body into a human-readable message.
/// Prefers `detail`, falls back to `title`.
pub fn try_problem_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ProblemDetails>(body).ok()?;
    [parsed.detail, parsed.title]
        .into_iter()
        .flatten()
        .find(|msg| !msg.trim().is_empty())
}

/// Category of an expected remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// No session token was available, so no request was sent.
    MissingToken,
    Unauthorized,
    Forbidden,
    NotFound,
    Invalid,
    Conflict,
    Server,
    Unknown,
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 422 => Self::Invalid,
            409 => Self::Conflict,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }
}

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Missing session token")]
    MissingToken,
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// The expected-failure category, or `None` for transport failures.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ApiError::MissingToken => Some(FailureKind::MissingToken),
            ApiError::Http { status, .. } => Some(FailureKind::from_status(*status)),
            ApiError::Network(_) | ApiError::Deserialize(_) => None,
        }
    }

    /// Best message for diagnostics, using the error body when it has one.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Http { body, .. } => try_problem_detail(body).unwrap_or_else(|| self.to_string()),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_detail_prefers_detail_over_title() {
        let body = r#"{"title": "Bad Request", "detail": "Name is required"}"#;
        assert_eq!(try_problem_detail(body).as_deref(), Some("Name is required"));

        let body = r#"{"title": "Not Found", "detail": "  "}"#;
        assert_eq!(try_problem_detail(body).as_deref(), Some("Not Found"));

        assert_eq!(try_problem_detail("<html>oops</html>"), None);
        assert_eq!(try_problem_detail("{}"), None);
    }

    #[test]
    fn expected_failures_are_classified() {
        assert_eq!(ApiError::MissingToken.failure_kind(), Some(FailureKind::MissingToken));
        let not_found = ApiError::Http { status: 404, body: String::new() };
        assert_eq!(not_found.failure_kind(), Some(FailureKind::NotFound));
        let server = ApiError::Http { status: 502, body: String::new() };
        assert_eq!(server.failure_kind(), Some(FailureKind::Server));
    }

    #[test]
    fn transport_failures_have_no_kind() {
        assert_eq!(ApiError::Network("reset".to_string()).failure_kind(), None);
        assert_eq!(ApiError::Deserialize("eof".to_string()).failure_kind(), None);
    }

    #[test]
    fn detail_uses_error_body() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"detail": "User does not exist"}"#.to_string(),
        };
        assert_eq!(err.detail(), "User does not exist");
        assert_eq!(ApiError::MissingToken.detail(), "Missing session token");
    }
}
