//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API operation resolves to one of these variants. HTTP status
//! classes map onto variants in `from_status`; the backend's `detail`
//! message is carried along so write flows can show it verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401/403: the credential is missing, expired, or rejected.
    #[error("unauthorized{}", detail_suffix(.0))]
    Unauthorized(Option<String>),
    /// 404: the requested record does not exist.
    #[error("not found{}", detail_suffix(.0))]
    NotFound(Option<String>),
    /// 5xx: the backend failed to handle the request.
    #[error("server error {status}{}", detail_suffix(.detail))]
    Server { status: u16, detail: Option<String> },
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Backend-reported rejection (other 4xx) or an undecodable payload.
    #[error("validation error: {message}")]
    Validation { message: String, from_backend: bool },
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Extract the string `detail` field from a backend error body.
///
/// Structured details (e.g. per-field validation lists) are not shown to
/// users and yield `None`.
pub(crate) fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

impl ApiError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        match status {
            401 | 403 => Self::Unauthorized(detail),
            404 => Self::NotFound(detail),
            500..=599 => Self::Server { status, detail },
            _ => match detail {
                Some(message) => Self::Validation { message, from_backend: true },
                None => Self::Validation {
                    message: format!("request rejected with status {status}"),
                    from_backend: false,
                },
            },
        }
    }

    /// A response body that did not match the expected record.
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::Validation { message: format!("unexpected response payload: {err}"), from_backend: false }
    }

    /// Message reported by the backend itself, if any.
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(detail) | Self::NotFound(detail) | Self::Server { detail, .. } => detail.as_deref(),
            Self::Validation { message, from_backend: true } => Some(message),
            Self::Validation { from_backend: false, .. } | Self::Network(_) => None,
        }
    }

    /// User-facing text: the backend's message verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_detail().unwrap_or(fallback).to_owned()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
