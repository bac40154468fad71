//! Normalized client errors

use serde::Deserialize;
use thiserror::Error;

/// Fixed user-facing message for failures where no response arrived at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Coarse failure class, mirrored by the UI notification layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    Client,
}

/// One entry per failed validation field on a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Normalized API failure.
///
/// Every rejected request resolves to exactly one of these; the underlying
/// transport error never escapes to callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received: offline, DNS failure, timeout.
    #[error("{NETWORK_ERROR_MESSAGE}")]
    Network,

    /// The server answered with a 5xx status.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The server answered with a 4xx status (including a 401 that the
    /// refresh pipeline could not recover).
    #[error("{message}")]
    Client {
        status: u16,
        message: String,
        fields: Vec<FieldError>,
    },

    /// Client-side misuse, before any request was sent.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Error payload shape the MoodLog API uses for non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Classify an HTTP error response, pulling a human-readable message out
    /// of the body when the server provided one.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        if status.is_server_error() {
            Self::Server {
                status: status.as_u16(),
                message,
            }
        } else {
            Self::Client {
                status: status.as_u16(),
                message,
                fields: parsed.errors.unwrap_or_default(),
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network => ErrorKind::Network,
            Self::Server { .. } => ErrorKind::Server,
            Self::Client { .. } | Self::Configuration(_) => ErrorKind::Client,
        }
    }

    /// Numeric HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Client { status, .. } => Some(*status),
            Self::Network | Self::Configuration(_) => None,
        }
    }

    /// True for a 401 that survived the refresh pipeline, meaning the
    /// session could not be recovered.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Client { status: 401, .. })
    }

    /// Per-field validation failures carried by a 422 response.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Client { fields, .. } => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn server_statuses_classify_as_server_errors() {
        let error = ApiError::from_status(StatusCode::BAD_GATEWAY, r#"{"message":"upstream down"}"#);
        assert_eq!(error.kind(), ErrorKind::Server);
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.to_string(), "Server error 502: upstream down");
    }

    #[test]
    fn client_statuses_keep_the_server_message() {
        let error = ApiError::from_status(StatusCode::NOT_FOUND, r#"{"message":"No entry for this date"}"#);
        assert_eq!(error.kind(), ErrorKind::Client);
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.to_string(), "No entry for this date");
    }

    #[test]
    fn non_json_bodies_fall_back_to_the_generic_message() {
        let error = ApiError::from_status(StatusCode::BAD_REQUEST, "<html>nope</html>");
        assert_eq!(error.to_string(), "An unexpected error occurred");
        assert!(error.field_errors().is_empty());
    }

    #[test]
    fn validation_errors_carry_one_entry_per_field() {
        let body = r#"{"message":"Validation failed","errors":[
            {"field":"title","message":"Title is required"},
            {"field":"category","message":"Unknown category"}]}"#;
        let error = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(error.status(), Some(422));
        let fields = error.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "title");
        assert_eq!(fields[1].message, "Unknown category");
    }

    #[test]
    fn only_unrecovered_401s_read_as_unauthorized() {
        assert!(ApiError::from_status(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(!ApiError::from_status(StatusCode::FORBIDDEN, "").is_unauthorized());
        assert!(!ApiError::Network.is_unauthorized());
    }
}
