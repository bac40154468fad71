//! User-facing error message mappings

use moodlog_http::{ApiError, ErrorKind};

/// Messages to surface for a normalized failure, one notification each.
///
/// Every failure maps to at least one message; a 422 with field errors fans
/// out to one message per field so forms can show what to fix.
pub fn describe_error(error: &ApiError) -> Vec<String> {
    match error.kind() {
        ErrorKind::Network => {
            vec!["Network error. Please check your connection and try again.".into()]
        }
        ErrorKind::Server => vec!["Server error. Please try again later.".into()],
        ErrorKind::Client => match error.status() {
            Some(401) => vec!["Session expired. Please log in again.".into()],
            Some(403) => {
                vec!["Access denied. You don't have permission to perform this action.".into()]
            }
            Some(404) => vec!["Resource not found.".into()],
            Some(422) if !error.field_errors().is_empty() => error
                .field_errors()
                .iter()
                .map(|field| format!("{}: {}", field.field, field.message))
                .collect(),
            Some(429) => vec!["Too many requests. Please slow down and try again.".into()],
            _ => vec![error.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlog_http::{ApiError, StatusCode};

    #[test]
    fn network_failures_get_the_connectivity_message() {
        let messages = describe_error(&ApiError::Network);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Network error"));
    }

    #[test]
    fn server_failures_get_the_retry_later_message() {
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(describe_error(&error), vec!["Server error. Please try again later."]);
    }

    #[test]
    fn known_client_statuses_get_specific_messages() {
        for (status, needle) in [
            (StatusCode::UNAUTHORIZED, "Session expired"),
            (StatusCode::FORBIDDEN, "Access denied"),
            (StatusCode::NOT_FOUND, "not found"),
            (StatusCode::TOO_MANY_REQUESTS, "Too many requests"),
        ] {
            let messages = describe_error(&ApiError::from_status(status, ""));
            assert_eq!(messages.len(), 1);
            assert!(messages[0].contains(needle), "{status}: {}", messages[0]);
        }
    }

    #[test]
    fn validation_failures_fan_out_per_field() {
        let body = r#"{"message":"Validation failed","errors":[
            {"field":"title","message":"Title is required"},
            {"field":"content","message":"Content is required"}]}"#;
        let error = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body);
        let messages = describe_error(&error);
        assert_eq!(
            messages,
            vec!["title: Title is required", "content: Content is required"]
        );
    }

    #[test]
    fn other_client_failures_surface_the_server_message() {
        let error = ApiError::from_status(StatusCode::CONFLICT, r#"{"message":"Username taken"}"#);
        assert_eq!(describe_error(&error), vec!["Username taken"]);
    }
}
