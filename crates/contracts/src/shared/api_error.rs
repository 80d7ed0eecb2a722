//! Errors surfaced by the HTTP client layer

use serde::Deserialize;
use thiserror::Error;

use crate::shared::validation::ValidationErrors;

/// Error body returned by the API on 4xx/5xx
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub field_errors: Vec<FieldErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldErrorBody {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorBody {
    /// Best-effort parse; non-JSON bodies yield `None`
    pub fn parse(body: &str) -> Option<ErrorBody> {
        serde_json::from_str(body).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (status 0)
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// 4xx
    #[error("HTTP {status}: {message}")]
    Client { status: u16, message: String },

    /// 5xx (and any other non-success status)
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Local form state rejected before sending
    #[error("{0}")]
    Validation(ValidationErrors),
}

impl ApiError {
    /// Classify a non-success response
    ///
    /// `message` prefers the API's own error message, then field errors, then
    /// the HTTP status text.
    pub fn from_status(status: u16, status_text: &str, body: Option<&str>) -> ApiError {
        let parsed = body.and_then(ErrorBody::parse);
        let server_message = parsed.as_ref().and_then(|b| {
            b.message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .or_else(|| {
                    let fields: Vec<String> = b
                        .field_errors
                        .iter()
                        .map(|f| format!("{}: {}", f.field, f.message))
                        .collect();
                    (!fields.is_empty()).then(|| fields.join("; "))
                })
                .or_else(|| b.error.clone())
        });
        let message = server_message.unwrap_or_else(|| status_text.to_string());

        match status {
            0 => ApiError::Network(message),
            400..=499 => ApiError::Client { status, message },
            _ => ApiError::Server { status, message },
        }
    }

    /// HTTP status, 0 when no response was received
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Network(_) => 0,
            ApiError::Timeout(_) => 408,
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => *status,
            ApiError::Decode(_) => 200,
            ApiError::Validation(_) => 0,
        }
    }

    /// Text shown to the visitor in notifications
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Network error. Please check your internet connection.".to_string()
            }
            ApiError::Timeout(_) => "Request timeout. Please try again.".to_string(),
            ApiError::Client { status: 400, message } => {
                if message.trim().is_empty() {
                    "Bad request. Please check your input.".to_string()
                } else {
                    message.clone()
                }
            }
            ApiError::Client { status: 401, .. } => "Unauthorized. Please log in again.".to_string(),
            ApiError::Client { status: 403, .. } => {
                "Forbidden. You do not have permission to access this resource.".to_string()
            }
            ApiError::Client { status: 404, .. } => "Resource not found.".to_string(),
            ApiError::Client { status: 408, .. } => "Request timeout. Please try again.".to_string(),
            ApiError::Server { status: 500, .. } => {
                "Server error. Please try again later.".to_string()
            }
            ApiError::Server { status: 503, .. } => {
                "Service unavailable. Please try again later.".to_string()
            }
            ApiError::Client { message, .. } | ApiError::Server { message, .. } => {
                if message.trim().is_empty() {
                    "An error occurred: Unknown error".to_string()
                } else {
                    format!("An error occurred: {message}")
                }
            }
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiError::Validation(errors) => errors.to_string(),
        }
    }

    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Timeout(_) | ApiError::Server { status: 502..=504, .. }
        )
    }

    /// Severity for the console: an offline API is a warning, anything else an error
    pub fn log_level(&self) -> log::Level {
        if self.is_transient() {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(ApiError::from_status(0, "", None).status(), 0);
        assert!(matches!(
            ApiError::from_status(404, "Not Found", None),
            ApiError::Client { status: 404, .. }
        ));
        assert!(matches!(
            ApiError::from_status(502, "Bad Gateway", None),
            ApiError::Server { status: 502, .. }
        ));
    }

    #[test]
    fn test_server_message_is_preferred() {
        let body = r#"{"status":400,"error":"Bad Request","message":"Category name already exists","path":"/api/categories"}"#;
        let err = ApiError::from_status(400, "Bad Request", Some(body));
        assert_eq!(err.user_message(), "Category name already exists");
    }

    #[test]
    fn test_field_errors_become_message() {
        let body = r#"{"status":400,"fieldErrors":[{"field":"title","message":"Product title is required"}]}"#;
        let err = ApiError::from_status(400, "Bad Request", Some(body));
        assert_eq!(err.user_message(), "title: Product title is required");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::from_status(401, "Unauthorized", None).user_message(),
            "Unauthorized. Please log in again."
        );
        assert_eq!(
            ApiError::from_status(500, "Internal Server Error", Some("<html>")).user_message(),
            "Server error. Please try again later."
        );
        assert_eq!(
            ApiError::from_status(418, "I'm a teapot", None).user_message(),
            "An error occurred: I'm a teapot"
        );
        assert_eq!(ApiError::Timeout(30000).user_message(), "Request timeout. Please try again.");
        assert_eq!(ApiError::Timeout(30000).status(), 408);
    }

    #[test]
    fn test_transient() {
        assert!(ApiError::Network("offline".into()).is_transient());
        assert!(ApiError::from_status(503, "", None).is_transient());
        assert!(!ApiError::from_status(400, "", None).is_transient());
    }

    #[test]
    fn test_log_level_follows_transience() {
        assert_eq!(ApiError::Timeout(30000).log_level(), log::Level::Warn);
        assert_eq!(ApiError::from_status(504, "", None).log_level(), log::Level::Warn);
        assert_eq!(ApiError::from_status(500, "", None).log_level(), log::Level::Error);
        assert_eq!(ApiError::Decode("bad json".into()).log_level(), log::Level::Error);
    }
}
