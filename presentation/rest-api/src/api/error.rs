use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. `ValidationError`
    pub name: String,
    /// Stable code-style identifier for i18n
    pub code: String,
    /// Human readable explanation
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
