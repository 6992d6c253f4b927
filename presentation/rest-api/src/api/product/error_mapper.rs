use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, code, message) = match &self {
            ProductError::Validation(kind) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                kind.to_string(),
                kind.description(),
            ),
            // Backend details stay in the logs.
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                self.to_string(),
                "failed to create product",
            ),
        };

        (status, Json(ErrorResponse::new(name, &code, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::ValidationError;

    #[test]
    fn should_map_validation_to_bad_request_with_description() {
        let (status, json) =
            ProductError::Validation(ValidationError::NegativeQuantity).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.code, "product.quantity_negative");
        assert_eq!(json.0.message, "quantity must be non-negative");
    }

    #[test]
    fn should_hide_repository_cause_behind_internal_error() {
        let err = ProductError::Repository(RepositoryError::database_error(
            "password authentication failed for user \"shop\"",
        ));

        let (status, json) = err.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.code, "repository.persistence");
        assert_eq!(json.0.message, "failed to create product");
        assert!(!json.0.message.contains("password"));
    }
}
