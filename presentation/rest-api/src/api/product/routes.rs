use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductCreatedResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
}

impl ProductApi {
    pub fn new(create_use_case: Arc<dyn CreateProductUseCase>) -> Self {
        Self { create_use_case }
    }
}

/// Product management API
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Validates the payload, stores the product and returns it with its
    /// generated identifier.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                if let ProductError::Repository(cause) = &err {
                    tracing::error!(op = "create_product", error = ?cause, "failed to create product");
                }

                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "invalid_payload")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductCreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Payload could not be decoded; the use case is never reached.
fn invalid_payload(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(Json(ErrorResponse::new(
        "BadRequest",
        "request.invalid_payload",
        err.to_string(),
    )))
}
