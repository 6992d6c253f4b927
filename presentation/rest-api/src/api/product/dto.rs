use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductInput;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Units in stock, defaults to 0 (cannot be negative)
    #[oai(default)]
    pub quantity: i32,
    /// Unit price (must be greater than zero)
    pub price: f64,
}

impl From<CreateProductRequest> for CreateProductInput {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: i32,
    /// Unit price
    pub price: f64,
    /// Creation timestamp
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Acknowledgment returned once a product is stored.
#[derive(Debug, Clone, Object)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub data: ProductResponse,
}

impl From<Product> for ProductCreatedResponse {
    fn from(product: Product) -> Self {
        Self {
            message: "product created successfully".to_string(),
            data: product.into(),
        }
    }
}
