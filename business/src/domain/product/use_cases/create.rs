use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Data received from the delivery layer. Validated only once turned into a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductInput {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, input: CreateProductInput) -> Result<Product, ProductError>;
}
