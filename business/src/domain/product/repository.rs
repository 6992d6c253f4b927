use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product with a single write.
    ///
    /// On success the generated identifier and creation timestamp are written
    /// back into `product`. On failure `product` is left untouched.
    async fn create(&self, product: &mut Product) -> Result<(), RepositoryError>;
}
