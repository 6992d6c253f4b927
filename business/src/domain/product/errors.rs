use crate::domain::errors::RepositoryError;

/// Business rule violations detected by [`Product::validate`].
///
/// [`Product::validate`]: super::model::Product::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product.name_empty")]
    EmptyName,
    #[error("product.quantity_negative")]
    NegativeQuantity,
    #[error("product.price_invalid")]
    InvalidPrice,
}

impl ValidationError {
    /// Human readable explanation, safe to return to the caller.
    pub fn description(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "name cannot be empty",
            ValidationError::NegativeQuantity => "quantity must be non-negative",
            ValidationError::InvalidPrice => "price must be greater than zero",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid")]
    Validation(#[from] ValidationError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ProductError::Validation(_))
    }
}
