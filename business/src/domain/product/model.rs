use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Nil until the repository has stored the product.
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub struct NewProductProps {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Product {
    /// Builds an unpersisted product and checks the business rules.
    pub fn new(props: NewProductProps) -> Result<Self, ValidationError> {
        let product = Self {
            id: Uuid::nil(),
            name: props.name,
            quantity: props.quantity,
            price: props.price,
            created_at: None,
            updated_at: None,
        };
        product.validate()?;
        Ok(product)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        quantity: i32,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
            created_at: Some(created_at),
            updated_at,
        }
    }

    /// Checks name, quantity and price in that order; the first violation wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }

        if self.price.is_nan() || self.price <= 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(())
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_nil()
    }
}
