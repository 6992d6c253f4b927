use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductInput, CreateProductUseCase};

pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    /// Upper bound for the persistence call.
    pub write_timeout: Duration,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, input: CreateProductInput) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", input.name));

        let mut product = Product::new(NewProductProps {
            name: input.name,
            quantity: input.quantity,
            price: input.price,
        })
        .inspect_err(|err| {
            self.logger
                .warn(&format!("Rejected product: {}", err.description()))
        })?;

        // Dropping this future (client gone, timeout) drops the pending write with it.
        let write = self.repository.create(&mut product);
        match tokio::time::timeout(self.write_timeout, write).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                self.logger
                    .error(&format!("Failed to create product: {err:?}"));
                return Err(err.into());
            }
            Err(_) => {
                self.logger.error(&format!(
                    "Failed to create product: no answer within {:?}",
                    self.write_timeout
                ));
                return Err(RepositoryError::timeout().into());
            }
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
