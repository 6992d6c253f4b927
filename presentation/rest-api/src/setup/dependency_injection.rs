use std::sync::Arc;
use std::time::Duration;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    /// Wires repository -> use case -> controller.
    pub fn new(pool: sqlx::PgPool, write_timeout: Duration) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository,
            logger,
            write_timeout,
        });

        Self {
            health_api: HealthApi,
            product_api: ProductApi::new(create_use_case),
        }
    }
}
