use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::error::ErrorKind;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &mut Product) -> Result<(), RepositoryError> {
        tracing::debug!(name = %product.name, "inserting product");

        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, quantity, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, quantity, price, created_at, updated_at"#,
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        *product = entity.into_domain();
        Ok(())
    }
}

/// Sorts driver failures into the repository error kinds, keeping the driver error as cause.
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    let violates_constraint = match &err {
        sqlx::Error::Database(db_err) => matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ),
        _ => false,
    };

    let mapped = if matches!(err, sqlx::Error::PoolTimedOut) {
        RepositoryError::timeout()
    } else if violates_constraint {
        RepositoryError::constraint_violation(err)
    } else {
        RepositoryError::database_error(err)
    };

    tracing::warn!(error = ?mapped, "product insert failed");
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn should_map_pool_timeout_to_timeout() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, RepositoryError::Timeout));
    }

    #[test]
    fn should_map_other_failures_to_database_error_with_cause() {
        let err = map_sqlx_error(sqlx::Error::PoolClosed);

        assert!(matches!(err, RepositoryError::DatabaseError(_)));
        let cause = err.source().expect("driver error kept as cause");
        assert!(matches!(
            cause.downcast_ref::<sqlx::Error>(),
            Some(sqlx::Error::PoolClosed)
        ));
    }

    fn product(name: &str, quantity: i32, price: f64) -> Product {
        Product {
            id: uuid::Uuid::nil(),
            name: name.to_string(),
            quantity,
            price,
            created_at: None,
            updated_at: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn should_fill_generated_fields_on_insert(pool: PgPool) {
        let repository = ProductRepositoryPostgres::new(pool);
        let mut product = product("Test Product", 10, 99.99);

        repository.create(&mut product).await.unwrap();

        assert!(product.is_persisted());
        assert!(product.created_at.is_some());
        assert!(product.updated_at.is_none());
        assert_eq!(product.name, "Test Product");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, 99.99);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn should_report_check_violation_and_leave_product_untouched(pool: PgPool) {
        let repository = ProductRepositoryPostgres::new(pool);
        let mut product = product("Keyboard", 5, 0.0);

        let result = repository.create(&mut product).await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation(_))
        ));
        assert!(!product.is_persisted());
        assert!(product.created_at.is_none());
    }
}
