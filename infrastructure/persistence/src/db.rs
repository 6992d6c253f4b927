use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error")]
    MigrationError(#[source] Option<sqlx::migrate::MigrateError>),
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub timezone: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool settings
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
            database: database.into(),
            timezone: "UTC".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Connection options, with the session timezone applied to every connection
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .options([("timezone", self.timezone.as_str())])
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = config
        .pool_options()
        .connect_with(config.connect_options())
        .await
        .map_err(DatabaseError::ConnectionError)?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "connected to postgres"
    );

    Ok(pool)
}

/// Creates a pool that only connects on first use
pub fn create_lazy_postgres_pool(config: &DatabaseConfig) -> PgPool {
    config.pool_options().connect_lazy_with(config.connect_options())
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!(path = %migrations_path, "migrations directory not found");
        return Err(DatabaseError::MigrationError(None));
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| DatabaseError::MigrationError(Some(e)))?
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(Some(e)))?;

    tracing::info!(path = %migrations_path, "migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig::new("db.internal", 6543, "shop", "secret", "catalog")
    }

    #[test]
    fn should_default_timezone_and_pool_settings() {
        let config = config();

        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_build_connect_options_from_fields() {
        let options = config().with_timezone("Asia/Ho_Chi_Minh").connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "shop");
        assert_eq!(options.get_database(), Some("catalog"));
    }

    #[tokio::test]
    async fn should_fail_migrations_when_directory_missing() {
        let pool = create_lazy_postgres_pool(&config());

        let result = run_migrations(&pool, "./does/not/exist").await;

        assert!(matches!(result, Err(DatabaseError::MigrationError(None))));
    }
}
