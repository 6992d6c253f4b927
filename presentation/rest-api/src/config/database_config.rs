use std::time::Duration;

use business::application::product::create::DEFAULT_WRITE_TIMEOUT;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::{ConfigError, env_lookup, parse_var_or, var_or};

/// Database connection and persistence settings.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub connection: DatabaseConfig,
    pub migrations_path: String,
    /// Upper bound for a single product write.
    pub write_timeout: Duration,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DB_HOST (default: "localhost")
    /// - DB_PORT (default: 5432)
    /// - DB_USERNAME (default: "postgres")
    /// - DB_PASSWORD (default: "")
    /// - DB_DATABASE (default: "postgres")
    /// - DB_TIMEZONE (default: "UTC")
    /// - DB_MAX_CONNECTIONS (default: 5)
    /// - DB_MIGRATIONS_PATH (default: "infrastructure/persistence/migrations")
    /// - DB_WRITE_TIMEOUT_MS (default: 5000)
    ///
    /// # Errors
    /// Returns error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub(crate) fn from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = parse_var_or(lookup, "DB_PORT", 5432u16)?;
        let max_connections = parse_var_or(lookup, "DB_MAX_CONNECTIONS", 5u32)?;
        let write_timeout_ms = parse_var_or(
            lookup,
            "DB_WRITE_TIMEOUT_MS",
            DEFAULT_WRITE_TIMEOUT.as_millis() as u64,
        )?;

        let connection = DatabaseConfig::new(
            var_or(lookup, "DB_HOST", "localhost"),
            port,
            var_or(lookup, "DB_USERNAME", "postgres"),
            var_or(lookup, "DB_PASSWORD", ""),
            var_or(lookup, "DB_DATABASE", "postgres"),
        )
        .with_timezone(var_or(lookup, "DB_TIMEZONE", "UTC"))
        .with_max_connections(max_connections);

        Ok(Self {
            connection,
            migrations_path: var_or(
                lookup,
                "DB_MIGRATIONS_PATH",
                "infrastructure/persistence/migrations",
            ),
            write_timeout: Duration::from_millis(write_timeout_ms),
        })
    }
}

/// Connect the pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.connection).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}
