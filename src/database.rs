//! PostgreSQL connection pool.
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Postgres as PostgresConfig;

const DEFAULT_CREDENTIALS: &str = "postgres";
const DEFAULT_DATABASE_NAME: &str = "pintere5t";
const DEFAULT_POOL_SIZE: u32 = 10;

/// Custom db structure to pass to Axum.
#[derive(Clone)]
pub struct Database {
    pub postgres: PgPool,
}

impl Database {
    /// Open the pool described by the `postgres` section of `config.yaml`.
    pub async fn connect(
        config: &PostgresConfig,
    ) -> Result<Self, sqlx::Error> {
        let username =
            config.username.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
        let password =
            config.password.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
        let db =
            config.database.as_deref().unwrap_or(DEFAULT_DATABASE_NAME);
        let addr = format!(
            "postgres://{username}:{password}@{}/{db}",
            config.address
        );

        let postgres = PgPoolOptions::new()
            .max_connections(config.pool_size.unwrap_or(DEFAULT_POOL_SIZE))
            .connect(&addr)
            .await?;

        tracing::info!(hostname = %config.address, %db, "postgres connected");

        Ok(Self { postgres })
    }
}
