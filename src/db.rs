//! Connection pool and the bundled table DDL.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// `companies` and `invoices` DDL. Every statement is `IF NOT EXISTS`, so running it twice is harmless.
pub const SCHEMA_SQL: &str = include_str!("../db/schema.sql");

pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Create the tables when they are missing. Existing tables are left untouched.
pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), AppError> {
    tracing::info!("bootstrapping schema");
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}
