//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use stockhub_core::config::database::DatabaseConfig;
use stockhub_core::error::{AppError, ErrorKind};

/// Create a connection pool from database configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to connect to database", e)
        })
}

/// Create a pool without establishing connections up front.
///
/// Connections are opened on first use; handy for tooling and tests that
/// never touch the database.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy(&config.url)
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Invalid database connection URL", e)
        })
}
