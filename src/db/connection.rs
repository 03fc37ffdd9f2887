//! PostgreSQL pool setup

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::debug;

use crate::config::DatabaseConfig;

/// Upper bound on waiting for a free connection
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the connection pool for the local tables
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    debug!(max_connections = config.max_connections, "Opening database pool");

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query to fail fast on a bad `DATABASE_URL`
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
    debug!(one, "Database reachable");
    Ok(())
}
