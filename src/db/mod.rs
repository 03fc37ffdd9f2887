//! Local persistence
//!
//! Bookmarks, notes, editor sessions and custom tests live in PostgreSQL;
//! everything else is fetched from Codeforces on demand.

pub mod connection;
pub mod repositories;

use sqlx::{migrate::MigrateError, PgPool};
use tracing::info;

pub use connection::{create_pool, test_connection};

/// Apply the embedded migrations in `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = sqlx::migrate!("./migrations");
    migrator.run(pool).await?;

    info!(migrations = migrator.iter().count(), "Local tables up to date");
    Ok(())
}
