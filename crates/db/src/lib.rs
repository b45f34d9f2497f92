//! Postgres record store for the back office.
//!
//! Row models, zero-sized repositories, the related-record loader used by
//! the validator, and guarded (validated, serializable) writes.

use sqlx::postgres::PgPoolOptions;

pub mod guarded;
pub mod models;
pub mod related;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Pool size used when `DB_MAX_CONNECTIONS` is unset or invalid.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Read `DB_MAX_CONNECTIONS`, falling back to [`DEFAULT_MAX_CONNECTIONS`].
pub fn max_connections_from_env() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
