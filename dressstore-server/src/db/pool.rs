//! Connection pool for the products database
//!
//! One pool is opened at startup and shared by every handler for the
//! process lifetime. No acquire timeout or retry is configured: a slow
//! database only delays the requests waiting on it.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used when `--max-connections` is not given.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(max_connections)
}

/// Open the pool and establish the first connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    pool_options(max_connections).connect(database_url).await
}
