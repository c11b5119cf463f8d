//! dressstore-server: HTTP CRUD service for the DressStore product catalogue
//!
//! Exposes the product collection over JSON/HTTP. Handlers talk to a
//! [`ProductStore`]: Postgres in production, in-memory for tests and local
//! runs.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryProductStore, PgProductStore, ProductStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Product, ProductFields, ProductId};

/// Open the connection pool and make sure the products table exists.
///
/// A blank connection string is a configuration error, reported before any
/// connection attempt.
pub async fn connect_postgres(
    database_url: &str,
    max_connections: u32,
) -> Result<PgProductStore, ServerError> {
    if database_url.trim().is_empty() {
        return Err(ServerError::Config("database URL is empty".to_string()));
    }
    if max_connections == 0 {
        return Err(ServerError::Config(
            "max connections must be at least 1".to_string(),
        ));
    }

    let pool = db::create_pool(database_url, max_connections).await?;
    tracing::info!(max_connections, "Connected to database");

    db::schema::ensure_schema(&pool).await?;

    Ok(PgProductStore::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_database_url_is_config_error() {
        let err = connect_postgres("  ", db::DEFAULT_MAX_CONNECTIONS)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[tokio::test]
    async fn zero_pool_size_is_config_error() {
        let err = connect_postgres("postgres://localhost/dressstore", 0)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
