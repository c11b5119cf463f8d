//! Products table bootstrap
//!
//! Creates the table when it is missing. There is no versioning: the
//! statement is idempotent and runs on every startup.

use sqlx::PgPool;

/// Create the `products` table if it does not exist yet.
///
/// `seq` defines store order (insertion order) for list and search.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring products table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            seq BIGSERIAL NOT NULL,
            name TEXT,
            description TEXT,
            price DOUBLE PRECISION,
            quantity DOUBLE PRECISION,
            category TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_seq ON products(seq)")
        .execute(pool)
        .await?;

    Ok(())
}
