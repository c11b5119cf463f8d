//! Postgres product store
//!
//! One row per document, nullable typed columns. Writes use RETURNING so
//! each operation is a single query.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DbError, ProductStore};
use crate::models::{Product, ProductFields, ProductId};

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity, category";

/// Product record from database
#[derive(Debug, Clone, FromRow)]
struct ProductRow {
    id: Uuid,
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    quantity: Option<f64>,
    category: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::from(row.id),
            fields: ProductFields {
                name: row.name,
                description: row.description,
                price: row.price,
                quantity: row.quantity,
                category: row.category,
            },
        }
    }
}

/// Product repository backed by a shared connection pool
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>, DbError> {
        // strpos matches the fragment literally, unlike LIKE/regex
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS} FROM products
            WHERE strpos(lower(name), lower($1)) > 0
            ORDER BY seq
            "#
        ))
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    async fn get(&self, id: ProductId) -> Result<Product, DbError> {
        sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .map(Product::from)
        .ok_or_else(|| DbError::product_not_found(id))
    }

    #[tracing::instrument(skip_all)]
    async fn create(&self, fields: ProductFields) -> Result<Product, DbError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (name, description, price, quantity, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(fields.category)
        .fetch_one(&self.pool)
        .await?;

        let product = Product::from(row);
        tracing::debug!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[tracing::instrument(skip(self, fields), fields(product_id = %id))]
    async fn update(&self, id: ProductId, fields: ProductFields) -> Result<Product, DbError> {
        sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                quantity = COALESCE($5, quantity),
                category = COALESCE($6, category)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(fields.category)
        .fetch_optional(&self.pool)
        .await?
        .map(Product::from)
        .ok_or_else(|| DbError::product_not_found(id))
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: ProductId) -> Result<Product, DbError> {
        sqlx::query_as::<_, ProductRow>(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .map(Product::from)
        .ok_or_else(|| DbError::product_not_found(id))
    }

    #[tracing::instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        tracing::info!(removed = result.rows_affected(), "All products removed");
        Ok(result.rows_affected())
    }
}
