//! Product store trait and its backends
//!
//! Every operation is a single independent round trip; concurrent writes to
//! the same identifier are last-write-wins.

pub mod memory;
pub mod products;

use async_trait::async_trait;

use crate::models::{Product, ProductFields, ProductId};

pub use memory::MemoryProductStore;
pub use products::PgProductStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid identifier: '{0}'")]
    InvalidId(String),
}

impl DbError {
    pub(crate) fn product_not_found(id: ProductId) -> Self {
        Self::NotFound {
            resource: "product",
            id: id.to_string(),
        }
    }
}

/// Persistence operations over the product collection (testable)
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Short backend name reported by `/health`.
    fn backend(&self) -> &'static str;

    /// Every product in store order.
    async fn list(&self) -> Result<Vec<Product>, DbError>;

    /// Products whose name contains `fragment`, ignoring case, in store order.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>, DbError>;

    async fn get(&self, id: ProductId) -> Result<Product, DbError>;

    /// Persist a new product; the store assigns the identifier.
    async fn create(&self, fields: ProductFields) -> Result<Product, DbError>;

    /// Overwrite the provided attributes. Never creates a record.
    async fn update(&self, id: ProductId, fields: ProductFields) -> Result<Product, DbError>;

    /// Remove a product, returning what was stored.
    async fn delete(&self, id: ProductId) -> Result<Product, DbError>;

    /// Remove every product, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, DbError>;
}
