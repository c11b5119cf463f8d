//! In-memory product store
//!
//! Keeps products in insertion order behind a `RwLock`. Mirrors the Postgres
//! backend's semantics so router tests and `--in-memory` runs behave the same.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, ProductStore};
use crate::models::{Product, ProductFields, ProductId};

#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Product>, DbError> {
        Ok(self.products.read().await.clone())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>, DbError> {
        let fragment = fragment.to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.name_contains_lowercase(&fragment))
            .cloned()
            .collect())
    }

    async fn get(&self, id: ProductId) -> Result<Product, DbError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DbError::product_not_found(id))
    }

    async fn create(&self, fields: ProductFields) -> Result<Product, DbError> {
        let product = Product {
            id: ProductId::new(),
            fields,
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, fields: ProductFields) -> Result<Product, DbError> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DbError::product_not_found(id))?;

        product.fields.apply(fields);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<Product, DbError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DbError::product_not_found(id))?;

        Ok(products.remove(index))
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let mut products = self.products.write().await;
        let removed = products.len() as u64;
        products.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ProductFields {
        ProductFields {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryProductStore::new();
        let a = store.create(named("Skirt")).await.unwrap();
        let b = store.create(named("Blouse")).await.unwrap();

        let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_inserts_nothing() {
        let store = MemoryProductStore::new();
        let err = store
            .update(ProductId::new(), named("Ghost"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "product", .. }));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let store = MemoryProductStore::new();
        let created = store.create(named("Coat")).await.unwrap();

        let removed = store.delete(created.id).await.unwrap();
        assert_eq!(removed, created);
        assert!(matches!(
            store.delete(created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn delete_all_on_empty_store_succeeds() {
        let store = MemoryProductStore::new();
        assert_eq!(store.delete_all().await.unwrap(), 0);

        store.create(named("Hat")).await.unwrap();
        store.create(named("Belt")).await.unwrap();
        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryProductStore::new();
        let dress = store.create(named("Red Dress")).await.unwrap();
        store.create(named("Blue Jeans")).await.unwrap();
        store.create(ProductFields::default()).await.unwrap();

        let hits = store.search_by_name("rEd dR").await.unwrap();
        assert_eq!(hits, vec![dress]);
    }
}
