//! Product endpoints
//!
//! Search shares the list endpoint: `GET /api/products?name=<fragment>`.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ProductIdPath, QueryParams};
use crate::http::server::AppState;
use crate::models::{Product, ProductFields};

/// Query parameters for the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive name fragment; absent or empty lists everything
    pub name: Option<String>,
}

/// Confirmation body for bulk delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/products - list all products, or search by name
async fn list_products(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = match params.name.as_deref() {
        Some(fragment) if !fragment.is_empty() => state.store.search_by_name(fragment).await?,
        _ => state.store.list().await?,
    };
    Ok(Json(products))
}

/// GET /api/products/{id}
async fn get_product(
    State(state): State<Arc<AppState>>,
    ProductIdPath(id): ProductIdPath,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.store.get(id).await?))
}

/// POST /api/products
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<ProductFields>,
) -> Result<Json<Product>, ApiError> {
    let product = state.store.create(fields).await?;
    tracing::info!(product_id = %product.id, "Product created");
    Ok(Json(product))
}

/// PUT /api/products/{id}
async fn update_product(
    State(state): State<Arc<AppState>>,
    ProductIdPath(id): ProductIdPath,
    JsonBody(fields): JsonBody<ProductFields>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.store.update(id, fields).await?))
}

/// DELETE /api/products/{id}
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ProductIdPath(id): ProductIdPath,
) -> Result<Json<Product>, ApiError> {
    let product = state.store.delete(id).await?;
    tracing::info!(product_id = %product.id, "Product removed");
    Ok(Json(product))
}

/// DELETE /api/products - remove every product
async fn delete_all_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_all().await?;
    Ok(Json(MessageResponse {
        message: "All products removed successfully".to_string(),
    }))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/products",
            get(list_products)
                .post(create_product)
                .delete(delete_all_products),
        )
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
