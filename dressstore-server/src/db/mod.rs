//! Database layer - connection pool, schema bootstrap and product stores
//!
//! Handlers only see the [`ProductStore`] trait. The Postgres backend is
//! used in production; the in-memory backend backs tests and local runs.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
