//! Product document types
//!
//! The schema is permissive: every attribute is optional and unknown keys
//! are ignored. Only the identifier is owned by the store.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::DbError;

/// Store-assigned product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generate a fresh identifier (used by the in-memory backend).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier taken from a request path.
    ///
    /// A malformed identifier is a lookup failure, not a missing record.
    pub fn parse(s: &str) -> Result<Self, DbError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DbError::InvalidId(s.to_owned()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Client-supplied product attributes (create and update payload).
///
/// `None` means "not provided": on create the attribute stays empty, on
/// update the stored value is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductFields {
    /// Overwrite every attribute present in `patch`.
    pub fn apply(&mut self, patch: ProductFields) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.price.is_some() {
            self.price = patch.price;
        }
        if patch.quantity.is_some() {
            self.quantity = patch.quantity;
        }
        if patch.category.is_some() {
            self.category = patch.category;
        }
    }
}

/// Stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl Product {
    /// Substring match of an already-lowercased fragment against the
    /// lowercased name. Unnamed products never match.
    pub fn name_contains_lowercase(&self, fragment_lower: &str) -> bool {
        self.fields
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(fragment_lower))
    }
}
