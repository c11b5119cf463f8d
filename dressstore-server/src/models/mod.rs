//! Domain models
//!
//! Products carry no validation rules: any combination of attributes is
//! accepted as long as the JSON shape matches.

pub mod product;

pub use product::{Product, ProductFields, ProductId};
