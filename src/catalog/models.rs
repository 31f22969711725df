//! Catalog Domain Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product on the store's shelves, keyed by its name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Name of the product (unique)
    pub name: String,

    /// Units on hand
    pub quantity: u32,

    /// Unit price, in the store currency
    pub price: Decimal,

    /// Free-form description shown in the inventory listing
    #[serde(default)]
    pub description: String,
}

/// Response for `GET /catalog`
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
}
