//! Product Catalog Module
//!
//! This module contains the store's product catalog:
//! - Domain models (Product, responses)
//! - The shared in-memory catalog
//! - REST API handlers for the store owner

pub mod handlers;
pub mod models;
pub mod state;

pub use handlers::routes;
pub use models::Product;
pub use state::Catalog;
