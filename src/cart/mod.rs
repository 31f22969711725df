//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (ChatId, CartLine, checkout summaries)
//! - Business logic helpers (line merging, totals, formatting)
//! - The per-chat cart store

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartLine, ChatId, CheckoutSummary};
pub use state::CartStore;
