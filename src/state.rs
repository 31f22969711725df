//! Application State
//!
//! Everything a message handler may touch, owned in one place and shared
//! between requests behind an `Arc`.

use crate::bot::SelectionStore;
use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::Config;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: Catalog,
    pub carts: CartStore,
    pub selections: SelectionStore,
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    /// State stocked with the store's opening inventory
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, Catalog::with_default_stock())
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        Self {
            catalog,
            carts: CartStore::new(),
            selections: SelectionStore::new(),
            config,
        }
    }
}
