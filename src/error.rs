//! Error types shared by the catalog, the cart store and the configuration
//! loader.

use thiserror::Error;

/// Failures of catalog and cart operations.
///
/// None of these ever reach the channel as an error: the command handlers turn
/// each variant into a reply the customer can read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Cart is empty")]
    EmptyCart,
}

/// Failures while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value}")]
    InvalidValue { var: &'static str, value: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
