//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Identifier of one conversation on the messaging channel.
///
/// Every chat owns at most one cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents one product line in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Name of the product, as listed in the catalog
    pub name: String,

    /// Reserved quantity
    pub quantity: u32,
}

/// One priced line of a checkout summary
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLine {
    pub name: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Cart contents priced at the catalog's current prices.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub lines: Vec<CheckoutLine>,
    pub total: Decimal,
}
