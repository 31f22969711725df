//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::{CartLine, CheckoutLine};
use crate::error::{StoreError, StoreResult};
use rust_decimal::Decimal;

/// Merges an order into the cart, adding to the quantity of an existing line
/// or appending a new one.
pub fn merge_line(cart_lines: &mut Vec<CartLine>, incoming: CartLine) {
    if let Some(existing) = cart_lines.iter_mut().find(|l| l.name == incoming.name) {
        existing.quantity += incoming.quantity;
    } else {
        cart_lines.push(incoming);
    }
}

/// Quantity of `name` already reserved in a cart.
pub fn reserved_quantity(cart_lines: &[CartLine], name: &str) -> u32 {
    cart_lines
        .iter()
        .filter(|l| l.name == name)
        .map(|l| l.quantity)
        .sum()
}

/// `unit_price × quantity`, failing instead of overflowing.
pub fn line_total(unit_price: Decimal, quantity: u32) -> StoreResult<Decimal> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| StoreError::InvalidArgument("amount is too large to price".into()))
}

/// Sum of all line totals, failing instead of overflowing.
pub fn summary_total(lines: &[CheckoutLine]) -> StoreResult<Decimal> {
    lines.iter().try_fold(Decimal::ZERO, |total, line| {
        total
            .checked_add(line.line_total)
            .ok_or_else(|| StoreError::InvalidArgument("amount is too large to price".into()))
    })
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Rice, 1x Milk"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.name))
        .collect::<Vec<_>>()
        .join(", ")
}
