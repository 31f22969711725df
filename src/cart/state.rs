//! Shopping Cart State Management
//!
//! Carts are keyed by chat. Reservations are soft: an order is checked
//! against the stock on hand when it is placed, but nothing is held back from
//! other chats.

use super::helpers::{line_total, merge_line, reserved_quantity, summary_total};
use super::models::{CartLine, ChatId, CheckoutLine, CheckoutSummary};
use crate::catalog::{Catalog, Product};
use crate::config::StockPolicy;
use crate::error::{StoreError, StoreResult};
use dashmap::DashMap;
use tracing::warn;

/// In-memory storage for carts, keyed by chat.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<ChatId, Vec<CartLine>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of a product to the chat's cart.
    ///
    /// Together with what the cart already holds, the quantity must fit in the
    /// current stock. On any failure the cart is left as it was. Returns the
    /// catalog record of the product that was added.
    pub fn add_to_cart(
        &self,
        chat: ChatId,
        catalog: &Catalog,
        product_name: &str,
        quantity: u32,
    ) -> StoreResult<Product> {
        let product = catalog
            .resolve(product_name)
            .ok_or_else(|| StoreError::NotFound(product_name.trim().to_string()))?;

        if quantity == 0 {
            return Err(StoreError::InvalidArgument(
                "quantity must be a positive whole number".into(),
            ));
        }

        let mut cart = self.carts.entry(chat).or_default();
        let requested = reserved_quantity(&cart, &product.name).saturating_add(quantity);
        if requested > product.quantity {
            let empty = cart.is_empty();
            drop(cart);
            if empty {
                self.carts.remove_if(&chat, |_, lines| lines.is_empty());
            }
            return Err(StoreError::InsufficientStock {
                requested,
                available: product.quantity,
            });
        }

        merge_line(
            &mut cart,
            CartLine {
                name: product.name.clone(),
                quantity,
            },
        );
        Ok(product)
    }

    /// The chat's cart lines, empty when it has no cart.
    pub fn view_cart(&self, chat: ChatId) -> Vec<CartLine> {
        self.carts
            .get(&chat)
            .map(|lines| lines.value().clone())
            .unwrap_or_default()
    }

    /// Drops the chat's cart. Returns `true` if it held anything.
    pub fn clear_cart(&self, chat: ChatId) -> bool {
        self.carts
            .remove(&chat)
            .map(|(_, lines)| !lines.is_empty())
            .unwrap_or(false)
    }

    /// Prices the cart at the catalog's current prices. The cart is kept.
    ///
    /// Fails with [`StoreError::InvalidArgument`] when an amount is too large
    /// to represent.
    pub fn checkout(&self, chat: ChatId, catalog: &Catalog) -> StoreResult<CheckoutSummary> {
        let lines = self.non_empty_cart(chat)?;

        let mut priced = Vec::with_capacity(lines.len());
        for line in lines {
            let product = catalog
                .get_item(&line.name)
                .ok_or_else(|| StoreError::NotFound(line.name.clone()))?;
            priced.push(CheckoutLine {
                line_total: line_total(product.price, line.quantity)?,
                name: line.name,
                quantity: line.quantity,
            });
        }

        Ok(CheckoutSummary {
            total: summary_total(&priced)?,
            lines: priced,
        })
    }

    /// Finalizes the chat's order and clears its cart.
    ///
    /// The cart stays locked from the emptiness check until its lines are
    /// taken, so an order arriving meanwhile lands in a fresh cart instead of
    /// being dropped. Under [`StockPolicy::CommitOnConfirm`] every line is
    /// deducted from the catalog first; if any line no longer fits, nothing is
    /// deducted and the cart is kept.
    pub fn confirm(
        &self,
        chat: ChatId,
        catalog: &Catalog,
        policy: StockPolicy,
    ) -> StoreResult<Vec<CartLine>> {
        let lines = {
            let mut cart = match self.carts.get_mut(&chat) {
                Some(cart) if !cart.is_empty() => cart,
                _ => return Err(StoreError::EmptyCart),
            };
            if policy == StockPolicy::CommitOnConfirm {
                commit_stock(catalog, &cart)?;
            }
            std::mem::take(&mut *cart)
        };

        self.carts.remove_if(&chat, |_, lines| lines.is_empty());
        Ok(lines)
    }

    /// Number of chats holding a cart.
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    fn non_empty_cart(&self, chat: ChatId) -> StoreResult<Vec<CartLine>> {
        match self.carts.get(&chat) {
            Some(lines) if !lines.is_empty() => Ok(lines.value().clone()),
            _ => Err(StoreError::EmptyCart),
        }
    }
}

/// Deducts every line from the catalog, undoing earlier deductions when a
/// later one fails.
fn commit_stock(catalog: &Catalog, lines: &[CartLine]) -> StoreResult<()> {
    let mut committed: Vec<&CartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match catalog.decrement(&line.name, line.quantity) {
            Ok(_) => committed.push(line),
            Err(err) => {
                for done in committed {
                    if let Err(undo) = catalog.restock(&done.name, done.quantity) {
                        warn!(product = %done.name, error = %undo, "failed to return stock");
                    }
                }
                return Err(err);
            }
        }
    }
    Ok(())
}
