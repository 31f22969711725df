//! Guided product selection
//!
//! `/select` walks a customer through two prompts: which product, then how
//! many. The step a chat is on lives in [`SelectionStore`]; each free-text
//! answer drives one [`SelectionState::advance`] transition. A failed answer
//! ends the flow.

use super::replies::{INVALID_QUANTITY, SELECT_NOT_ENOUGH, SELECT_PROMPT, SELECT_UNAVAILABLE};
use crate::cart::{CartStore, ChatId};
use crate::catalog::Catalog;
use crate::error::StoreError;
use dashmap::DashMap;

/// Where a chat is in the selection flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingProduct,
    AwaitingQuantity { product: String },
}

/// Result of feeding one answer into the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub reply: String,
    /// Next step, or `None` when the flow is over
    pub next: Option<SelectionState>,
}

impl Transition {
    fn ask(reply: impl Into<String>, next: SelectionState) -> Self {
        Self {
            reply: reply.into(),
            next: Some(next),
        }
    }

    fn end(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            next: None,
        }
    }
}

impl SelectionState {
    pub fn advance(
        self,
        answer: &str,
        chat: ChatId,
        catalog: &Catalog,
        carts: &CartStore,
    ) -> Transition {
        match self {
            Self::AwaitingProduct => match catalog.resolve(answer) {
                Some(product) => Transition::ask(
                    format!("You have selected {}. Please enter the quantity.", product.name),
                    Self::AwaitingQuantity {
                        product: product.name,
                    },
                ),
                None => Transition::end(SELECT_UNAVAILABLE),
            },
            Self::AwaitingQuantity { product } => {
                let Some(quantity) = parse_quantity(answer) else {
                    return Transition::end(INVALID_QUANTITY);
                };
                match carts.add_to_cart(chat, catalog, &product, quantity) {
                    Ok(product) => {
                        Transition::end(format!("{} {} added to cart.", quantity, product.name))
                    }
                    Err(StoreError::InsufficientStock { .. }) => Transition::end(SELECT_NOT_ENOUGH),
                    Err(StoreError::NotFound(_)) => Transition::end(SELECT_UNAVAILABLE),
                    Err(_) => Transition::end(INVALID_QUANTITY),
                }
            }
        }
    }
}

/// A positive whole number written with plain digits.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().filter(|q| *q > 0)
}

/// Per-chat selection state.
#[derive(Debug, Default)]
pub struct SelectionStore {
    sessions: DashMap<ChatId, SelectionState>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the flow and returns the first prompt.
    pub fn begin(&self, chat: ChatId) -> &'static str {
        self.sessions.insert(chat, SelectionState::AwaitingProduct);
        SELECT_PROMPT
    }

    /// Feeds an answer into the chat's flow. `None` when no flow is running.
    pub fn answer(
        &self,
        chat: ChatId,
        text: &str,
        catalog: &Catalog,
        carts: &CartStore,
    ) -> Option<String> {
        let (_, state) = self.sessions.remove(&chat)?;
        let transition = state.advance(text, chat, catalog, carts);
        if let Some(next) = transition.next {
            self.sessions.insert(chat, next);
        }
        Some(transition.reply)
    }

    /// Abandons the chat's flow. Returns `true` if one was running.
    pub fn cancel(&self, chat: ChatId) -> bool {
        self.sessions.remove(&chat).is_some()
    }
}
