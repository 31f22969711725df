//! Chat Channel Models
//!
//! The shapes exchanged with the messaging channel: one inbound message in,
//! one reply (and maybe a payment request) out.

use crate::cart::ChatId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Constants
// =============================================================================

/// Amount requested by `/bill`, in minor units of [`INVOICE_CURRENCY`].
pub const INVOICE_AMOUNT: u64 = 10_000;
pub const INVOICE_CURRENCY: &str = "USD";
pub const INVOICE_START_PARAMETER: &str = "bot-invoice";

// =============================================================================
// Inbound
// =============================================================================

/// Kind of conversation a message arrived in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    #[default]
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    /// Group chats only get answers when the bot is mentioned.
    pub fn is_group(self) -> bool {
        matches!(self, Self::Group | Self::Supergroup)
    }
}

/// The person who sent a message
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

/// One inbound text message
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMessage {
    pub chat_id: ChatId,

    /// Raw message text, commands included (`/order Rice 10`)
    pub text: String,

    #[serde(default)]
    pub chat_type: ChatKind,

    #[serde(default)]
    pub from: Option<Sender>,
}

impl IncomingMessage {
    /// A private-chat message with no sender details.
    pub fn private(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: ChatId(chat_id),
            text: text.into(),
            chat_type: ChatKind::Private,
            from: None,
        }
    }
}

// =============================================================================
// Outbound
// =============================================================================

/// Payment request attached to a reply, rendered by the channel as a pay
/// button.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_id: Uuid,
    pub title: String,
    pub description: String,
    pub start_parameter: String,
    pub currency: String,
    /// Amount in minor units
    pub total_amount: u64,
    /// Identifies the payer to the store
    pub payload: String,
    pub button_text: String,
}

/// What the bot sends back for one inbound message
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BotReply {
    /// Reply text; `None` when the bot stays quiet
    pub reply: Option<String>,
    pub invoice: Option<Invoice>,
}

impl BotReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            invoice: None,
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }

    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.invoice = Some(invoice);
        self
    }

    /// Reply text or the empty string.
    pub fn text_or_empty(&self) -> &str {
        self.reply.as_deref().unwrap_or("")
    }
}
