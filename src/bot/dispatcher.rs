//! Command dispatch
//!
//! [`handle_message`] is the single entry point for inbound messages. It picks
//! a handler by command name, lets the handler read or change the catalog and
//! carts, and returns the reply. Every failure a customer can cause ends up
//! as reply text; nothing is returned as an error.

use super::command::{parse, Command, Input};
use super::models::{
    BotReply, IncomingMessage, Invoice, Sender, INVOICE_AMOUNT, INVOICE_CURRENCY,
    INVOICE_START_PARAMETER,
};
use super::presentation::{
    format_cart, format_checkout, format_inventory, format_order_added, format_product_details,
    format_status,
};
use super::replies::*;
use super::selection::parse_quantity;
use crate::cart::helpers::{format_item_summary, line_total};
use crate::cart::ChatId;
use crate::error::StoreError;
use crate::state::AppState;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Handles one inbound message and produces the reply.
///
/// Any command, including one the bot does not know or one addressed to
/// another bot, abandons a running selection flow.
pub fn handle_message(state: &AppState, message: &IncomingMessage) -> BotReply {
    let chat = message.chat_id;

    let input = parse(&message.text, &state.config.bot_username);
    if !matches!(input, Input::Text(_)) && state.selections.cancel(chat) {
        debug!(%chat, "selection abandoned by command");
    }

    match input {
        Input::Command { command, args } => {
            info!(%chat, ?command, args = args.len(), "dispatching command");
            dispatch(state, message, command, &args)
        }
        Input::UnknownCommand(name) => {
            info!(%chat, command = %name, "unknown command");
            BotReply::text(UNKNOWN_COMMAND)
        }
        Input::NotForUs => BotReply::silent(),
        Input::Text(text) => handle_text(state, message, &text),
    }
}

fn dispatch(
    state: &AppState,
    message: &IncomingMessage,
    command: Command,
    args: &[String],
) -> BotReply {
    let chat = message.chat_id;
    match command {
        Command::Start => BotReply::text(WELCOME),
        Command::Help => BotReply::text(HELP_LINES.join("\n")),
        Command::Inventory => BotReply::text(format_inventory(
            &state.catalog.list_all(),
            &state.config.currency,
        )),
        Command::ProductRequest => BotReply::text(product_request(args)),
        Command::ProductDetails => BotReply::text(product_details(state, args)),
        Command::Status => BotReply::text(format_status(&state.catalog.list_all())),
        Command::Order => BotReply::text(order(state, chat, args)),
        Command::Select => BotReply::text(state.selections.begin(chat)),
        Command::Cart => BotReply::text(cart(state, chat)),
        Command::Checkout => BotReply::text(checkout(state, chat)),
        Command::Confirm => BotReply::text(confirm(state, chat)),
        Command::Cancel => BotReply::text(cancel(state, chat)),
        Command::Contact => BotReply::text(CONTACT),
        Command::Bill => BotReply::text(BILL_PROMPT).with_invoice(bill_invoice(message)),
    }
}

// =============================================================================
// Command Handlers
// =============================================================================

fn product_request(args: &[String]) -> String {
    if args.is_empty() {
        return PRODUCT_REQUEST_USAGE.to_string();
    }
    format!(
        "Thank you for requesting {}. We will try to add this product to our inventory soon!",
        args.join(" ")
    )
}

fn product_details(state: &AppState, args: &[String]) -> String {
    if args.is_empty() {
        return PRODUCT_DETAILS_USAGE.to_string();
    }
    let name = args.join(" ");
    match state.catalog.resolve(&name) {
        Some(product) => format_product_details(&product, &state.config.currency),
        None => format!("Product '{}' not found in inventory.", name),
    }
}

/// `/order <product_name> <quantity>`; the product name may span several
/// words, the quantity is always the last one.
fn order(state: &AppState, chat: ChatId, args: &[String]) -> String {
    let Some((raw_quantity, name_parts)) = args.split_last() else {
        return ORDER_USAGE.to_string();
    };
    if name_parts.is_empty() {
        return ORDER_USAGE.to_string();
    }
    let name = name_parts.join(" ");

    let Some(product) = state.catalog.resolve(&name) else {
        return PRODUCT_NOT_FOUND.to_string();
    };
    let Some(quantity) = parse_quantity(raw_quantity) else {
        return INVALID_QUANTITY.to_string();
    };
    let total = match line_total(product.price, quantity) {
        Ok(total) => total,
        Err(err) => {
            warn!(%chat, error = %err, "order could not be priced");
            return ORDER_TOO_LARGE.to_string();
        }
    };

    match state.carts.add_to_cart(chat, &state.catalog, &name, quantity) {
        Ok(product) => format_order_added(quantity, &product.name, total, &state.config.currency),
        Err(err) => {
            debug!(%chat, error = %err, "order rejected");
            let reply = match err {
                StoreError::NotFound(_) => PRODUCT_NOT_FOUND,
                StoreError::InsufficientStock { .. } => NOT_ENOUGH_STOCK,
                StoreError::InvalidArgument(_) | StoreError::EmptyCart => INVALID_QUANTITY,
            };
            reply.to_string()
        }
    }
}

fn cart(state: &AppState, chat: ChatId) -> String {
    let lines = state.carts.view_cart(chat);
    if lines.is_empty() {
        return CART_EMPTY.to_string();
    }
    format_cart(&lines)
}

fn checkout(state: &AppState, chat: ChatId) -> String {
    match state.carts.checkout(chat, &state.catalog) {
        Ok(summary) => format_checkout(&summary, &state.config.currency),
        Err(StoreError::EmptyCart) => CART_EMPTY_USE_ORDER.to_string(),
        Err(err) => {
            warn!(%chat, error = %err, "checkout failed");
            format!("Sorry, we could not price your cart: {}", err)
        }
    }
}

fn confirm(state: &AppState, chat: ChatId) -> String {
    match state
        .carts
        .confirm(chat, &state.catalog, state.config.stock_policy)
    {
        Ok(lines) => {
            info!(%chat, items = %format_item_summary(&lines), "order confirmed");
            ORDER_CONFIRMED.to_string()
        }
        Err(StoreError::EmptyCart) => CART_EMPTY_USE_ORDER.to_string(),
        Err(err) => {
            warn!(%chat, error = %err, "order could not be committed");
            CONFIRM_SHORT_STOCK.to_string()
        }
    }
}

fn cancel(state: &AppState, chat: ChatId) -> String {
    if state.carts.clear_cart(chat) {
        CART_CLEARED.to_string()
    } else {
        CART_ALREADY_EMPTY.to_string()
    }
}

/// Payment request for `/bill`. The amount is a fixed placeholder.
fn bill_invoice(message: &IncomingMessage) -> Invoice {
    let sender = message.from.clone().unwrap_or_else(|| Sender {
        id: message.chat_id.0,
        ..Sender::default()
    });

    Invoice {
        invoice_id: Uuid::new_v4(),
        title: BILL_TITLE.to_string(),
        description: BILL_DESCRIPTION.to_string(),
        start_parameter: INVOICE_START_PARAMETER.to_string(),
        currency: INVOICE_CURRENCY.to_string(),
        total_amount: INVOICE_AMOUNT,
        payload: format!(
            "{} {} ({}) - {}",
            sender.first_name.as_deref().unwrap_or(""),
            sender.last_name.as_deref().unwrap_or(""),
            sender.username.as_deref().unwrap_or(""),
            sender.id
        ),
        button_text: BILL_BUTTON.to_string(),
    }
}

// =============================================================================
// Free Text
// =============================================================================

/// Free text answers a running selection, otherwise gets a canned reply.
///
/// In group chats the bot only listens when its username is mentioned.
fn handle_text(state: &AppState, message: &IncomingMessage, text: &str) -> BotReply {
    let chat = message.chat_id;
    let lowered = text.to_lowercase();

    let text = if message.chat_type.is_group() {
        let mention = format!("@{}", state.config.bot_username.to_lowercase());
        if !lowered.contains(&mention) {
            return BotReply::silent();
        }
        lowered.replace(&mention, "").trim().to_string()
    } else {
        lowered
    };

    debug!(%chat, kind = ?message.chat_type, %text, "free text");

    if let Some(reply) = state
        .selections
        .answer(chat, &text, &state.catalog, &state.carts)
    {
        return BotReply::text(reply);
    }
    BotReply::text(canned_reply(&text))
}
