//! Chat Bot Module
//!
//! This module turns inbound chat messages into replies:
//! - Channel models (IncomingMessage, BotReply, Invoice)
//! - Command parsing and dispatch
//! - The guided product selection flow
//! - Reply texts and table rendering
//! - The webhook handler

pub mod command;
pub mod dispatcher;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod replies;
pub mod selection;

pub use dispatcher::handle_message;
pub use handlers::routes;
pub use models::{BotReply, IncomingMessage};
pub use selection::SelectionStore;
