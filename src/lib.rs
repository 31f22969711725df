//! General Store Bot Library
//!
//! Core of a chat bot for a small grocery store: an in-memory catalog,
//! per-chat carts, and the command handlers that answer customers.

// Domain modules
pub mod bot;
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
