//! Parsing of raw message text into commands and free text.

use std::str::FromStr;
use thiserror::Error;

/// Every command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Inventory,
    ProductRequest,
    ProductDetails,
    Status,
    Order,
    Select,
    Cart,
    Checkout,
    Confirm,
    Cancel,
    Contact,
    Bill,
}

/// A command word with no matching [`Command`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.to_ascii_lowercase().as_str() {
            "start" => Self::Start,
            "help" => Self::Help,
            "inventory" => Self::Inventory,
            "product_request" => Self::ProductRequest,
            "product_details" => Self::ProductDetails,
            "status" => Self::Status,
            "order" => Self::Order,
            "select" => Self::Select,
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "confirm" => Self::Confirm,
            "cancel" | "cancel_order" => Self::Cancel,
            "contact" => Self::Contact,
            "bill" => Self::Bill,
            _ => return Err(UnknownCommand(s.to_string())),
        };
        Ok(command)
    }
}

/// A message after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command { command: Command, args: Vec<String> },
    /// A `/word` the bot has no handler for
    UnknownCommand(String),
    /// A command addressed to a different bot (`/start@other_bot`)
    NotForUs,
    Text(String),
}

/// Splits `text` into a command and its whitespace-separated arguments.
///
/// Only text starting with `/` is a command. A `@username` suffix on the
/// command word is accepted when it names this bot.
pub fn parse(text: &str, bot_username: &str) -> Input {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Input::Text(trimmed.to_string());
    };

    let mut words = rest.split_whitespace();
    let head = words.next().unwrap_or_default();
    let args: Vec<String> = words.map(str::to_string).collect();

    let name = match head.split_once('@') {
        Some((name, target)) if target.eq_ignore_ascii_case(bot_username) => name,
        Some(_) => return Input::NotForUs,
        None => head,
    };

    match name.parse() {
        Ok(command) => Input::Command { command, args },
        Err(UnknownCommand(name)) => Input::UnknownCommand(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "store_bot";

    #[test]
    fn parses_command_with_args() {
        assert_eq!(
            parse("/order Rice 10", BOT),
            Input::Command {
                command: Command::Order,
                args: vec!["Rice".into(), "10".into()]
            }
        );
        assert_eq!(
            parse("  /CART  ", BOT),
            Input::Command {
                command: Command::Cart,
                args: vec![]
            }
        );
    }

    #[test]
    fn accepts_own_mention_only() {
        assert_eq!(
            parse("/help@Store_Bot", BOT),
            Input::Command {
                command: Command::Help,
                args: vec![]
            }
        );
        assert_eq!(parse("/help@other_bot", BOT), Input::NotForUs);
    }

    #[test]
    fn aliases_and_unknowns() {
        assert!(matches!(
            parse("/cancel_order", BOT),
            Input::Command {
                command: Command::Cancel,
                ..
            }
        ));
        assert_eq!(parse("/dance", BOT), Input::UnknownCommand("dance".into()));
        assert_eq!(parse("/", BOT), Input::UnknownCommand(String::new()));
    }

    #[test]
    fn unknown_word_is_reported_back() {
        let err = "Teleport".parse::<Command>().unwrap_err();
        assert_eq!(err, UnknownCommand("Teleport".into()));
        assert_eq!(err.to_string(), "unknown command: Teleport");
        assert_eq!("STATUS".parse::<Command>(), Ok(Command::Status));
    }

    #[test]
    fn plain_text_is_text() {
        assert_eq!(parse(" hello there ", BOT), Input::Text("hello there".into()));
    }
}
