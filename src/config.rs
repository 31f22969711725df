//! Runtime configuration
//!
//! Everything is read from environment variables (a `.env` file is loaded by
//! `main` first). Unset variables fall back to the defaults below.

use crate::error::ConfigError;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));
pub const DEFAULT_CURRENCY: &str = "₹";
pub const DEFAULT_BOT_USERNAME: &str = "mataji_general_store_bot";

/// When confirmed orders take stock out of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockPolicy {
    /// Orders are checked against on-hand stock but never deducted.
    #[default]
    Soft,
    /// `confirm` deducts every cart line from the catalog.
    CommitOnConfirm,
}

impl std::str::FromStr for StockPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "commit_on_confirm" | "commit-on-confirm" => Ok(Self::CommitOnConfirm),
            _ => Err(ConfigError::InvalidValue {
                var: "STORE_STOCK_POLICY",
                value: s.to_string(),
            }),
        }
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Symbol appended to every amount in replies.
    pub currency: String,
    /// Username the bot answers to in group chats, without the leading `@`.
    pub bot_username: String,
    pub stock_policy: StockPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            currency: DEFAULT_CURRENCY.to_string(),
            bot_username: DEFAULT_BOT_USERNAME.to_string(),
            stock_policy: StockPolicy::Soft,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("STORE_BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "STORE_BIND_ADDR",
                value: raw.clone(),
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let stock_policy = match lookup("STORE_STOCK_POLICY") {
            Some(raw) => raw.parse::<StockPolicy>()?,
            None => StockPolicy::default(),
        };

        let bot_username = lookup("STORE_BOT_USERNAME")
            .map(|name| name.trim().trim_start_matches('@').to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_BOT_USERNAME.to_string());

        Ok(Self {
            bind_addr,
            currency: lookup("STORE_CURRENCY")
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            bot_username,
            stock_policy,
        })
    }
}
