use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::STARTING_MONEY;
use crate::domain::Money;
use crate::errors::ConfigError;

/// Buffer sizes for the open protocol's channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Bids a bidder may queue before its sends block.
    pub bidder_outbound: usize,
    /// Envelopes buffered between the per-bidder listeners and the coordinator.
    pub merged: usize,
    /// Winning-bid updates buffered per bidder. Past this, a bidder skips to
    /// the latest winner.
    pub bidder_inbound: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            bidder_outbound: 8,
            merged: 64,
            bidder_inbound: 64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_money: Money,
    pub channels: ChannelConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            channels: ChannelConfig::default(),
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `AUCTION_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            starting_money: var_or("AUCTION_STARTING_MONEY", defaults.starting_money)?,
            channels: ChannelConfig {
                bidder_outbound: var_or(
                    "AUCTION_OUTBOUND_CAPACITY",
                    defaults.channels.bidder_outbound,
                )?,
                merged: var_or("AUCTION_MERGED_CAPACITY", defaults.channels.merged)?,
                bidder_inbound: var_or(
                    "AUCTION_INBOUND_CAPACITY",
                    defaults.channels.bidder_inbound,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacities = [
            ("bidder_outbound", self.channels.bidder_outbound),
            ("merged", self.channels.merged),
            ("bidder_inbound", self.channels.bidder_inbound),
        ];
        for (name, capacity) in capacities {
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity(name));
            }
        }
        Ok(())
    }
}

fn var_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}
