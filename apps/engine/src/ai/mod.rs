//! Participant module - the capability contract and reference strategies.
//!
//! This module provides:
//! - `Participant` trait the game loop and auction engine call into
//! - FirstItemPlayer: sells its oldest item, bids a tenth of its money
//! - RandomPlayer: random choices (seedable for tests)
//! - Valuer: expected-value bidding from its own phase ledger
//! - A static registry of strategy factories

mod config;
mod first_item;
mod holdings;
mod random;
pub mod registry;
mod trait_def;
mod valuer;

use std::sync::Arc;

pub use config::StrategyConfig;
pub use first_item::FirstItemPlayer;
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{Participant, ParticipantError};
pub use valuer::Valuer;

/// Create a participant named `participant` playing `strategy`.
///
/// `config` is a JSON strategy config (see [`StrategyConfig`]).
/// Returns None if the strategy is not registered.
pub fn create_participant(
    strategy: &str,
    participant: impl Into<String>,
    config: Option<&JsonValue>,
) -> Option<Arc<dyn Participant>> {
    let factory = registry::by_name(strategy)?;
    let config = StrategyConfig::from_json(config);
    Some((factory.make)(participant.into(), config.seed()))
}
