#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{create_participant, Participant, ParticipantError, StrategyConfig};
pub use config::{ChannelConfig, GameConfig};
pub use domain::{Auction, AuctionKind, Bid, Category, Deck, Item, Money, Phase};
pub use errors::{AuctionError, ConfigError, DomainError, GameError};
pub use services::auction_engine::{AuctionEngine, Bidder};
pub use services::game_flow::{Game, PhaseOutcome, Scores, Seat};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
