use thiserror::Error;

use super::{AuctionError, ConfigError, DomainError};
use crate::ai::ParticipantError;

/// Failures that stop the game loop. None of them are retried.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{participant} has no item to auction")]
    NoAuctionableItem { participant: String },
    #[error("unknown participant {0}")]
    UnknownParticipant(String),
    #[error("game is already over")]
    GameOver,
    #[error("{participant} failed: {source}")]
    Participant {
        participant: String,
        #[source]
        source: ParticipantError,
    },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Auction(#[from] AuctionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
