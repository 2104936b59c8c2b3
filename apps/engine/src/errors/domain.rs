//! Domain-level errors raised by the pure game types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("turn queue is empty")]
    EmptyTurnQueue,
    #[error("deck exhausted: requested {requested}, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("{participant} does not hold {item}")]
    ItemNotFound { participant: String, item: String },
    #[error("unsupported player count {0}")]
    UnsupportedPlayerCount(usize),
    #[error("participant name {0} is used more than once")]
    DuplicateParticipant(String),
}
