//! In-memory game runner for strategy evaluation.
//!
//! Builds the participants for one game from a base seed, shuffles the deck
//! from the same seed and plays every phase to the end.

use std::error::Error;
use std::sync::Arc;

use engine::domain::{derive_deck_seed, derive_participant_seed};
use engine::{
    create_participant, AuctionError, Deck, DomainError, Game, GameConfig, GameError, Participant,
    Phase, Scores,
};
use tracing::debug;

use crate::types::StrategyKind;

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Seat names in turn order.
    pub seats: Vec<String>,
    pub final_scores: Scores,
    pub phases: Vec<Phase>,
}

impl GameResult {
    /// Seats holding the most money. Several on a tie.
    pub fn winners(&self) -> Vec<&str> {
        let top = self.final_scores.values().max().copied().unwrap_or(0);
        self.seats
            .iter()
            .filter(|name| self.final_scores.get(name.as_str()) == Some(&top))
            .map(String::as_str)
            .collect()
    }
}

/// Short label for why a game stopped early, used to group failures.
pub fn failure_kind(err: &(dyn Error + 'static)) -> &'static str {
    match err.downcast_ref::<GameError>() {
        Some(GameError::NoAuctionableItem { .. }) => "empty hand",
        Some(GameError::Participant { .. }) => "strategy failure",
        Some(GameError::Auction(AuctionError::InsufficientFunds { .. })) => "overbid",
        Some(GameError::Auction(AuctionError::BidderMismatch { .. })) => "forged bid",
        Some(GameError::Auction(AuctionError::Participant { .. })) => "strategy failure",
        Some(GameError::Auction(_)) => "auction failure",
        Some(GameError::Domain(DomainError::DeckExhausted { .. })) => "deck exhausted",
        Some(GameError::Domain(DomainError::ItemNotFound { .. })) => "forged item",
        Some(_) => "engine failure",
        None => "setup failure",
    }
}

pub struct Simulator {
    game_seed: u64,
    config: GameConfig,
}

impl Simulator {
    pub fn new(game_seed: u64, config: GameConfig) -> Self {
        Self { game_seed, config }
    }

    /// Display name of the participant at `seat`.
    pub fn seat_name(seat: usize, kind: StrategyKind) -> String {
        format!("seat{seat}-{}", kind.registry_name().to_lowercase())
    }

    fn participants(
        &self,
        seats: &[StrategyKind],
    ) -> Result<Vec<Arc<dyn Participant>>, Box<dyn Error>> {
        seats
            .iter()
            .enumerate()
            .map(|(seat, kind)| {
                let config = serde_json::json!({
                    "seed": derive_participant_seed(self.game_seed, seat)
                });
                let name = Self::seat_name(seat, *kind);
                create_participant(kind.registry_name(), name, Some(&config))
                    .ok_or_else(|| format!("unknown strategy: {}", kind.registry_name()).into())
            })
            .collect()
    }

    pub async fn simulate_game(
        &self,
        seats: &[StrategyKind],
    ) -> Result<GameResult, Box<dyn Error>> {
        let participants = self.participants(seats)?;
        let deck = Deck::seeded(derive_deck_seed(self.game_seed));
        let mut game = Game::new(participants, deck, &self.config)?;

        let final_scores = game.play().await?;
        debug!(seed = self.game_seed, ?final_scores, "simulated game finished");

        Ok(GameResult {
            seats: game.seats().iter().map(|seat| seat.name().to_string()).collect(),
            final_scores,
            phases: game.past_phases().to_vec(),
        })
    }
}
