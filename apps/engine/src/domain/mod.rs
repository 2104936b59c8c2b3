//! Domain layer: pure game logic types and helpers.

pub mod auction;
pub mod category;
pub mod dealing;
pub mod item;
pub mod phase;
pub mod rules;
pub mod seed_derivation;
pub mod turn_queue;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_phase;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_phase;

/// Whole units of in-game currency.
pub type Money = u32;

// Re-exports for ergonomics
pub use auction::{better_bid, Auction, AuctionKind, Bid};
pub use category::Category;
pub use dealing::Deck;
pub use item::Item;
pub use phase::{cumulative_payouts, Phase, Podium};
pub use rules::items_per_phase;
pub use seed_derivation::{derive_deck_seed, derive_participant_seed};
pub use turn_queue::TurnQueue;
