//! RNG seed derivation utilities for deterministic games.
//!
//! Derives unique-but-deterministic seeds for the deck shuffle and for each
//! seat's strategy from a single base game seed.

/// Derive the seed used to shuffle the deck.
pub fn derive_deck_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(2)
}

/// Derive the seed handed to the strategy sitting at `seat`.
///
/// Same game + seat = same seed; different seats never share one.
pub fn derive_participant_seed(game_seed: u64, seat: usize) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(10_000))
        .wrapping_add(1)
}
