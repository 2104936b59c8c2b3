//! Deck construction and dealing.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::auction::AuctionKind;
use super::category::Category;
use super::item::Item;
use crate::errors::domain::DomainError;

/// Items not yet dealt. Consumed from the front, never refilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    items: VecDeque<Item>,
}

impl Deck {
    /// The 70-item deck in category order.
    ///
    /// Protocols are printed cyclically within each category so every
    /// category carries every protocol.
    pub fn standard() -> Self {
        let mut items = VecDeque::with_capacity(70);
        for category in Category::ALL {
            for n in 0..category.deck_count() {
                let kind = AuctionKind::PRINT_CYCLE[n % AuctionKind::PRINT_CYCLE.len()];
                items.push_back(Item::new(
                    format!("{} #{:02}", category.name(), n + 1),
                    category,
                    kind,
                ));
            }
        }
        Self { items }
    }

    /// Standard deck shuffled with the caller's generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut items: Vec<Item> = Self::standard().items.into();
        items.shuffle(rng);
        Self {
            items: items.into(),
        }
    }

    /// Standard deck shuffled deterministically from `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Deck holding exactly `items`, dealt in the given order.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Take the next `count` items off the top.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Item>, DomainError> {
        if count > self.items.len() {
            return Err(DomainError::DeckExhausted {
                requested: count,
                remaining: self.items.len(),
            });
        }
        Ok(self.items.drain(..count).collect())
    }
}
