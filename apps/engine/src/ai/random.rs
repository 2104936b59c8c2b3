//! Random participant - picks items and bids uniformly at random.
//!
//! This module provides [`RandomPlayer`], the seedable reference
//! implementation of [`Participant`](super::Participant). Every bid stays
//! within the player's own money so it never trips fund validation.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::prelude::*;
use tokio::sync::mpsc;

use super::holdings::Holdings;
use super::trait_def::{Participant, ParticipantError};
use crate::domain::{Auction, AuctionKind, Bid, Item, Money};

/// Most bids a random player submits in one open auction.
const OPEN_BURST: usize = 3;

struct State {
    holdings: Holdings,
    rng: StdRng,
}

/// Participant that makes random choices.
///
/// # Usage
///
/// ```rust,ignore
/// // Non-deterministic (uses system entropy)
/// let random = RandomPlayer::new("ana", None);
///
/// // Deterministic (same seed, same decisions)
/// let seeded = RandomPlayer::new("ana", Some(12345));
/// ```
pub struct RandomPlayer {
    name: String,
    /// RNG and holdings share one lock; it is never held across an await.
    state: Mutex<State>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "Random";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: name.into(),
            state: Mutex::new(State {
                holdings: Holdings::default(),
                rng,
            }),
        }
    }

    /// Strictly increasing bids for one open auction, all within `money`.
    fn open_burst(&self) -> Vec<Money> {
        let mut state = self.state.lock();
        let money = state.holdings.money;
        let mut values: Vec<Money> = (0..OPEN_BURST)
            .map(|_| state.rng.random_range(0..=money))
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}

#[async_trait]
impl Participant for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_auction_item(&self) -> Result<Item, ParticipantError> {
        let mut state = self.state.lock();
        if state.holdings.hand.is_empty() {
            return Err(ParticipantError::NoItem);
        }
        let len = state.holdings.hand.len();
        let index = state.rng.random_range(0..len);
        state
            .holdings
            .take(index)
            .ok_or_else(|| ParticipantError::Internal("random index outside hand".into()))
    }

    fn bid(&self, auction: &Auction) -> Result<Bid, ParticipantError> {
        let mut state = self.state.lock();
        let money = state.holdings.money;

        let value = match auction.winning_bid.as_ref() {
            // Set-price: take the asking price half of the time when affordable.
            Some(ask) if auction.kind == AuctionKind::SetPrice
                && auction.auctioneer != self.name =>
            {
                if ask.value <= money && state.rng.random_bool(0.5) {
                    ask.value
                } else {
                    0
                }
            }
            _ => state.rng.random_range(0..=money),
        };
        Ok(Bid::new(self.name.clone(), value))
    }

    async fn open_bid(
        &self,
        _auction: Auction,
        _inbound: mpsc::Receiver<Bid>,
        outbound: mpsc::Sender<Bid>,
    ) -> Result<(), ParticipantError> {
        let burst = self.open_burst();
        for value in burst {
            if outbound.send(Bid::new(self.name.clone(), value)).await.is_err() {
                break;
            }
        }
        Ok(())
    }

    fn auction_settled(&self, _auction: &Auction) {}

    fn receive_items(&self, items: &[Item]) {
        self.state.lock().holdings.receive(items);
    }

    fn adjust_money(&self, delta: i64) {
        self.state.lock().holdings.adjust(delta);
    }
}
