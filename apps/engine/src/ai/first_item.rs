//! Baseline participant: sells its oldest item and bids a tenth of its money.

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::holdings::Holdings;
use super::trait_def::{Participant, ParticipantError};
use crate::domain::{Auction, Bid, Item, Money};

/// Deterministic participant with no strategy to speak of.
///
/// Every bid is 10% of current money, so it can never overbid. In open
/// auctions it submits that single bid and withdraws.
pub struct FirstItemPlayer {
    name: String,
    holdings: Mutex<Holdings>,
}

impl FirstItemPlayer {
    pub const NAME: &'static str = "FirstItem";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holdings: Mutex::new(Holdings::default()),
        }
    }

    fn offer(&self) -> Money {
        self.holdings.lock().money / 10
    }
}

#[async_trait]
impl Participant for FirstItemPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_auction_item(&self) -> Result<Item, ParticipantError> {
        self.holdings.lock().take(0).ok_or(ParticipantError::NoItem)
    }

    fn bid(&self, _auction: &Auction) -> Result<Bid, ParticipantError> {
        Ok(Bid::new(self.name.clone(), self.offer()))
    }

    async fn open_bid(
        &self,
        _auction: Auction,
        _inbound: mpsc::Receiver<Bid>,
        outbound: mpsc::Sender<Bid>,
    ) -> Result<(), ParticipantError> {
        let bid = Bid::new(self.name.clone(), self.offer());
        // A closed channel means the auction is already over.
        let _ = outbound.send(bid).await;
        Ok(())
    }

    fn auction_settled(&self, _auction: &Auction) {}

    fn receive_items(&self, items: &[Item]) {
        self.holdings.lock().receive(items);
    }

    fn adjust_money(&self, delta: i64) {
        self.holdings.lock().adjust(delta);
    }
}
