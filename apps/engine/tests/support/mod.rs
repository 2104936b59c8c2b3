#![allow(dead_code)]

//! Scripted participants for integration tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use engine::domain::{Auction, AuctionKind, Bid, Category, Item, Money};
use engine::{Bidder, Participant, ParticipantError};
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// How a scripted participant behaves in open auctions.
#[derive(Debug, Clone)]
pub enum OpenScript {
    /// Send these values in order, then withdraw.
    Burst(Vec<Money>),
    /// Send `first`, wait for any rival update, send `second`, withdraw.
    RaiseOnce { first: Money, second: Money },
    /// Wait for the first update from anyone, send `value`, withdraw.
    Follow { value: Money },
    /// Send one bid signed with someone else's name.
    Impersonate { victim: String, value: Money },
    /// Send `bids`, withdraw, wait `delay`, then record every update until
    /// the auction closes the inbound stream.
    Listen { bids: Vec<Money>, delay: Duration },
    /// Stay in the auction until some winner reaches `value`.
    AwaitValue { value: Money },
}

/// Participant whose every answer is fixed up front.
pub struct Scripted {
    name: String,
    sealed: Mutex<Vec<Money>>,
    open: OpenScript,
    /// Views passed to sealed `bid` calls.
    pub seen: Mutex<Vec<Auction>>,
    /// Winning-bid updates received during open auctions.
    pub heard: Mutex<Vec<Bid>>,
}

impl Scripted {
    /// `sealed` answers one-shot, blind and set-price calls in order; the last
    /// value repeats once the list runs out.
    pub fn new(name: &str, sealed: Vec<Money>, open: OpenScript) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            sealed: Mutex::new(sealed),
            open,
            seen: Mutex::new(Vec::new()),
            heard: Mutex::new(Vec::new()),
        })
    }

    pub fn sealed(name: &str, value: Money) -> Arc<Self> {
        Self::new(name, vec![value], OpenScript::Burst(Vec::new()))
    }

    pub fn open(name: &str, script: OpenScript) -> Arc<Self> {
        Self::new(name, vec![0], script)
    }

    fn signed(&self, value: Money) -> Bid {
        Bid::new(self.name.clone(), value)
    }
}

#[async_trait]
impl Participant for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_auction_item(&self) -> Result<Item, ParticipantError> {
        Err(ParticipantError::NoItem)
    }

    fn bid(&self, auction: &Auction) -> Result<Bid, ParticipantError> {
        self.seen.lock().push(auction.clone());
        let mut sealed = self.sealed.lock();
        let value = if sealed.len() > 1 {
            sealed.remove(0)
        } else {
            sealed.first().copied().unwrap_or(0)
        };
        Ok(self.signed(value))
    }

    async fn open_bid(
        &self,
        _auction: Auction,
        mut inbound: mpsc::Receiver<Bid>,
        outbound: mpsc::Sender<Bid>,
    ) -> Result<(), ParticipantError> {
        match &self.open {
            OpenScript::Burst(values) => {
                for value in values {
                    if outbound.send(self.signed(*value)).await.is_err() {
                        break;
                    }
                }
            }
            OpenScript::RaiseOnce { first, second } => {
                let _ = outbound.send(self.signed(*first)).await;
                while let Some(update) = inbound.recv().await {
                    if update.bidder != self.name {
                        let _ = outbound.send(self.signed(*second)).await;
                        break;
                    }
                }
            }
            OpenScript::Follow { value } => {
                if inbound.recv().await.is_some() {
                    let _ = outbound.send(self.signed(*value)).await;
                }
            }
            OpenScript::Impersonate { victim, value } => {
                let _ = outbound.send(Bid::new(victim.clone(), *value)).await;
            }
            OpenScript::Listen { bids, delay } => {
                for value in bids {
                    if outbound.send(self.signed(*value)).await.is_err() {
                        break;
                    }
                }
                drop(outbound);
                tokio::time::sleep(*delay).await;
                while let Some(update) = inbound.recv().await {
                    self.heard.lock().push(update);
                }
            }
            OpenScript::AwaitValue { value } => {
                while let Some(update) = inbound.recv().await {
                    let reached = update.value >= *value;
                    self.heard.lock().push(update);
                    if reached {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn auction_settled(&self, _auction: &Auction) {}

    fn receive_items(&self, _items: &[Item]) {}

    fn adjust_money(&self, _delta: i64) {}
}

pub fn bidder(participant: &Arc<Scripted>, money: Money) -> Bidder {
    Bidder::new(participant.clone(), money)
}

pub fn auction(auctioneer: &str, kind: AuctionKind) -> Auction {
    Auction::new(
        auctioneer,
        Item::new("Ramon Martins #07", Category::RamonMartins, kind),
    )
}
