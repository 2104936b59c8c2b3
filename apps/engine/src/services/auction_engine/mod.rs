//! Runs one auction to settlement under the protocol printed on its item.
//!
//! One-shot, blind and set-price auctions run inline on the caller's task.
//! Open auctions fan bids in from one task per bidder; see [`open`].

mod open;
mod sequential;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ai::Participant;
use crate::config::ChannelConfig;
use crate::domain::{Auction, AuctionKind, Bid, Money};
use crate::errors::AuctionError;

/// A participant as seen by one auction: name, money at auction start and
/// the capability to call into.
#[derive(Clone)]
pub struct Bidder {
    pub name: String,
    pub money: Money,
    pub participant: Arc<dyn Participant>,
}

impl Bidder {
    pub fn new(participant: Arc<dyn Participant>, money: Money) -> Self {
        Self {
            name: participant.name().to_string(),
            money,
            participant,
        }
    }

    /// Reject bids not signed by this bidder or exceeding its money.
    fn validate(&self, bid: &Bid) -> Result<(), AuctionError> {
        if bid.bidder != self.name {
            warn!(
                bidder = %self.name,
                signed = %bid.bidder,
                "bid signed by another participant"
            );
            return Err(AuctionError::BidderMismatch {
                submitted: self.name.clone(),
                signed: bid.bidder.clone(),
            });
        }
        if bid.value > self.money {
            warn!(
                bidder = %self.name,
                value = bid.value,
                money = self.money,
                "bid exceeds funds"
            );
            return Err(AuctionError::InsufficientFunds {
                bidder: self.name.clone(),
                value: bid.value,
                money: self.money,
            });
        }
        Ok(())
    }

    /// Ask for a sealed bid and validate it.
    fn sealed_bid(&self, view: &Auction) -> Result<Bid, AuctionError> {
        let bid = self
            .participant
            .bid(view)
            .map_err(|source| AuctionError::Participant {
                bidder: self.name.clone(),
                source,
            })?;
        self.validate(&bid)?;
        Ok(bid)
    }
}

/// Auction executor. Holds only the channel sizing for open auctions.
#[derive(Debug, Clone, Default)]
pub struct AuctionEngine {
    channels: ChannelConfig,
}

impl AuctionEngine {
    pub fn new(channels: ChannelConfig) -> Self {
        Self { channels }
    }

    /// Run `auction` against `bidders` in the given order and return the
    /// settled bid, which is also left in `auction.winning_bid`.
    ///
    /// The auctioneer is expected last in `bidders` so it can buy its own
    /// item. Any invalid bid aborts the auction.
    pub async fn run(
        &self,
        auction: &mut Auction,
        bidders: &[Bidder],
    ) -> Result<Bid, AuctionError> {
        if bidders.is_empty() {
            return Err(AuctionError::NoBidders);
        }
        if auction.winning_bid.is_none() {
            auction.winning_bid = Some(Bid::new(auction.auctioneer.clone(), 0));
        }

        match auction.kind {
            AuctionKind::OneShot => sequential::one_shot(auction, bidders)?,
            AuctionKind::Blind => sequential::blind(auction, bidders)?,
            AuctionKind::SetPrice => sequential::set_price(auction, bidders)?,
            AuctionKind::Open => open::run(auction, bidders, &self.channels).await?,
        }

        let settled = auction
            .winning_bid
            .clone()
            .unwrap_or_else(|| Bid::new(auction.auctioneer.clone(), 0));
        debug!(
            item = %auction.item.name,
            kind = %auction.kind,
            auctioneer = %auction.auctioneer,
            winner = %settled.bidder,
            value = settled.value,
            "auction settled"
        );
        Ok(settled)
    }
}
