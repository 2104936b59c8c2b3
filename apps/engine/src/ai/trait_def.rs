//! Participant capability trait definition.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::{Auction, Bid, Item};

/// Errors a participant can report back to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantError {
    /// Hand is empty; nothing left to auction
    #[error("no item left to auction")]
    NoItem,
    /// Participant encountered an internal error
    #[error("participant internal error: {0}")]
    Internal(String),
    /// Participant produced an invalid move
    #[error("participant invalid move: {0}")]
    InvalidMove(String),
}

/// Contract the game loop and auction engine call into.
///
/// The engine keeps its own authoritative copy of every hand, balance and
/// collection. Implementations mirror whatever they need privately from the
/// notifications below; the engine never inspects that state.
#[async_trait]
pub trait Participant: Send + Sync {
    /// Unique name used as the bidder reference.
    fn name(&self) -> &str;

    /// Pick one item from the hand to auction and drop it from the hand.
    ///
    /// Returns [`ParticipantError::NoItem`] when the hand is empty.
    fn choose_auction_item(&self) -> Result<Item, ParticipantError>;

    /// Bid for one-shot, blind and set-price auctions.
    ///
    /// For set-price auctions the auctioneer's bid is the asking price; every
    /// other bidder accepts by bidding exactly that value.
    fn bid(&self, auction: &Auction) -> Result<Bid, ParticipantError>;

    /// Take part in an open auction.
    ///
    /// `inbound` yields improved winning bids, including this participant's
    /// own. A reader that falls behind skips straight to the latest winner,
    /// and the final winner is always delivered before `inbound` closes.
    /// Bids go out on `outbound`; dropping it (or
    /// returning) withdraws from the auction. Implementations must
    /// eventually do so or the auction never settles.
    async fn open_bid(
        &self,
        auction: Auction,
        inbound: mpsc::Receiver<Bid>,
        outbound: mpsc::Sender<Bid>,
    ) -> Result<(), ParticipantError>;

    /// Called for every auction recorded in a phase, including the one that
    /// closes it without a sale (its winning bid is `None`).
    fn auction_settled(&self, auction: &Auction);

    /// Items dealt into the hand.
    fn receive_items(&self, items: &[Item]);

    /// Balance change: payments, sales, payouts and the starting stake.
    fn adjust_money(&self, delta: i64);
}
