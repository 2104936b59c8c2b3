use thiserror::Error;

use crate::ai::ParticipantError;
use crate::domain::Money;

/// Failures that abort a single auction.
#[derive(Debug, Error)]
pub enum AuctionError {
    /// A bid exceeded the bidder's money. Never clamped.
    #[error("{bidder} bid {value} but holds only {money}")]
    InsufficientFunds {
        bidder: String,
        value: Money,
        money: Money,
    },
    #[error("bid signed by {signed} was submitted by {submitted}")]
    BidderMismatch { submitted: String, signed: String },
    #[error("auctioneer {0} is not among the bidders")]
    AuctioneerMissing(String),
    #[error("auction has no bidders")]
    NoBidders,
    #[error("{bidder} failed to bid: {source}")]
    Participant {
        bidder: String,
        #[source]
        source: ParticipantError,
    },
    #[error("bidder task for {bidder} did not finish: {detail}")]
    BidderTask { bidder: String, detail: String },
}
