//! Protocols that poll bidders one after another on the caller's task.

use tracing::trace;

use super::Bidder;
use crate::domain::Auction;
use crate::errors::AuctionError;

/// Each bidder bids once, in order, seeing the current winner.
pub(super) fn one_shot(auction: &mut Auction, bidders: &[Bidder]) -> Result<(), AuctionError> {
    for bidder in bidders {
        let bid = bidder.sealed_bid(auction)?;
        let took_lead = auction.handle_bid(bid);
        trace!(bidder = %bidder.name, took_lead, "one-shot bid");
    }
    Ok(())
}

/// Every bidder sees only the opening bid; bids merge once all are in.
///
/// Merging in bidder order makes the earliest bidder win equal values.
pub(super) fn blind(auction: &mut Auction, bidders: &[Bidder]) -> Result<(), AuctionError> {
    let view = auction.blind_view();
    let bids = bidders
        .iter()
        .map(|bidder| bidder.sealed_bid(&view))
        .collect::<Result<Vec<_>, _>>()?;

    for bid in bids {
        auction.handle_bid(bid);
    }
    Ok(())
}

/// The auctioneer names a price; the first other bidder matching it buys.
///
/// Any other value is a pass. With no taker the auctioneer keeps the item
/// at its own price.
pub(super) fn set_price(auction: &mut Auction, bidders: &[Bidder]) -> Result<(), AuctionError> {
    let auctioneer = bidders
        .iter()
        .find(|bidder| bidder.name == auction.auctioneer)
        .ok_or_else(|| AuctionError::AuctioneerMissing(auction.auctioneer.clone()))?;

    let ask = auctioneer.sealed_bid(auction)?;
    auction.winning_bid = Some(ask.clone());

    for bidder in bidders.iter().filter(|b| b.name != ask.bidder) {
        let bid = bidder.sealed_bid(auction)?;
        if bid.value == ask.value {
            trace!(bidder = %bidder.name, price = ask.value, "set price accepted");
            auction.winning_bid = Some(bid);
            return Ok(());
        }
    }
    trace!(auctioneer = %auction.auctioneer, price = ask.value, "set price not taken");
    Ok(())
}
