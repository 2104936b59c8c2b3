//! Auction records and the reigning-wins-ties bid comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::Money;

/// The four bidding protocols an item can be sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionKind {
    OneShot,
    Open,
    Blind,
    SetPrice,
}

impl AuctionKind {
    /// Order in which the standard deck prints protocols within a category.
    pub const PRINT_CYCLE: [AuctionKind; 4] = [
        AuctionKind::OneShot,
        AuctionKind::Open,
        AuctionKind::Blind,
        AuctionKind::SetPrice,
    ];
}

impl fmt::Display for AuctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuctionKind::OneShot => "one-shot",
            AuctionKind::Open => "open",
            AuctionKind::Blind => "blind",
            AuctionKind::SetPrice => "set-price",
        };
        f.write_str(label)
    }
}

/// A bidder's offer for the item on sale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: String,
    pub value: Money,
}

impl Bid {
    pub fn new(bidder: impl Into<String>, value: Money) -> Self {
        Self {
            bidder: bidder.into(),
            value,
        }
    }
}

/// Returns true when `challenger` should replace `reigning`.
///
/// Only strictly greater values win; equal challengers never displace the
/// reigning bid.
pub fn better_bid(reigning: Option<&Bid>, challenger: &Bid) -> bool {
    match reigning {
        None => true,
        Some(reigning) => challenger.value > reigning.value,
    }
}

/// One item put up for sale by one auctioneer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub auctioneer: String,
    pub kind: AuctionKind,
    pub item: Item,
    /// `None` only for the item that closed its phase without being sold.
    pub winning_bid: Option<Bid>,
}

impl Auction {
    /// Open an auction for `item`, seeded with the auctioneer's zero bid.
    pub fn new(auctioneer: impl Into<String>, item: Item) -> Self {
        let auctioneer = auctioneer.into();
        Self {
            winning_bid: Some(Bid::new(auctioneer.clone(), 0)),
            kind: item.kind,
            auctioneer,
            item,
        }
    }

    /// Merge `bid` into the current winner. Returns whether it took the lead.
    pub fn handle_bid(&mut self, bid: Bid) -> bool {
        if better_bid(self.winning_bid.as_ref(), &bid) {
            self.winning_bid = Some(bid);
            true
        } else {
            false
        }
    }

    pub fn winning_value(&self) -> Money {
        self.winning_bid.as_ref().map_or(0, |bid| bid.value)
    }

    /// Copy shown to blind bidders: the visible bid is reset to the opening one.
    pub fn blind_view(&self) -> Auction {
        Auction {
            winning_bid: Some(Bid::new(self.auctioneer.clone(), 0)),
            ..self.clone()
        }
    }
}
