//! Expected-value participant.
//!
//! Keeps its own phase ledger from settlement notifications and values each
//! category by what it has paid out so far. Items that would close the
//! current phase are worth nothing: they are never sold.

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::holdings::Holdings;
use super::trait_def::{Participant, ParticipantError};
use crate::domain::{cumulative_payouts, Auction, AuctionKind, Bid, Category, Item, Money, Phase};

/// Baseline value of an item before its category has paid anything.
const BASE_VALUE: Money = 60;
/// Weight applied to a category's past payouts.
const HISTORY_WEIGHT: Money = 3;
/// Raise applied over a rival's bid in open auctions.
const RAISE: Money = 5;

#[derive(Default)]
struct State {
    holdings: Holdings,
    current: Phase,
    /// Closed phases, oldest first.
    history: Vec<Phase>,
    /// Sum of the cumulative payouts seen at the end of every closed phase.
    paid: [Money; Category::COUNT],
}

impl State {
    fn expected_value(&self, category: Category) -> Money {
        if self.current.closes_with(category) {
            return 0;
        }
        BASE_VALUE + HISTORY_WEIGHT * self.paid[category.index()]
    }

    /// Highest price worth paying for `item`, bounded by money.
    fn ceiling(&self, item: &Item) -> Money {
        (self.expected_value(item.category) / 2).min(self.holdings.money)
    }
}

/// Deterministic strategy bidding up to half an item's expected value.
pub struct Valuer {
    name: String,
    state: Mutex<State>,
}

impl Valuer {
    pub const NAME: &'static str = "Valuer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(State::default()),
        }
    }

    fn ceiling(&self, item: &Item) -> Money {
        self.state.lock().ceiling(item)
    }
}

#[async_trait]
impl Participant for Valuer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_auction_item(&self) -> Result<Item, ParticipantError> {
        let mut state = self.state.lock();
        let best = state
            .holdings
            .hand
            .iter()
            .enumerate()
            .max_by_key(|(i, item)| {
                // Earliest item wins value ties.
                (state.expected_value(item.category), std::cmp::Reverse(*i))
            })
            .map(|(i, _)| i)
            .ok_or(ParticipantError::NoItem)?;
        state
            .holdings
            .take(best)
            .ok_or_else(|| ParticipantError::Internal("chosen item left the hand".into()))
    }

    fn bid(&self, auction: &Auction) -> Result<Bid, ParticipantError> {
        let ceiling = self.ceiling(&auction.item);
        let value = match auction.kind {
            AuctionKind::SetPrice if auction.auctioneer != self.name => {
                // Accept the asking price when it is within the ceiling.
                let ask = auction.winning_value();
                if ask <= ceiling {
                    ask
                } else {
                    0
                }
            }
            _ => ceiling,
        };
        Ok(Bid::new(self.name.clone(), value))
    }

    async fn open_bid(
        &self,
        auction: Auction,
        mut inbound: mpsc::Receiver<Bid>,
        outbound: mpsc::Sender<Bid>,
    ) -> Result<(), ParticipantError> {
        let ceiling = self.ceiling(&auction.item);
        let mut offered = auction.winning_value() + 1;
        if offered > ceiling {
            return Ok(());
        }
        if outbound.send(Bid::new(self.name.clone(), offered)).await.is_err() {
            return Ok(());
        }

        while let Some(update) = inbound.recv().await {
            if update.bidder == self.name {
                if update.value == offered {
                    // Leading with our latest offer.
                    break;
                }
                continue;
            }
            if update.value < offered {
                continue;
            }
            offered = (update.value + RAISE).min(ceiling);
            if offered <= update.value {
                break;
            }
            if outbound.send(Bid::new(self.name.clone(), offered)).await.is_err() {
                break;
            }
        }
        Ok(())
    }

    fn auction_settled(&self, auction: &Auction) {
        let mut state = self.state.lock();
        state.current.record(auction.clone());
        if state.current.is_over() {
            let closed = std::mem::take(&mut state.current);
            state.history.push(closed);
            let payouts = cumulative_payouts(&state.history);
            for (paid, payout) in state.paid.iter_mut().zip(payouts) {
                *paid += payout;
            }
        }
    }

    fn receive_items(&self, items: &[Item]) {
        self.state.lock().holdings.receive(items);
    }

    fn adjust_money(&self, delta: i64) {
        self.state.lock().holdings.adjust(delta);
    }
}
