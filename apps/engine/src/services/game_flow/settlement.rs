use tracing::{debug, info};

use super::Game;
use crate::domain::{cumulative_payouts, Bid, Item, Money};
use crate::errors::{AuctionError, GameError};

impl Game {
    /// Move money and the sold item after an auction.
    ///
    /// The buyer pays the auctioneer. When the auctioneer buys its own item
    /// the payment goes to no one and leaves circulation.
    pub(super) fn settle(
        &mut self,
        auctioneer: usize,
        item: &Item,
        winning: &Bid,
    ) -> Result<(), GameError> {
        let buyer = self
            .seats
            .iter()
            .position(|seat| seat.name() == winning.bidder)
            .ok_or_else(|| GameError::UnknownParticipant(winning.bidder.clone()))?;

        let buyer_seat = &mut self.seats[buyer];
        let money = buyer_seat.money();
        buyer_seat
            .debit(winning.value)
            .ok_or_else(|| AuctionError::InsufficientFunds {
                bidder: winning.bidder.clone(),
                value: winning.value,
                money,
            })?;
        buyer_seat.collect(item.clone());

        if buyer == auctioneer {
            debug!(
                participant = %winning.bidder,
                value = winning.value,
                item = %item.name,
                "self-purchase; payment removed from play"
            );
        } else {
            self.seats[auctioneer].credit(winning.value);
            debug!(
                buyer = %winning.bidder,
                seller = %self.seats[auctioneer].name(),
                value = winning.value,
                item = %item.name,
                "item sold"
            );
        }
        Ok(())
    }

    /// Credit every collected item at its category's cumulative payout and
    /// clear all collections.
    pub(super) fn pay_out(&mut self, phase_no: u8) {
        let payouts = cumulative_payouts(&self.past_phases);
        for seat in &mut self.seats {
            let earned: Money = seat
                .take_collection()
                .iter()
                .map(|item| payouts[item.category.index()])
                .sum();
            if earned > 0 {
                seat.credit(earned);
            }
            info!(
                phase = phase_no,
                participant = %seat.name(),
                earned,
                money = seat.money(),
                "phase payout"
            );
        }
    }
}
