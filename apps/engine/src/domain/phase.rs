//! Phase ledger: per-category points, ranking and payouts.

use std::cmp::Reverse;

use serde::Serialize;

use super::auction::Auction;
use super::category::Category;
use super::rules::{PHASE_THRESHOLD, POINTS_PER_ITEM, RANK_PAYOUTS};
use super::Money;

/// Top three categories of a phase. Lower places are empty when the
/// category in that slot never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Podium {
    pub first: Category,
    pub second: Option<Category>,
    pub third: Option<Category>,
}

impl Podium {
    pub fn places(&self) -> [Option<Category>; 3] {
        [Some(self.first), self.second, self.third]
    }
}

/// One scoring round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Phase {
    auctions: Vec<Auction>,
    points: [u32; Category::COUNT],
}

impl Phase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `auction` and score its item's category.
    pub fn record(&mut self, auction: Auction) {
        self.points[auction.item.category.index()] += POINTS_PER_ITEM;
        self.auctions.push(auction);
    }

    pub fn auctions(&self) -> &[Auction] {
        &self.auctions
    }

    /// Stored points for `category`, without tie-break weight.
    pub fn points(&self, category: Category) -> u32 {
        self.points[category.index()]
    }

    pub fn is_over(&self) -> bool {
        self.points.iter().any(|&points| points >= PHASE_THRESHOLD)
    }

    /// Whether recording one more item of `category` would end the phase.
    pub fn closes_with(&self, category: Category) -> bool {
        self.points(category) + POINTS_PER_ITEM >= PHASE_THRESHOLD
    }

    /// All categories, best first, by stored points plus tie-break weight.
    pub fn ranked_categories(&self) -> [Category; Category::COUNT] {
        let mut ranked = Category::ALL;
        ranked.sort_by_key(|category| Reverse(self.points(*category) + category.tiebreak()));
        ranked
    }

    pub fn winners(&self) -> Podium {
        let [first, second, third, ..] = self.ranked_categories();
        let scored = |category: Category| (self.points(category) > 0).then_some(category);
        Podium {
            first,
            second: scored(second),
            third: scored(third),
        }
    }

    /// Payout per category for this phase alone.
    pub fn payouts(&self) -> [Money; Category::COUNT] {
        let mut payouts = [0; Category::COUNT];
        for (place, amount) in self.winners().places().into_iter().zip(RANK_PAYOUTS) {
            if let Some(category) = place {
                payouts[category.index()] = amount;
            }
        }
        payouts
    }
}

/// Value of one collected item per category at the end of the latest phase.
///
/// Earlier phases' payouts accumulate onto a category only while it still
/// places in the latest phase; categories off the podium pay nothing.
pub fn cumulative_payouts(phases: &[Phase]) -> [Money; Category::COUNT] {
    let Some((latest, earlier)) = phases.split_last() else {
        return [0; Category::COUNT];
    };

    let mut history = [0; Category::COUNT];
    for phase in earlier {
        for (total, paid) in history.iter_mut().zip(phase.payouts()) {
            *total += paid;
        }
    }

    let mut payouts = latest.payouts();
    for (payout, past) in payouts.iter_mut().zip(history) {
        if *payout > 0 {
            *payout += past;
        }
    }
    payouts
}
