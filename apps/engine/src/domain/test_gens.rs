// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Auction, AuctionKind, Bid, Category, Item, Phase};

pub fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::ManuelCarvalho),
        Just(Category::SigridThaler),
        Just(Category::DanielMelim),
        Just(Category::RamonMartins),
        Just(Category::RafaelSilveira),
    ]
}

pub fn bid() -> impl Strategy<Value = Bid> {
    (prop::sample::select(vec!["ana", "bo", "cy", "di"]), 0u32..=200)
        .prop_map(|(bidder, value)| Bid::new(bidder, value))
}

/// Auction of a throwaway item in `category`, already settled at zero.
pub fn auction_in(category: Category) -> Auction {
    Auction::new(
        "ana",
        Item::new(format!("{category} test"), category, AuctionKind::OneShot),
    )
}

/// Phase built by recording `counts[i]` items of `Category::ALL[i]`.
pub fn phase_with_counts(counts: [usize; Category::COUNT]) -> Phase {
    let mut phase = Phase::new();
    for (category, count) in Category::ALL.into_iter().zip(counts) {
        for _ in 0..count {
            phase.record(auction_in(category));
        }
    }
    phase
}

/// Item counts for a phase that may or may not have reached its threshold.
pub fn item_counts() -> impl Strategy<Value = [usize; Category::COUNT]> {
    prop::array::uniform5(0usize..=5)
}
