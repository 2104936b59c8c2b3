//! Property tests for bid merging (pure domain).
//!
//! Contract:
//! - The winning value never decreases.
//! - Strictly greater challengers always take the lead.
//! - Equal challengers never displace the reigning bid.

use proptest::prelude::*;

use crate::domain::test_gens::{auction_in, bid, category};
use crate::domain::test_prelude;
use crate::domain::Bid;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_winning_value_never_decreases(
        category in category(),
        bids in prop::collection::vec(bid(), 0..40),
    ) {
        let mut auction = auction_in(category);
        let mut previous = auction.winning_value();

        for bid in bids {
            let challenger_value = bid.value;
            let took_lead = auction.handle_bid(bid);
            let current = auction.winning_value();

            prop_assert!(current >= previous);
            prop_assert_eq!(took_lead, challenger_value > previous);
            previous = current;
        }
    }

    #[test]
    fn prop_settles_to_first_submitted_maximum(
        category in category(),
        bids in prop::collection::vec(bid(), 1..40),
    ) {
        let mut auction = auction_in(category);
        for bid in bids.iter().cloned() {
            auction.handle_bid(bid);
        }

        let max = bids.iter().map(|b| b.value).max().unwrap_or(0);
        if max == 0 {
            // Nobody beat the auctioneer's opening bid.
            prop_assert_eq!(auction.winning_bid, Some(Bid::new("ana", 0)));
        } else {
            let first_max = bids.iter().find(|b| b.value == max).cloned();
            prop_assert_eq!(auction.winning_bid, first_max);
        }
    }

    #[test]
    fn prop_equal_challenger_never_replaces(
        category in category(),
        reigning in bid(),
        challenger_name in "[a-z]{1,6}",
    ) {
        let mut auction = auction_in(category);
        auction.winning_bid = Some(reigning.clone());

        let replaced = auction.handle_bid(Bid::new(challenger_name, reigning.value));
        prop_assert!(!replaced);
        prop_assert_eq!(auction.winning_bid, Some(reigning));
    }
}
