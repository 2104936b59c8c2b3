//! Property tests for the phase ledger.

use proptest::prelude::*;

use crate::domain::rules::{PHASE_THRESHOLD, POINTS_PER_ITEM};
use crate::domain::test_gens::{item_counts, phase_with_counts};
use crate::domain::test_prelude;
use crate::domain::{cumulative_payouts, Category};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_points_are_item_multiples(counts in item_counts()) {
        let phase = phase_with_counts(counts);
        for (category, count) in Category::ALL.into_iter().zip(counts) {
            prop_assert_eq!(phase.points(category), count as u32 * POINTS_PER_ITEM);
        }
        let reached = counts
            .iter()
            .any(|&c| c as u32 * POINTS_PER_ITEM >= PHASE_THRESHOLD);
        prop_assert_eq!(phase.is_over(), reached);
    }

    #[test]
    fn prop_ranking_is_a_permutation_sorted_by_points(counts in item_counts()) {
        let phase = phase_with_counts(counts);
        let ranked = phase.ranked_categories();

        let mut sorted = ranked;
        sorted.sort();
        prop_assert_eq!(sorted, Category::ALL);

        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(phase.points(a) >= phase.points(b));
            if phase.points(a) == phase.points(b) {
                prop_assert!(a.tiebreak() > b.tiebreak());
            }
        }
    }

    #[test]
    fn prop_unscored_categories_never_place_below_first(counts in item_counts()) {
        let podium = phase_with_counts(counts).winners();
        for category in [podium.second, podium.third].into_iter().flatten() {
            prop_assert!(counts[category.index()] > 0);
        }
    }

    #[test]
    fn prop_no_back_pay_off_the_podium(
        history in prop::collection::vec(item_counts(), 1..5),
    ) {
        let phases: Vec<_> = history.into_iter().map(phase_with_counts).collect();
        let cumulative = cumulative_payouts(&phases);
        let latest = phases.last().map(|p| p.payouts()).unwrap_or_default();

        for category in Category::ALL {
            let i = category.index();
            if latest[i] == 0 {
                prop_assert_eq!(cumulative[i], 0);
            } else {
                prop_assert!(cumulative[i] >= latest[i]);
            }
        }
    }
}
