use crate::domain::rules::PHASE_THRESHOLD;
use crate::domain::test_gens::{auction_in, phase_with_counts};
use crate::domain::{cumulative_payouts, Category, Phase, Podium};

use crate::domain::category::Category::{
    DanielMelim, ManuelCarvalho, RafaelSilveira, RamonMartins, SigridThaler,
};

#[test]
fn ranks_by_points_when_totals_differ() {
    let phase = phase_with_counts([1, 2, 3, 4, 5]);

    assert_eq!(
        phase.ranked_categories(),
        [
            RafaelSilveira,
            RamonMartins,
            DanielMelim,
            SigridThaler,
            ManuelCarvalho
        ]
    );
    assert!(phase.is_over());
}

#[test]
fn equal_totals_rank_by_tiebreak_weight() {
    let phase = phase_with_counts([1, 1, 1, 1, 1]);

    assert_eq!(phase.ranked_categories(), Category::ALL);
    assert!(!phase.is_over());
}

#[test]
fn stored_points_exclude_tiebreak_weight() {
    let phase = phase_with_counts([2, 0, 0, 0, 3]);
    assert_eq!(phase.points(ManuelCarvalho), 20);
    assert_eq!(phase.points(RafaelSilveira), 30);
    assert_eq!(phase.points(SigridThaler), 0);
}

#[test]
fn lone_scorer_takes_the_podium_alone() {
    let phase = phase_with_counts([5, 0, 0, 0, 0]);

    assert_eq!(
        phase.winners(),
        Podium {
            first: ManuelCarvalho,
            second: None,
            third: None,
        }
    );
    assert_eq!(phase.payouts(), [30, 0, 0, 0, 0]);
}

#[test]
fn two_scorers_leave_third_place_empty() {
    let phase = phase_with_counts([0, 0, 2, 5, 0]);

    assert_eq!(
        phase.winners(),
        Podium {
            first: RamonMartins,
            second: Some(DanielMelim),
            third: None,
        }
    );
    assert_eq!(phase.payouts(), [0, 0, 20, 30, 0]);
}

#[test]
fn phase_ends_exactly_at_threshold() {
    let mut phase = phase_with_counts([4, 0, 0, 0, 0]);
    assert!(!phase.is_over());
    assert!(phase.closes_with(ManuelCarvalho));
    assert!(!phase.closes_with(SigridThaler));

    phase.record(auction_in(ManuelCarvalho));
    assert_eq!(phase.points(ManuelCarvalho), PHASE_THRESHOLD);
    assert!(phase.is_over());
    assert_eq!(phase.auctions().len(), 5);
}

#[test]
fn cumulative_payouts_of_no_phases_are_zero() {
    assert_eq!(cumulative_payouts(&[]), [0; Category::COUNT]);
}

#[test]
fn single_phase_cumulative_equals_phase_payouts() {
    let phase = phase_with_counts([0, 0, 3, 4, 5]);
    assert_eq!(cumulative_payouts(&[phase.clone()]), phase.payouts());
    assert_eq!(phase.payouts(), [0, 0, 10, 20, 30]);
}

#[test]
fn back_pay_only_reaches_categories_still_placing() {
    // Phase 1: Rafael 30, Ramon 20, Daniel 10.
    let first = phase_with_counts([0, 0, 3, 4, 5]);
    // Phase 2: Manuel 30, Daniel 20, Sigrid 10.
    let second = phase_with_counts([5, 1, 2, 0, 0]);

    assert_eq!(cumulative_payouts(&[first, second]), [30, 10, 30, 0, 0]);
}

#[test]
fn payouts_accumulate_across_many_phases() {
    let phases = vec![
        phase_with_counts([5, 4, 3, 0, 0]), // Manuel 30, Sigrid 20, Daniel 10
        phase_with_counts([3, 5, 0, 4, 0]), // Sigrid 30, Ramon 20, Manuel 10
        phase_with_counts([0, 2, 5, 0, 3]), // Daniel 30, Rafael 20, Sigrid 10
        phase_with_counts([4, 3, 0, 0, 5]), // Rafael 30, Manuel 20, Sigrid 10
    ];

    // Manuel 20 + (30 + 10 + 0), Sigrid 10 + (20 + 30 + 10), Rafael 30 + 20.
    assert_eq!(cumulative_payouts(&phases), [60, 70, 0, 0, 50]);
}

#[test]
fn incomplete_latest_phase_still_pays_its_podium() {
    let phases = vec![
        phase_with_counts([0, 5, 2, 0, 0]), // Sigrid 30, Daniel 20
        phase_with_counts([0, 1, 2, 0, 0]), // Daniel 30, Sigrid 20
    ];

    let payouts = cumulative_payouts(&phases);
    assert_eq!(payouts[SigridThaler.index()], 50);
    assert_eq!(payouts[DanielMelim.index()], 50);
    assert!(!phases[1].is_over());
}

#[test]
fn empty_phase_ranks_by_tiebreak_and_pays_first_only() {
    let phase = Phase::new();
    assert_eq!(phase.ranked_categories(), Category::ALL);
    assert_eq!(phase.winners().second, None);
    assert_eq!(phase.payouts(), [30, 0, 0, 0, 0]);
}
