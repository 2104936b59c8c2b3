use std::ops::RangeInclusive;

use super::Money;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;
pub const PHASES: u8 = 4;

pub const STARTING_MONEY: Money = 100;
pub const POINTS_PER_ITEM: u32 = 10;
/// A phase ends once any category holds this many points (5 items).
pub const PHASE_THRESHOLD: u32 = 50;
/// Payouts for first, second and third place in a phase.
pub const RANK_PAYOUTS: [Money; 3] = [30, 20, 10];

pub fn player_range() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

// Items dealt to each participant at the start of phases 1..=4.
const DEAL_TABLE: [[usize; PHASES as usize]; MAX_PLAYERS - MIN_PLAYERS + 1] = [
    [12, 8, 8, 0], // 2 players
    [10, 6, 6, 0], // 3 players
    [8, 4, 4, 0],  // 4 players
    [8, 3, 3, 0],  // 5 players
];

/// Items dealt to every participant when phase `phase_no` (1-based) starts.
pub fn items_per_phase(players: usize, phase_no: u8) -> Option<usize> {
    if !player_range().contains(&players) || phase_no == 0 || phase_no > PHASES {
        return None;
    }
    Some(DEAL_TABLE[players - MIN_PLAYERS][usize::from(phase_no - 1)])
}
