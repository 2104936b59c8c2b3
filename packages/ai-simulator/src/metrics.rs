//! Per-game records written to the JSONL output.

use engine::domain::cumulative_payouts;
use engine::{Category, Money};
use serde::Serialize;

use crate::simulator::GameResult;

#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub duration_ms: f64,
    pub seats: Vec<SeatMetrics>,
    pub winners: Vec<String>,
    pub phases: Vec<PhaseMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMetrics {
    pub seat: usize,
    pub name: String,
    pub strategy: String,
    pub final_money: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseMetrics {
    pub phase_no: usize,
    pub auctions: usize,
    /// Money paid for sold items this phase, self-purchases included.
    pub turnover: Money,
    /// Category names, best first; empty places are null.
    pub podium: [Option<String>; 3],
    /// Value of one collected item per category, in [`Category::ALL`] order.
    pub item_values: [Money; Category::COUNT],
}

pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    strategies: &[&str],
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let seats = result
        .seats
        .iter()
        .zip(strategies)
        .enumerate()
        .map(|(seat, (name, strategy))| SeatMetrics {
            seat,
            name: name.clone(),
            strategy: (*strategy).to_string(),
            final_money: result.final_scores.get(name).copied().unwrap_or(0),
        })
        .collect();

    let phases = result
        .phases
        .iter()
        .enumerate()
        .map(|(i, phase)| PhaseMetrics {
            phase_no: i + 1,
            auctions: phase.auctions().len(),
            turnover: phase
                .auctions()
                .iter()
                .filter_map(|auction| auction.winning_bid.as_ref())
                .map(|bid| bid.value)
                .sum(),
            podium: phase
                .winners()
                .places()
                .map(|place| place.map(|category| category.name().to_string())),
            item_values: cumulative_payouts(&result.phases[..=i]),
        })
        .collect();

    GameMetrics {
        game_id,
        seed,
        duration_ms,
        seats,
        winners: result.winners().into_iter().map(str::to_string).collect(),
        phases,
    }
}
