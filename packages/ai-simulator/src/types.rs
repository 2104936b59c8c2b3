//! Shared types for the simulator.

use clap::ValueEnum;

/// Strategies a seat can be filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    FirstItem,
    Random,
    Valuer,
}

impl StrategyKind {
    /// Name the strategy is registered under in the engine.
    pub fn registry_name(self) -> &'static str {
        match self {
            StrategyKind::FirstItem => "FirstItem",
            StrategyKind::Random => "Random",
            StrategyKind::Valuer => "Valuer",
        }
    }
}
