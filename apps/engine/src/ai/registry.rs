//! How to register a strategy
//!
//! 1) Implement `Participant` for your type in its module.
//! 2) Add a new `StrategyFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use std::sync::Arc;

use crate::ai::{FirstItemPlayer, Participant, RandomPlayer, Valuer};

/// Factory definition for constructing strategies.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(participant: String, seed: Option<u64>) -> Arc<dyn Participant>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: FirstItemPlayer::NAME,
        version: FirstItemPlayer::VERSION,
        make: make_first_item,
    },
    StrategyFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    StrategyFactory {
        name: Valuer::NAME,
        version: Valuer::VERSION,
        make: make_valuer,
    },
];

/// Returns the statically registered strategy factories.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

/// Finds a registered strategy factory by its name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_first_item(participant: String, _seed: Option<u64>) -> Arc<dyn Participant> {
    Arc::new(FirstItemPlayer::new(participant))
}

fn make_random_player(participant: String, seed: Option<u64>) -> Arc<dyn Participant> {
    Arc::new(RandomPlayer::new(participant, seed))
}

fn make_valuer(participant: String, _seed: Option<u64>) -> Arc<dyn Participant> {
    Arc::new(Valuer::new(participant))
}
