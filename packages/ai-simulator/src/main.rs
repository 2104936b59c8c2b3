//! AI Simulator CLI - plays whole auction games in memory to compare strategies.

mod metrics;
mod output;
mod simulator;
mod types;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use engine::telemetry::init_tracing;
use engine::{GameConfig, Money};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{failure_kind, GameResult, Simulator};
use tracing::{info, warn};
use types::StrategyKind;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory auction game simulator for strategy evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Strategy per seat, in turn order (2 to 5 seats)
    #[arg(long, value_delimiter = ',', default_value = "valuer,random,first-item")]
    seats: Vec<StrategyKind>,

    /// Base seed; game N uses seed + N. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting money per seat (overrides AUCTION_STARTING_MONEY)
    #[arg(long)]
    starting_money: Option<Money>,

    /// Write one JSON record per finished game to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(if args.verbose { "debug" } else { "warn" });

    let mut config = GameConfig::from_env()?;
    if let Some(money) = args.starting_money {
        config.starting_money = money;
    }
    let strategies: Vec<&str> = args.seats.iter().map(|kind| kind.registry_name()).collect();
    info!(games = args.games, seats = ?strategies, "starting simulation");

    let mut output = args.output.as_deref().map(OutputWriter::new).transpose()?;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut failures: BTreeMap<&'static str, u32> = BTreeMap::new();

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num));
        let simulator = Simulator::new(game_seed, config);

        match simulator.simulate_game(&args.seats).await {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                if let Some(writer) = output.as_mut() {
                    let metrics =
                        build_game_metrics(game_num, game_seed, &strategies, &result, duration_ms);
                    if let Err(e) = writer.write_game(&metrics) {
                        warn!(game = game_num, error = %e, "failed to write game record");
                    }
                }
                info!(game = game_num, scores = ?result.final_scores, "game completed");
                results.push(result);
            }
            Err(e) => {
                let kind = failure_kind(e.as_ref());
                *failures.entry(kind).or_default() += 1;
                warn!(game = game_num, seed = game_seed, kind, error = %e, "game failed");
            }
        }
    }

    if let Some(writer) = output {
        let path = writer.finish()?;
        println!("Results written to: {}", path.display());
    }
    print_summary(&results, &args.seats, &failures, start.elapsed(), args.games);
    Ok(())
}

fn print_summary(
    results: &[GameResult],
    seats: &[StrategyKind],
    failures: &BTreeMap<&'static str, u32>,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    let errors: u32 = failures.values().sum();
    if errors > 0 {
        println!("Errors: {}", errors);
        for (kind, count) in failures {
            println!("  {}: {}", kind, count);
        }
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = vec![0u32; seats.len()];
    let mut total_money = vec![0u64; seats.len()];
    let mut max_money = vec![Money::MIN; seats.len()];
    let mut min_money = vec![Money::MAX; seats.len()];

    for result in results {
        let winners = result.winners();
        for (seat, name) in result.seats.iter().enumerate() {
            let money = result.final_scores.get(name).copied().unwrap_or(0);
            total_money[seat] += u64::from(money);
            max_money[seat] = max_money[seat].max(money);
            min_money[seat] = min_money[seat].min(money);
            if winners.contains(&name.as_str()) {
                wins[seat] += 1;
            }
        }
    }

    println!("\n=== Results by Seat ===");
    for (seat, kind) in seats.iter().enumerate() {
        let avg = total_money[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat,
            kind.registry_name(),
            avg,
            min_money[seat],
            max_money[seat],
            wins[seat],
            win_rate
        );
    }
}
