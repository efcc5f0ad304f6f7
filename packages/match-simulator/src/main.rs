//! Match Simulator CLI - plays randomised matches through the scoring core.
//!
//! Every match goes through the real lifecycle (setup, scoring with undo,
//! timed archive) so the summary doubles as a smoke test of the rules.

mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use output::{print_history, OutputWriter};
use points::{build_session, AppConfig, Sport};
use simulator::{GameResult, SimConfig, Simulator};
use tracing::{info, warn};
use types::{OutputFormat, SportArg};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Plays randomised matches through the scoring core")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Sport to play
    #[arg(long, default_value = "tennis")]
    sport: SportArg,

    /// Two players per side
    #[arg(long)]
    doubles: bool,

    /// Custom sport: count every tap as a set
    #[arg(long)]
    no_sets: bool,

    /// Custom sport: points per set
    #[arg(long, default_value = "10")]
    custom_target: u32,

    /// Sets a side needs to take the match
    #[arg(long, default_value = "2")]
    sets_to_win: u32,

    /// Taps per match for tally sports
    #[arg(long, default_value = "10")]
    tally_length: u32,

    /// Probability that player one wins a rally
    #[arg(long, default_value = "0.5")]
    p1_strength: f64,

    /// Probability of a mis-tap that gets undone
    #[arg(long, default_value = "0.05")]
    undo_rate: f64,

    /// Base seed; match N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// History capacity (overrides POINTS_HISTORY_CAPACITY)
    #[arg(long)]
    history_capacity: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(long, default_value = "summary")]
    output_format: OutputFormat,

    /// JSON-lines destination (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    for (name, p) in [("p1-strength", args.p1_strength), ("undo-rate", args.undo_rate)] {
        if !(0.0..=1.0).contains(&p) {
            return Err(format!("--{name} must be between 0 and 1, got {p}").into());
        }
    }

    let mut app_config = AppConfig::from_env()?;
    if let Some(capacity) = args.history_capacity {
        app_config.history_capacity = capacity.max(1);
    }
    let session = build_session().with_config(app_config).build()?;

    let sport = Sport::from(args.sport);
    let config = SimConfig {
        sport,
        doubles: args.doubles,
        uses_sets: !args.no_sets,
        custom_target: args.custom_target,
        sets_to_win: args.sets_to_win.max(1),
        tally_length: args.tally_length.max(1),
        p1_strength: args.p1_strength,
        undo_rate: args.undo_rate,
    };
    info!(?config, games = args.games, "starting simulation");

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let mut writer = match args.output_format {
        OutputFormat::Jsonl => Some(OutputWriter::new(args.output.as_deref())?),
        OutputFormat::Summary => None,
    };

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let mut sim = Simulator::new(base_seed.wrapping_add(game_num as u64), config.clone());
        match sim.simulate_match(&session) {
            Ok(result) => {
                if let Some(w) = writer.as_mut() {
                    if let Err(e) = w.write_game(game_num, &result) {
                        warn!("Failed to write match {}: {}", game_num, e);
                    }
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", game_num, e);
            }
        }
    }

    if let Some(w) = writer {
        w.finish()?;
    } else {
        print_summary(sport, &results, errors, start.elapsed(), args.games);
        print_history(&session.history().grouped_by_day());
    }

    Ok(())
}

fn print_summary(
    sport: Sport,
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== {} Simulation Summary ===", sport);
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }

    let n = results.len() as f64;
    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    let (mut rallies, mut undos, mut clock) = (0u64, 0u64, 0u64);
    for r in results {
        match r.record.points_p1.cmp(&r.record.points_p2) {
            std::cmp::Ordering::Greater => wins[0] += 1,
            std::cmp::Ordering::Less => wins[1] += 1,
            std::cmp::Ordering::Equal => draws += 1,
        }
        rallies += r.rallies as u64;
        undos += r.undos as u64;
        clock += r.record.elapsed_secs.unwrap_or(0);
    }

    println!("\n=== Results by Side ===");
    for (side, w) in wins.iter().enumerate() {
        println!(
            "Player {}: wins={} ({:.1}%)",
            side + 1,
            w,
            *w as f64 / n * 100.0
        );
    }
    if draws > 0 {
        println!("Draws: {}", draws);
    }
    println!(
        "Average rallies per match: {:.1}, undone taps: {:.1}, match clock: {}",
        rallies as f64 / n,
        undos as f64 / n,
        points::services::format_elapsed((clock as f64 / n).round() as u64)
    );
}
