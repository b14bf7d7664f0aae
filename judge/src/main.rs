use std::path::PathBuf;

use clap::Parser;
use judge::{play_match, Contestant, Recorder, Standings, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// The strategy of each player, in seating order
    #[arg(num_args(2..), value_delimiter = ' ', value_enum)]
    strategies: Vec<Strategy>,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record the result of each game as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn print_standings(contestants: &[Contestant], standings: &Standings) {
    println!("\nStandings after {} games:\n", standings.games);
    println!(
        " {:<4} {:<8} | {:>8} | {:>8} | {:>6} | {:>9}",
        "seat", "player", "total", "mean", "wins", "penalties"
    );
    println!("{}", "-".repeat(58));
    for (p, contestant) in contestants.iter().enumerate() {
        let scores = contestant.scores();
        println!(
            " {:<4} {:<8} | {:>8} | {:>8.2} | {:>6} | {:>9}",
            p + 1,
            contestant.name(),
            scores.total(),
            scores.mean().unwrap_or(0.0),
            standings.wins[p],
            standings.penalties[p]
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let contestants: Vec<Contestant> = args
        .strategies
        .iter()
        .map(|&strategy| Contestant::new(strategy, StdRng::seed_from_u64(rng.gen())))
        .collect();

    let standings = play_match(&contestants, args.num_games, &mut rng, &mut recorder)?;
    print_standings(&contestants, &standings);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
