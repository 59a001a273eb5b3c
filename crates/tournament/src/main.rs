//! Tournament simulator CLI
//!
//! Warm up ratings over many small tournaments drawn from a shared pool, then
//! run one tournament with the whole pool and print the leaderboard.

use anyhow::{bail, Context, Result};
use clap::Parser;
use debate_tournament::{pairing_by_name, SimConfig, Team, Tournament};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "debate-sim", version, about = "Simulate debate tournaments and track Elo")]
struct Cli {
    /// Number of teams generated for the pool
    #[arg(long, default_value_t = 1000)]
    pool: usize,

    /// Number of warm-up tournaments used to settle ratings
    #[arg(long, default_value_t = 200)]
    warmup: usize,

    /// Teams drawn from the pool for each warm-up tournament
    #[arg(long, default_value_t = 100)]
    warmup_size: usize,

    /// Rounds per tournament
    #[arg(long, default_value_t = 6)]
    rounds: usize,

    /// Pairing strategy: random or folding
    #[arg(long, default_value = "folding")]
    pairing: String,

    /// TOML file overriding rating and sampler parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final tournament report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print room results for every round of the final tournament
    #[arg(long)]
    show_rounds: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    let strategy = pairing_by_name(&cli.pairing)?;
    if cli.pool == 0 {
        bail!("--pool must be at least 1");
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut pool: Vec<Team> = (0..cli.pool)
        .map(|_| Team::random(&config, &mut rng))
        .collect::<debate_tournament::Result<_>>()?;
    info!(teams = pool.len(), "generated team pool");

    let warmup_size = cli.warmup_size.min(pool.len());
    for i in 0..cli.warmup {
        pool.shuffle(&mut rng);
        let entrants: Vec<Team> = pool.drain(..warmup_size).collect();
        let mut tournament =
            Tournament::with_seed(cli.rounds, warmup_size, entrants, config.clone(), rng.gen())?;
        tournament.simulate(strategy.as_ref());
        pool.extend(tournament.into_teams().into_iter().filter(|t| !t.is_swing()));

        if (i + 1) % 50 == 0 {
            info!(done = i + 1, total = cli.warmup, "warm-up tournaments");
        }
    }

    let n_teams = pool.len();
    let mut finals = Tournament::with_seed(cli.rounds, n_teams, pool, config, rng.gen())?;
    finals.simulate(strategy.as_ref());

    let report = finals.report("Final");
    report.print_report();

    if cli.show_rounds {
        print!("{}", report.generate_round_log());
    }

    if let Some(path) = &cli.json {
        report
            .save(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "saved report");
    }

    Ok(())
}
