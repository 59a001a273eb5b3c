//! Tournament controller
//!
//! Pads or trims the roster to full rooms, then runs a fixed number of rounds
//! with a pairing strategy. Ratings carry over on the teams; score and speaks
//! are per-tournament.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::elo::ROOM_SIZE;
use crate::error::{Result, TournamentError};
use crate::pairing::{pairing_by_name, PairingStrategy};
use crate::report::TournamentReport;
use crate::room::{resolve_room, RoomResult};
use crate::team::Team;

/// Rooms of a single round, in the order they were resolved
pub type RoundResult = Vec<RoomResult>;

/// A tournament over an owned roster.
///
/// The driver moves a roster in and takes it back with
/// [`Tournament::into_teams`] once the simulation has run.
#[derive(Debug)]
pub struct Tournament {
    n_rounds: usize,
    teams: Vec<Team>,
    config: SimConfig,
    rng: StdRng,
    round_results: Vec<RoundResult>,
    pairing: Option<String>,
}

impl Tournament {
    /// Create a tournament seeded from system entropy.
    ///
    /// See [`Tournament::with_seed`] for the roster rules.
    pub fn new(
        n_rounds: usize,
        n_teams: usize,
        teams: Vec<Team>,
        config: SimConfig,
    ) -> Result<Self> {
        Self::with_rng(n_rounds, n_teams, teams, config, StdRng::from_entropy())
    }

    /// Create a tournament with a reproducible random source.
    ///
    /// `n_teams` is rounded up to a multiple of four by adding swing teams.
    /// A roster still short of `n_teams` is filled with random teams; a longer
    /// one keeps only its first `n_teams` entries. Every team is reset, and a
    /// rating below the configured floor is raised to it.
    pub fn with_seed(
        n_rounds: usize,
        n_teams: usize,
        teams: Vec<Team>,
        config: SimConfig,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(n_rounds, n_teams, teams, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        n_rounds: usize,
        mut n_teams: usize,
        mut teams: Vec<Team>,
        config: SimConfig,
        mut rng: StdRng,
    ) -> Result<Self> {
        if n_rounds == 0 {
            return Err(TournamentError::InvalidConfig(
                "a tournament needs at least one round".to_string(),
            ));
        }
        config.validate()?;

        if n_teams % ROOM_SIZE != 0 {
            let swings = ROOM_SIZE - n_teams % ROOM_SIZE;
            n_teams += swings;
            info!(swings, n_teams, "adding swing teams");
            for i in 1..=swings {
                teams.push(Team::swing(i, &config, &mut rng)?);
            }
        }

        if n_teams > teams.len() {
            let missing = n_teams - teams.len();
            info!(missing, "generating random teams");
            for _ in 0..missing {
                teams.push(Team::random(&config, &mut rng)?);
            }
        } else if n_teams < teams.len() {
            info!(culled = teams.len() - n_teams, "roster exceeds n_teams, truncating");
            teams.truncate(n_teams);
        }

        for team in &mut teams {
            team.reset();
            team.clamp_rating(config.rating.rating_floor);
        }

        Ok(Self {
            n_rounds,
            teams,
            config,
            rng,
            round_results: Vec::new(),
            pairing: None,
        })
    }

    /// Run every round with the named pairing strategy.
    ///
    /// An unknown name fails before any round is played.
    pub fn simulate_named(&mut self, pairing: &str) -> Result<()> {
        let strategy = pairing_by_name(pairing)?;
        self.simulate(strategy.as_ref());
        Ok(())
    }

    /// Run every round, then sort the roster best first
    pub fn simulate(&mut self, strategy: &dyn PairingStrategy) {
        for round in 0..self.n_rounds {
            debug!(round = round + 1, pairing = strategy.name(), "pairing round");
            strategy.arrange(&mut self.teams, &mut self.rng);

            let rating = &self.config.rating;
            let rng = &mut self.rng;
            let rooms: RoundResult = self
                .teams
                .chunks_exact_mut(ROOM_SIZE)
                .map(|room| resolve_room(room, rating, rng))
                .collect();
            self.round_results.push(rooms);
        }

        self.teams.sort_by(|a, b| b.standing_cmp(a));
        self.pairing = Some(strategy.name().to_string());

        if let Some(winner) = self.teams.first() {
            info!(
                teams = self.teams.len(),
                rounds = self.n_rounds,
                winner = winner.name(),
                points = winner.score(),
                "tournament finished"
            );
        }
    }

    pub fn n_rounds(&self) -> usize {
        self.n_rounds
    }

    /// Name of the pairing strategy last simulated with
    pub fn pairing(&self) -> Option<&str> {
        self.pairing.as_deref()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Current roster; sorted best first after [`Tournament::simulate`]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Round-by-round room results
    pub fn round_results(&self) -> &[RoundResult] {
        &self.round_results
    }

    /// Hand the roster back to the caller
    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }

    /// Snapshot of standings and round history
    pub fn report(&self, name: &str) -> TournamentReport {
        TournamentReport::from_tournament(name, self)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
