//! Teams: two debaters fielded together, with a persistent rating

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Builder;

use crate::config::{RatingConfig, SimConfig};
use crate::debater::DebaterProfile;
use crate::elo;
use crate::error::Result;

/// A debate team.
///
/// Identity is the team name alone: two `Team` values with the same name are
/// equal whatever their ratings. Generated names are UUIDs, so collisions are
/// not handled.
///
/// `score` and `speaks` only mean something inside one tournament and are
/// cleared by [`Team::reset`]. `rating` carries over between tournaments.
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    debaters: [DebaterProfile; 2],
    rating: f64,
    score: u32,
    speaks: f64,
    swing: bool,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        debater_a: DebaterProfile,
        debater_b: DebaterProfile,
        starting_rating: f64,
    ) -> Self {
        Self {
            name: name.into(),
            debaters: [debater_a, debater_b],
            rating: starting_rating,
            score: 0,
            speaks: 0.0,
            swing: false,
        }
    }

    /// Generate a team of two random debaters with a random UUID name
    pub fn random<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<Self> {
        let name = random_name(rng);
        Self::random_named(name, config, rng)
    }

    /// Generate a swing team, numbered from 1
    pub fn swing<R: Rng + ?Sized>(
        number: usize,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let mut team = Self::random_named(format!("SWING {}", number), config, rng)?;
        team.swing = true;
        Ok(team)
    }

    fn random_named<R: Rng + ?Sized>(
        name: String,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let a = DebaterProfile::random(&config.sampler, rng)?;
        let b = DebaterProfile::random(&config.sampler, rng)?;
        Ok(Self::new(name, a, b, config.rating.starting_rating))
    }

    /// Builder-style override of the current rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn debaters(&self) -> &[DebaterProfile; 2] {
        &self.debaters
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Points earned in the current tournament
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Sum of all room performances in the current tournament
    pub fn speaks(&self) -> f64 {
        self.speaks
    }

    /// Whether this team was added only to fill out the rooms
    pub fn is_swing(&self) -> bool {
        self.swing
    }

    /// Expected room performance: the sum of both debaters' means
    pub fn true_strength(&self) -> f64 {
        self.debaters.iter().map(DebaterProfile::mean).sum()
    }

    /// Clear per-tournament state; the rating is kept
    pub fn reset(&mut self) {
        self.score = 0;
        self.speaks = 0.0;
    }

    /// Sample this team's performance in one room.
    ///
    /// Freshly sampled on every call.
    pub fn round_performance<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.debaters[0].sample_speech(rng) + self.debaters[1].sample_speech(rng)
    }

    /// Record the rank and performance earned in one room
    pub(crate) fn record_room(&mut self, points: u32, performance: f64) {
        self.score += points;
        self.speaks += performance;
    }

    /// Total expected score against every other team in `field`.
    ///
    /// The team itself is skipped if it is part of the field.
    pub fn expected_score<'a, I>(&self, field: I, config: &RatingConfig) -> f64
    where
        I: IntoIterator<Item = &'a Team>,
    {
        field
            .into_iter()
            .filter(|other| *other != self)
            .map(|other| elo::expected_score(self.rating, other.rating, config.scale))
            .sum()
    }

    /// Apply one Elo update, never dropping below the rating floor
    pub fn update_rating(&mut self, expected: f64, actual: f64, config: &RatingConfig) {
        self.rating += elo::rating_delta(expected, actual, config);
        self.clamp_rating(config.rating_floor);
    }

    /// Raise the rating to `floor` if it sits below it
    pub(crate) fn clamp_rating(&mut self, floor: f64) {
        self.rating = self.rating.max(floor);
    }

    /// Compare tournament standing: points first, then speaks
    pub fn standing_cmp(&self, other: &Team) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.speaks.total_cmp(&other.speaks))
    }
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}): elo:{:.1}, points:{}, speaks:{:.2}",
            self.name, self.rating, self.score, self.speaks
        )
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
