//! Simulation configuration
//!
//! Every knob of the rating model and of debater generation lives here so a
//! driver can tune them from a TOML file. Missing keys fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TournamentError};

/// Default starting Elo for new teams
pub const DEFAULT_ELO: f64 = 1000.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Logistic scale: a rating gap of this size means 10:1 expected odds
pub const ELO_SCALE: f64 = 400.0;

/// Ratings never drop below this value
pub const RATING_FLOOR: f64 = 100.0;

/// Parameters of the Elo update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub k_factor: f64,
    pub scale: f64,
    pub rating_floor: f64,
    pub starting_rating: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: K_FACTOR,
            scale: ELO_SCALE,
            rating_floor: RATING_FLOOR,
            starting_rating: DEFAULT_ELO,
        }
    }
}

/// Distributions used to generate random debaters.
///
/// A debater's mean speak is drawn from `Normal(mean_center, sqrt(mean_spread))`
/// and its variance from `Uniform[variance_min, variance_max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub mean_center: f64,
    /// Variance (not standard deviation) of the mean-speak distribution
    pub mean_spread: f64,
    pub variance_min: f64,
    pub variance_max: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            mean_center: 75.0,
            mean_spread: 5.0,
            variance_min: 0.0,
            variance_max: 5.0,
        }
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub rating: RatingConfig,
    pub sampler: SamplerConfig,
}

impl SimConfig {
    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        Ok(config)
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every knob is in a usable range
    pub fn validate(&self) -> Result<()> {
        self.rating.validate()?;
        self.sampler.validate()
    }
}

impl RatingConfig {
    pub fn validate(&self) -> Result<()> {
        check_finite(&[
            ("rating.k_factor", self.k_factor),
            ("rating.scale", self.scale),
            ("rating.rating_floor", self.rating_floor),
            ("rating.starting_rating", self.starting_rating),
        ])?;
        if self.k_factor <= 0.0 {
            return Err(invalid(format!(
                "rating.k_factor must be positive, got {}",
                self.k_factor
            )));
        }
        if self.scale <= 0.0 {
            return Err(invalid(format!(
                "rating.scale must be positive, got {}",
                self.scale
            )));
        }
        if self.starting_rating < self.rating_floor {
            return Err(invalid(format!(
                "rating.starting_rating ({}) is below rating.rating_floor ({})",
                self.starting_rating, self.rating_floor
            )));
        }
        Ok(())
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<()> {
        check_finite(&[
            ("sampler.mean_center", self.mean_center),
            ("sampler.mean_spread", self.mean_spread),
            ("sampler.variance_min", self.variance_min),
            ("sampler.variance_max", self.variance_max),
        ])?;
        if self.mean_spread < 0.0 {
            return Err(invalid(format!(
                "sampler.mean_spread must be >= 0, got {}",
                self.mean_spread
            )));
        }
        if self.variance_min < 0.0 || self.variance_max < self.variance_min {
            return Err(invalid(format!(
                "sampler variance range [{}, {}) is invalid",
                self.variance_min, self.variance_max
            )));
        }
        Ok(())
    }
}

fn check_finite(values: &[(&str, f64)]) -> Result<()> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, value)) => Err(invalid(format!("{} must be finite, got {}", name, value))),
        None => Ok(()),
    }
}

fn invalid(msg: String) -> TournamentError {
    TournamentError::InvalidConfig(msg)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
