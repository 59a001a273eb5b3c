//! Debater performance model
//!
//! A debater is nothing more than a normal distribution of speaker scores.
//! Each speech is one draw from it.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::SamplerConfig;
use crate::error::{Result, TournamentError};

/// Hidden skill of a single debater
#[derive(Debug, Clone, Copy)]
pub struct DebaterProfile {
    mean: f64,
    variance: f64,
    speech: Normal<f64>,
}

impl DebaterProfile {
    /// Create a profile with an explicit mean and variance.
    ///
    /// Zero variance is allowed and makes every speech score exactly `mean`.
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(TournamentError::InvalidVariance(variance));
        }
        if !mean.is_finite() {
            return Err(TournamentError::InvalidConfig(format!(
                "debater mean must be finite, got {}",
                mean
            )));
        }
        let speech = Normal::new(mean, variance.sqrt())
            .map_err(|_| TournamentError::InvalidVariance(variance))?;
        Ok(Self {
            mean,
            variance,
            speech,
        })
    }

    /// Generate a random debater from the configured distributions.
    ///
    /// Fails if `config` describes an unusable distribution.
    pub fn random<R: Rng + ?Sized>(config: &SamplerConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let means = Normal::new(config.mean_center, config.mean_spread.sqrt())
            .map_err(|e| TournamentError::InvalidConfig(format!("sampler mean: {}", e)))?;
        let mean = means.sample(rng);
        let variance = if config.variance_max > config.variance_min {
            rng.gen_range(config.variance_min..config.variance_max)
        } else {
            config.variance_min
        };
        Self::new(mean, variance)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Sample one speech score
    pub fn sample_speech<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.speech.sample(rng)
    }
}

#[cfg(test)]
#[path = "debater_tests.rs"]
mod debater_tests;
