//! Error types for the tournament simulator

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

/// Errors returned while configuring or running a tournament
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Pairing strategy name did not match any known strategy
    #[error("unknown pairing method: {0}")]
    UnknownPairing(String),

    /// A debater profile was given a negative or non-finite variance
    #[error("invalid variance {0}: must be finite and >= 0")]
    InvalidVariance(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
