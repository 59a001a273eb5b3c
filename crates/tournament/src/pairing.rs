//! Pairing strategies
//!
//! A strategy reorders the roster in place; the tournament then slices it
//! into consecutive rooms of four. New strategies only need to implement
//! [`PairingStrategy`].

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::{Result, TournamentError};
use crate::team::Team;

/// Arranges a roster so that consecutive groups of four form the rooms
pub trait PairingStrategy {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Reorder `roster` for the next round
    fn arrange(&self, roster: &mut [Team], rng: &mut dyn RngCore);
}

/// Rooms drawn uniformly at random
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPairing;

impl PairingStrategy for RandomPairing {
    fn name(&self) -> &str {
        "random"
    }

    fn arrange(&self, roster: &mut [Team], rng: &mut dyn RngCore) {
        roster.shuffle(rng);
    }
}

/// Bracket folding: teams on similar standings meet each other.
///
/// The roster is shuffled to break ties, then stably sorted best first, so
/// the top four teams share a room, then the next four, and so on. This is a
/// single sort-and-slice; there are no pull-ups between brackets, so it only
/// approximates competition power pairing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingPairing;

impl PairingStrategy for FoldingPairing {
    fn name(&self) -> &str {
        "folding"
    }

    fn arrange(&self, roster: &mut [Team], rng: &mut dyn RngCore) {
        roster.shuffle(rng);
        roster.sort_by(|a, b| b.standing_cmp(a));
    }
}

/// Look up a pairing strategy by name
pub fn pairing_by_name(name: &str) -> Result<Box<dyn PairingStrategy>> {
    match name {
        "random" => Ok(Box::new(RandomPairing)),
        "folding" => Ok(Box::new(FoldingPairing)),
        _ => Err(TournamentError::UnknownPairing(name.to_string())),
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
