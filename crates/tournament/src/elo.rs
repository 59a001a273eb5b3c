//! Elo rating calculation for multi-team rooms
//!
//! A room of four is scored as a round-robin: every team expects
//! `1 / (1 + 10^((other - self) / D))` points against each other team, and
//! earns its ordinal rank (0 to 3) as the actual score.

use crate::config::RatingConfig;
use crate::team::Team;

/// Number of teams in a room
pub const ROOM_SIZE: usize = 4;

/// Expected score of a team rated `rating` against one rated `opponent`
pub fn expected_score(rating: f64, opponent: f64, scale: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / scale))
}

/// Rating change for one room.
///
/// K is divided by the number of opponents so the largest possible swing in a
/// room stays at K regardless of room size.
pub fn rating_delta(expected: f64, actual: f64, config: &RatingConfig) -> f64 {
    config.k_factor / (ROOM_SIZE - 1) as f64 * (actual - expected)
}

/// Rating change recorded for one team in one room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingUpdate {
    pub expected: f64,
    pub actual: f64,
    pub before: f64,
    pub after: f64,
}

impl RatingUpdate {
    pub fn change(&self) -> f64 {
        self.after - self.before
    }
}

/// Update the ratings of every team in `room` from their outcomes.
///
/// `outcomes[i]` is the points earned by `room[i]`. Expected scores are all
/// taken from the ratings as they were before this call, then applied.
/// Returns the per-team updates in room order.
pub fn update_ratings(
    room: &mut [Team],
    outcomes: &[u32],
    config: &RatingConfig,
) -> Vec<RatingUpdate> {
    assert_eq!(
        room.len(),
        outcomes.len(),
        "every team in the room needs an outcome"
    );

    let expected: Vec<f64> = room
        .iter()
        .map(|team| team.expected_score(room.iter(), config))
        .collect();

    room.iter_mut()
        .zip(expected)
        .zip(outcomes)
        .map(|((team, expected), &actual)| {
            let before = team.rating();
            team.update_rating(expected, actual as f64, config);
            RatingUpdate {
                expected,
                actual: actual as f64,
                before,
                after: team.rating(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
