//! Room adjudication
//!
//! Four teams each produce one performance sample. The lowest performance
//! takes 0 points and the highest takes 3; points are rank, not margin.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::RatingConfig;
use crate::elo::{self, ROOM_SIZE};
use crate::team::Team;

/// One team's result in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub team: String,
    /// Points earned, 0 (last) to 3 (first)
    pub rank: u32,
    pub performance: f64,
    pub rating_before: f64,
    pub rating_after: f64,
}

/// Result of one room, placements ordered from last to first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResult {
    pub placements: Vec<Placement>,
}

impl RoomResult {
    /// Rank earned by the named team, if it was in this room
    pub fn rank_of(&self, team: &str) -> Option<u32> {
        self.placements
            .iter()
            .find(|p| p.team == team)
            .map(|p| p.rank)
    }

    /// Team names from first place to last
    pub fn winners_first(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().rev().map(|p| p.team.as_str())
    }
}

/// Resolve a room by sampling each team's performance
pub fn resolve_room<R: Rng + ?Sized>(
    room: &mut [Team],
    config: &RatingConfig,
    rng: &mut R,
) -> RoomResult {
    resolve_room_with(room, config, |team| team.round_performance(rng))
}

/// Resolve a room using `perform` to produce each team's performance.
///
/// `perform` is called exactly once per team, in room order. Equal
/// performances keep room order, so the earlier team takes the lower rank.
///
/// # Panics
///
/// Panics if the room does not hold exactly four teams.
pub fn resolve_room_with<F>(
    room: &mut [Team],
    config: &RatingConfig,
    mut perform: F,
) -> RoomResult
where
    F: FnMut(&Team) -> f64,
{
    assert_eq!(
        room.len(),
        ROOM_SIZE,
        "a room must hold exactly {} teams",
        ROOM_SIZE
    );

    let performances: Vec<f64> = room.iter().map(&mut perform).collect();

    let mut order: Vec<usize> = (0..room.len()).collect();
    order.sort_by(|&a, &b| performances[a].total_cmp(&performances[b]));

    let mut outcomes = vec![0u32; room.len()];
    for (rank, &idx) in order.iter().enumerate() {
        outcomes[idx] = rank as u32;
        room[idx].record_room(rank as u32, performances[idx]);
    }

    let updates = elo::update_ratings(room, &outcomes, config);

    let placements: Vec<Placement> = order
        .iter()
        .map(|&idx| Placement {
            team: room[idx].name().to_string(),
            rank: outcomes[idx],
            performance: performances[idx],
            rating_before: updates[idx].before,
            rating_after: updates[idx].after,
        })
        .collect();

    trace!(
        room = ?placements
            .iter()
            .map(|p| (p.team.as_str(), p.rank, p.rating_after - p.rating_before))
            .collect::<Vec<_>>(),
        "room resolved"
    );

    RoomResult { placements }
}

#[cfg(test)]
#[path = "room_tests.rs"]
mod room_tests;
