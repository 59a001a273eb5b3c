use super::*;
use crate::config::RATING_FLOOR;
use crate::debater::DebaterProfile;
use crate::pairing::{FoldingPairing, RandomPairing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn pool(n: usize, seed: u64) -> Vec<Team> {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| Team::random(&config, &mut rng).unwrap()).collect()
}

#[test]
fn pads_with_swings_to_full_rooms() {
    let t = Tournament::with_seed(3, 10, pool(10, 1), SimConfig::default(), 1).unwrap();
    assert_eq!(t.teams().len(), 12);
    let swings: Vec<&str> = t
        .teams()
        .iter()
        .filter(|team| team.is_swing())
        .map(Team::name)
        .collect();
    assert_eq!(swings, vec!["SWING 1", "SWING 2"]);
}

#[test]
fn fills_empty_roster_with_random_teams() {
    let t = Tournament::with_seed(1, 7, Vec::new(), SimConfig::default(), 2).unwrap();
    assert_eq!(t.teams().len(), 8);
    assert_eq!(t.teams().iter().filter(|team| team.is_swing()).count(), 1);
}

#[test]
fn truncates_oversized_roster_keeping_prefix() {
    let roster = pool(20, 3);
    let first: Vec<String> = roster[..8].iter().map(|t| t.name().to_string()).collect();

    let t = Tournament::with_seed(1, 8, roster, SimConfig::default(), 3).unwrap();

    let kept: Vec<String> = t.teams().iter().map(|t| t.name().to_string()).collect();
    assert_eq!(kept, first);
}

#[test]
fn roster_is_always_a_multiple_of_four() {
    for n_teams in 0..30 {
        for existing in [0, 5, 13] {
            let t = Tournament::with_seed(1, n_teams, pool(existing, 4), SimConfig::default(), 4)
                .unwrap();
            let want = n_teams.div_ceil(4) * 4;
            assert_eq!(t.teams().len(), want, "n_teams={} existing={}", n_teams, existing);
            assert_eq!(t.teams().len() % 4, 0);
        }
    }
}

#[test]
fn construction_resets_every_team() {
    let mut first = Tournament::with_seed(2, 8, pool(8, 5), SimConfig::default(), 5).unwrap();
    first.simulate(&RandomPairing);
    let ratings: Vec<f64> = first.teams().iter().map(Team::rating).collect();
    assert!(first.teams().iter().any(|t| t.score() > 0));

    let second = Tournament::with_seed(2, 8, first.into_teams(), SimConfig::default(), 6).unwrap();
    for (team, rating) in second.teams().iter().zip(ratings) {
        assert_eq!(team.score(), 0);
        assert_eq!(team.speaks(), 0.0);
        assert_eq!(team.rating(), rating);
    }
}

#[test]
fn zero_rounds_rejected() {
    let err = Tournament::with_seed(0, 8, Vec::new(), SimConfig::default(), 0).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfig(_)));
}

#[test]
fn invalid_config_rejected() {
    let mut config = SimConfig::default();
    config.rating.scale = -1.0;
    assert!(Tournament::with_seed(1, 8, Vec::new(), config, 0).is_err());
}

#[test]
fn unknown_pairing_runs_nothing() {
    let mut t = Tournament::with_seed(4, 8, pool(8, 7), SimConfig::default(), 7).unwrap();
    let before: Vec<(String, f64)> = t
        .teams()
        .iter()
        .map(|team| (team.name().to_string(), team.rating()))
        .collect();

    let err = t.simulate_named("round-robin").unwrap_err();

    assert!(matches!(err, TournamentError::UnknownPairing(_)));
    assert!(t.round_results().is_empty());
    assert!(t.pairing().is_none());
    let after: Vec<(String, f64)> = t
        .teams()
        .iter()
        .map(|team| (team.name().to_string(), team.rating()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn every_team_plays_once_per_round() {
    let mut t = Tournament::with_seed(5, 24, Vec::new(), SimConfig::default(), 8).unwrap();
    t.simulate_named("folding").unwrap();

    assert_eq!(t.round_results().len(), 5);
    for round in t.round_results() {
        assert_eq!(round.len(), 6);
        let seen: HashSet<&str> = round
            .iter()
            .flat_map(|room| room.placements.iter().map(|p| p.team.as_str()))
            .collect();
        assert_eq!(seen.len(), 24);
    }
    let total_points: u32 = t.teams().iter().map(Team::score).sum();
    assert_eq!(total_points, 5 * 6 * 6);
}

#[test]
fn final_roster_sorted_winners_first() {
    let mut t = Tournament::with_seed(6, 40, Vec::new(), SimConfig::default(), 9).unwrap();
    t.simulate(&FoldingPairing);

    for pair in t.teams().windows(2) {
        assert!(pair[0].standing_cmp(&pair[1]).is_ge());
    }
    assert_eq!(t.pairing(), Some("folding"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut t = Tournament::with_seed(4, 16, pool(16, 10), SimConfig::default(), 42).unwrap();
        t.simulate_named("random").unwrap();
        t.teams()
            .iter()
            .map(|team| (team.name().to_string(), team.rating(), team.score()))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn ratings_respect_floor_through_tournament() {
    let mut config = SimConfig::default();
    config.rating.k_factor = 400.0;
    config.rating.rating_floor = 900.0;
    let mut t = Tournament::with_seed(10, 16, Vec::new(), config, 11).unwrap();
    t.simulate(&RandomPairing);
    assert!(t.teams().iter().all(|team| team.rating() >= 900.0));
}

#[test]
fn entrants_below_floor_are_raised_to_it() {
    let debater = DebaterProfile::new(75.0, 1.0).unwrap();
    let low = Team::new("low", debater, debater, 20.0);
    let t = Tournament::with_seed(1, 4, vec![low], SimConfig::default(), 1).unwrap();

    assert!(t.teams().iter().all(|team| team.rating() >= RATING_FLOOR));
    let low = t.teams().iter().find(|team| team.name() == "low").unwrap();
    assert_eq!(low.rating(), RATING_FLOOR);
}

#[test]
fn entrants_clamped_to_tournament_floor() {
    let mut config = SimConfig::default();
    config.rating.rating_floor = 950.0;
    let debater = DebaterProfile::new(75.0, 1.0).unwrap();
    let roster = vec![
        Team::new("a", debater, debater, 900.0),
        Team::new("b", debater, debater, 1200.0),
    ];

    let t = Tournament::with_seed(1, 4, roster, config, 2).unwrap();

    let rating = |name: &str| {
        t.teams()
            .iter()
            .find(|team| team.name() == name)
            .unwrap()
            .rating()
    };
    assert_eq!(rating("a"), 950.0);
    assert_eq!(rating("b"), 1200.0);
}

#[test]
fn bad_sampler_config_fails_construction() {
    let mut config = SimConfig::default();
    config.sampler.mean_spread = -2.0;
    let err = Tournament::with_seed(1, 4, Vec::new(), config, 3).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfig(_)));
}
