//! Tournament results storage and reporting

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::team::Team;
use crate::tournament::{RoundResult, Tournament};

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Name/description of the tournament
    pub name: String,
    /// Pairing strategy used, if the tournament was simulated
    pub pairing: Option<String>,
    pub rounds: usize,
    /// RFC 3339 time the report was generated
    pub generated_at: String,
    /// Final standings, best first
    pub standings: Vec<Standing>,
    /// Spearman correlation between final ratings and hidden strength
    pub rank_correlation: Option<f64>,
    /// Room results for every round
    pub history: Vec<RoundResult>,
}

/// A single team's line in the standings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    pub position: usize,
    pub team: String,
    pub rating: f64,
    pub score: u32,
    pub speaks: f64,
    pub true_strength: f64,
    pub swing: bool,
}

impl TournamentReport {
    pub(crate) fn from_tournament(name: &str, tournament: &Tournament) -> Self {
        let teams = tournament.teams();
        let standings = teams
            .iter()
            .enumerate()
            .map(|(i, team)| Standing {
                position: i + 1,
                team: team.name().to_string(),
                rating: team.rating(),
                score: team.score(),
                speaks: team.speaks(),
                true_strength: team.true_strength(),
                swing: team.is_swing(),
            })
            .collect();

        Self {
            name: name.to_string(),
            pairing: tournament.pairing().map(str::to_string),
            rounds: tournament.n_rounds(),
            generated_at: Utc::now().to_rfc3339(),
            standings,
            rank_correlation: rank_correlation(teams),
            history: tournament.round_results().to_vec(),
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text leaderboard
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Teams: {}, rounds: {}, pairing: {}\n",
            self.standings.len(),
            self.rounds,
            self.pairing.as_deref().unwrap_or("-")
        ));
        if let Some(rho) = self.rank_correlation {
            report.push_str(&format!("Rating/strength rank correlation: {:.3}\n", rho));
        }
        report.push('\n');

        report.push_str(&format!(
            "{:>5} {:<38} {:>8} {:>6} {:>9} {:>9}\n",
            "#", "Team", "Elo", "Pts", "Speaks", "Strength"
        ));
        report.push_str(&"-".repeat(80));
        report.push('\n');

        for s in &self.standings {
            report.push_str(&format!(
                "{:>5} {:<38} {:>8.1} {:>6} {:>9.2} {:>9.2}\n",
                s.position, s.team, s.rating, s.score, s.speaks, s.true_strength
            ));
        }

        report
    }

    /// Room-by-room dump of every round
    pub fn generate_round_log(&self) -> String {
        let mut log = String::new();
        for (i, round) in self.history.iter().enumerate() {
            log.push_str(&format!("Round: {}\n", i + 1));
            for room in round {
                let line: Vec<String> = room
                    .placements
                    .iter()
                    .map(|p| format!("{}: {}", p.team, p.rank))
                    .collect();
                log.push_str(&format!("\t{{{}}}\n", line.join(", ")));
            }
        }
        log
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Spearman rank correlation between rating and true strength.
///
/// Measures how well ratings have converged on the hidden skill of each team.
/// `None` with fewer than two teams or when either ordering is constant.
pub fn rank_correlation(teams: &[Team]) -> Option<f64> {
    if teams.len() < 2 {
        return None;
    }
    let ratings: Vec<f64> = teams.iter().map(Team::rating).collect();
    let strengths: Vec<f64> = teams.iter().map(Team::true_strength).collect();
    pearson(&ranks(&ratings), &ranks(&strengths))
}

/// Fractional ranks (ties share their average rank)
fn ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        let avg = (start + end - 1) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = avg;
        }
        start = end;
    }
    ranks
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        cov += (a - mean_x) * (b - mean_y);
        var_x += (a - mean_x).powi(2);
        var_y += (b - mean_y).powi(2);
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
