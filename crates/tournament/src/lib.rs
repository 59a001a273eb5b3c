//! Debate tournament simulator with Elo tracking
//!
//! This crate provides infrastructure for:
//! - Generating teams of two debaters whose skill is a hidden normal distribution
//! - Running tournaments of four-team rooms with random or folded pairing
//! - Tracking Elo ratings across tournaments and measuring how well they converge
//!
//! # Usage
//!
//! ```bash
//! # Warm up ratings on 1000 teams, then run one large folded tournament
//! cargo run -p debate_tournament -- --pool 1000 --warmup 200 --rounds 6
//!
//! # Random pairing, reproducible, with a JSON report
//! cargo run -p debate_tournament -- --pairing random --seed 7 --json report.json
//! ```

mod config;
mod debater;
mod elo;
mod error;
mod pairing;
mod report;
mod room;
mod team;
mod tournament;

pub use config::*;
pub use debater::*;
pub use elo::*;
pub use error::*;
pub use pairing::*;
pub use report::*;
pub use room::*;
pub use team::*;
pub use tournament::*;
