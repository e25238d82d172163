//! # tourney_core - Multi-Sport Tournament Engine
//!
//! This library manages tournaments for cricket, football and basketball:
//! team and player rosters, fixture scheduling, result recording, points
//! tables, and flat-file persistence compatible with the legacy store
//! layout.
//!
//! ## Features
//! - One tournament per sport, fixed at construction
//! - Stable numeric ids for teams, players and fixtures (never reused)
//! - Single scoring rule for every sport: higher total wins, equal draws
//! - Line-oriented text stores with atomic writes and a lenient loader

pub mod error;
pub mod models;
pub mod standings;
pub mod store;
pub mod tournament;


// Re-export the operational surface
pub use error::{Result, TournamentError};
pub use tournament::Tournament;

// Re-export model types
pub use models::{
    CricketInnings, Fixture, FixtureId, Outcome, Player, PlayerId, ScoreSheet, Sport, Team,
    TeamId, TeamSide, Verdict,
};

// Re-export standings
pub use standings::{points_table, render_points_table, Standing};

// Re-export persistence
pub use store::{Snapshot, StoreError, TournamentStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
