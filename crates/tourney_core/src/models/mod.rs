pub mod fixture;
pub mod player;
pub mod score;
pub mod team;

pub use fixture::{Fixture, FixtureId, Outcome, Verdict};
pub use player::{Player, PlayerId};
pub use score::{CricketInnings, ScoreSheet, Sport, TeamSide};
pub use team::{Team, TeamId};
