use thiserror::Error;

use crate::models::{FixtureId, PlayerId, Sport, TeamId};

/// Errors surfaced by tournament operations.
///
/// Every variant is recoverable: bad input is reported to the caller and
/// the aggregate is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("no team with id {0}")]
    UnknownTeam(TeamId),

    #[error("team {team} has no player with id {player}")]
    UnknownPlayer { team: TeamId, player: PlayerId },

    #[error("need at least two teams to schedule a fixture, have {have}")]
    InsufficientTeams { have: usize },

    #[error("a fixture needs two distinct teams, got team {0} on both sides")]
    SelfMatchup(TeamId),

    #[error("no fixture with id {0}")]
    UnknownFixture(FixtureId),

    #[error("team {team} is referenced by {fixtures} fixture(s) and cannot be removed")]
    TeamReferenced { team: TeamId, fixtures: usize },

    #[error("score sheet is for {actual}, this tournament plays {expected}")]
    WrongSport { expected: Sport, actual: Sport },
}

pub type Result<T> = std::result::Result<T, TournamentError>;
