use serde::{Deserialize, Serialize};
use std::fmt;

use super::team::TeamId;

/// Unique id of a fixture, strictly increasing in scheduling order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FixtureId(pub u32);

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a completed fixture ended: one winner, or a draw. A fixture can
/// never be both, and an unplayed fixture has neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Win(TeamId),
    Draw,
}

/// Final result of a completed fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub verdict: Verdict,
    /// One-line scoreboard text, e.g. `"Football: Leeds 2 - 1 York"`.
    /// Never empty.
    pub summary: String,
}

/// A scheduled contest between two distinct teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home: TeamId,
    pub away: TeamId,
    pub date: String,
    pub time: String,
    pub venue: String,
    /// `None` until a result is recorded.
    pub outcome: Option<Outcome>,
}

impl Fixture {
    pub fn new(
        id: FixtureId,
        home: TeamId,
        away: TeamId,
        date: String,
        time: String,
        venue: String,
    ) -> Self {
        Self { id, home, away, date, time, venue, outcome: None }
    }

    pub fn completed(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winning team of a completed, decisive fixture.
    pub fn winner(&self) -> Option<TeamId> {
        match &self.outcome {
            Some(Outcome { verdict: Verdict::Win(team), .. }) => Some(*team),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(&self.outcome, Some(Outcome { verdict: Verdict::Draw, .. }))
    }

    /// True if `team` plays on either side.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Fixture {
        Fixture::new(
            FixtureId(1),
            TeamId(1),
            TeamId(2),
            "2025-03-01".to_string(),
            "14:00".to_string(),
            "Eden Gardens".to_string(),
        )
    }

    #[test]
    fn test_new_fixture_is_unplayed() {
        let f = fixture();
        assert!(!f.completed());
        assert!(f.winner().is_none());
        assert!(!f.is_draw());
    }

    #[test]
    fn test_winner_and_draw_are_exclusive() {
        let mut f = fixture();
        f.outcome = Some(Outcome {
            verdict: Verdict::Win(TeamId(2)),
            summary: "Football: A 0 - 1 B".to_string(),
        });
        assert!(f.completed());
        assert_eq!(f.winner(), Some(TeamId(2)));
        assert!(!f.is_draw());

        f.outcome = Some(Outcome {
            verdict: Verdict::Draw,
            summary: "Football: A 1 - 1 B".to_string(),
        });
        assert!(f.winner().is_none());
        assert!(f.is_draw());
    }

    #[test]
    fn test_involves_checks_both_sides() {
        let f = fixture();
        assert!(f.involves(TeamId(1)));
        assert!(f.involves(TeamId(2)));
        assert!(!f.involves(TeamId(3)));
    }
}
