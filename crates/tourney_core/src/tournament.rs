//! Tournament aggregate
//!
//! `Tournament` holds the complete runtime state for one sport instance:
//! the team list (with squads), the fixture list, and the id counters.
//! The caller owns the value; there is no global instance. It can be
//! converted to/from [`Snapshot`] for persistence.

use std::collections::HashMap;

use crate::error::{Result, TournamentError};
use crate::models::{
    Fixture, FixtureId, Outcome, Player, PlayerId, ScoreSheet, Sport, Team, TeamId, TeamSide,
    Verdict,
};
use crate::standings::{self, Standing};
use crate::store::format::{FixtureRecord, PlayerRecord, Snapshot, TeamRecord};
use crate::store::StoreError;

/// Runtime state of one tournament.
///
/// Ids are minted from per-kind counters starting at 1 and are never
/// reused, so removing an entity never changes what the remaining ids
/// refer to. The wire format stores positional indices instead; the
/// conversion happens at the snapshot boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    sport: Sport,
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    next_team_id: u32,
    next_player_id: u32,
    next_fixture_id: u32,
}

impl Tournament {
    /// Create an empty tournament for `sport`.
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            teams: Vec::new(),
            fixtures: Vec::new(),
            next_team_id: 1,
            next_player_id: 1,
            next_fixture_id: 1,
        }
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    // ========================
    // Team Management
    // ========================

    /// Register a new team with an empty squad.
    ///
    /// Names are labels, not identities; duplicates are accepted.
    pub fn add_team(&mut self, name: &str) -> TeamId {
        let id = TeamId(self.next_team_id);
        self.next_team_id += 1;
        self.teams.push(Team::new(id, name.to_string()));
        id
    }

    /// Rename an existing team. Fixtures keep referring to it by id, so
    /// past summaries keep the name they were recorded with.
    pub fn rename_team(&mut self, team: TeamId, name: &str) -> Result<()> {
        let t = self.team_mut(team)?;
        t.name = name.to_string();
        Ok(())
    }

    /// Remove a team and return it.
    ///
    /// Refused while any fixture, played or not, references the team;
    /// dropping it would silently rewire history.
    pub fn remove_team(&mut self, team: TeamId) -> Result<Team> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team)
            .ok_or(TournamentError::UnknownTeam(team))?;

        let referenced = self.fixtures.iter().filter(|f| f.involves(team)).count();
        if referenced > 0 {
            return Err(TournamentError::TeamReferenced { team, fixtures: referenced });
        }

        Ok(self.teams.remove(idx))
    }

    /// All teams in registration order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Get a team by id.
    pub fn team(&self, team: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team)
    }

    fn team_mut(&mut self, team: TeamId) -> Result<&mut Team> {
        self.teams
            .iter_mut()
            .find(|t| t.id == team)
            .ok_or(TournamentError::UnknownTeam(team))
    }

    // ========================
    // Player Management
    // ========================

    /// Add a player to a team's squad.
    pub fn add_player(
        &mut self,
        team: TeamId,
        name: &str,
        role: &str,
        shirt_number: u32,
    ) -> Result<PlayerId> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team)
            .ok_or(TournamentError::UnknownTeam(team))?;

        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        self.teams[idx]
            .players
            .push(Player::new(id, name.to_string(), role.to_string(), shirt_number));
        Ok(id)
    }

    /// Replace a player's name, role and shirt number.
    pub fn update_player(
        &mut self,
        team: TeamId,
        player: PlayerId,
        name: &str,
        role: &str,
        shirt_number: u32,
    ) -> Result<()> {
        let t = self.team_mut(team)?;
        let p = t
            .player_mut(player)
            .ok_or(TournamentError::UnknownPlayer { team, player })?;
        p.name = name.to_string();
        p.role = role.to_string();
        p.shirt_number = shirt_number;
        Ok(())
    }

    /// Remove a player from a team's squad and return it.
    pub fn remove_player(&mut self, team: TeamId, player: PlayerId) -> Result<Player> {
        let t = self.team_mut(team)?;
        if let Some(idx) = t.players.iter().position(|p| p.id == player) {
            Ok(t.players.remove(idx))
        } else {
            Err(TournamentError::UnknownPlayer { team, player })
        }
    }

    // ========================
    // Fixtures
    // ========================

    /// Schedule a fixture between two existing, distinct teams.
    pub fn schedule_fixture(
        &mut self,
        home: TeamId,
        away: TeamId,
        date: &str,
        time: &str,
        venue: &str,
    ) -> Result<FixtureId> {
        if self.teams.len() < 2 {
            return Err(TournamentError::InsufficientTeams { have: self.teams.len() });
        }
        if self.team(home).is_none() {
            return Err(TournamentError::UnknownTeam(home));
        }
        if self.team(away).is_none() {
            return Err(TournamentError::UnknownTeam(away));
        }
        if home == away {
            return Err(TournamentError::SelfMatchup(home));
        }

        let id = FixtureId(self.next_fixture_id);
        self.next_fixture_id += 1;
        self.fixtures.push(Fixture::new(
            id,
            home,
            away,
            date.to_string(),
            time.to_string(),
            venue.to_string(),
        ));
        Ok(id)
    }

    /// Record the final score of a fixture.
    ///
    /// The sheet's sport must match the tournament's. Recording again
    /// replaces the previous outcome; the fixture is not locked.
    pub fn record_result(&mut self, fixture: FixtureId, sheet: ScoreSheet) -> Result<&Fixture> {
        if sheet.sport() != self.sport {
            return Err(TournamentError::WrongSport {
                expected: self.sport,
                actual: sheet.sport(),
            });
        }

        let idx = self
            .fixtures
            .iter()
            .position(|f| f.id == fixture)
            .ok_or(TournamentError::UnknownFixture(fixture))?;

        let (home, away) = (self.fixtures[idx].home, self.fixtures[idx].away);
        // Referenced teams cannot be removed, so both lookups succeed.
        let home_name = self.team(home).map(|t| t.name.clone()).unwrap_or_default();
        let away_name = self.team(away).map(|t| t.name.clone()).unwrap_or_default();

        let verdict = match sheet.winning_side() {
            Some(TeamSide::Home) => Verdict::Win(home),
            Some(TeamSide::Away) => Verdict::Win(away),
            None => Verdict::Draw,
        };
        let summary = sheet.summary(&home_name, &away_name);

        self.fixtures[idx].outcome = Some(Outcome { verdict, summary });
        Ok(&self.fixtures[idx])
    }

    /// All fixtures in scheduling order.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Get a fixture by id.
    pub fn fixture(&self, fixture: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == fixture)
    }

    /// Fixtures still waiting for a result, in scheduling order.
    pub fn schedule(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(|f| !f.completed())
    }

    /// Completed fixtures, in scheduling order.
    pub fn results(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(|f| f.completed())
    }

    // ========================
    // Standings
    // ========================

    /// Points table in team registration order.
    pub fn standings(&self) -> Vec<Standing> {
        standings::points_table(&self.teams, &self.fixtures)
    }

    // ========================
    // Snapshot Conversion
    // ========================

    /// Convert runtime state to the wire model.
    ///
    /// Team references are flattened to list positions; runtime ids do
    /// not appear on the wire.
    pub fn to_snapshot(&self) -> Snapshot {
        // Fixtures only ever reference live teams, so the index cannot miss.
        let index: HashMap<TeamId, usize> =
            self.teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

        let teams = self
            .teams
            .iter()
            .map(|team| TeamRecord {
                name: team.name.clone(),
                players: team
                    .players
                    .iter()
                    .map(|p| PlayerRecord {
                        name: p.name.clone(),
                        role: p.role.clone(),
                        shirt_number: p.shirt_number,
                    })
                    .collect(),
            })
            .collect();

        let fixtures = self
            .fixtures
            .iter()
            .map(|fixture| FixtureRecord {
                id: fixture.id.0,
                home: index[&fixture.home],
                away: index[&fixture.away],
                date: fixture.date.clone(),
                time: fixture.time.clone(),
                venue: fixture.venue.clone(),
                completed: fixture.completed(),
                winner: fixture.winner().map(|team| index[&team]),
                draw: fixture.is_draw(),
                summary: fixture
                    .outcome
                    .as_ref()
                    .map(|o| o.summary.clone())
                    .unwrap_or_default(),
            })
            .collect();

        Snapshot { teams, fixtures, next_fixture_id: self.next_fixture_id }
    }

    /// Rebuild runtime state from the wire model, minting fresh ids.
    ///
    /// Rejects snapshots whose fixtures point outside the team list or
    /// carry contradictory completion fields. The caller decides what a
    /// rejected snapshot means; this function never panics on bad data.
    pub fn from_snapshot(sport: Sport, snapshot: &Snapshot) -> std::result::Result<Self, StoreError> {
        let mut tournament = Tournament::new(sport);

        for record in &snapshot.teams {
            let mut team = Team::new(TeamId(tournament.next_team_id), record.name.clone());
            tournament.next_team_id += 1;
            for p in &record.players {
                team.players.push(Player::new(
                    PlayerId(tournament.next_player_id),
                    p.name.clone(),
                    p.role.clone(),
                    p.shirt_number,
                ));
                tournament.next_player_id += 1;
            }
            tournament.teams.push(team);
        }

        for record in &snapshot.fixtures {
            let fixture = Self::fixture_from_record(&tournament.teams, record)?;
            tournament.fixtures.push(fixture);
        }

        tournament.next_fixture_id = snapshot.next_fixture_id;
        Ok(tournament)
    }

    fn fixture_from_record(
        teams: &[Team],
        record: &FixtureRecord,
    ) -> std::result::Result<Fixture, StoreError> {
        let resolve = |position: usize, side: &str| {
            teams.get(position).map(|t| t.id).ok_or_else(|| StoreError::Inconsistent {
                reason: format!(
                    "fixture {}: {} index {} out of range ({} teams)",
                    record.id,
                    side,
                    position,
                    teams.len()
                ),
            })
        };

        let home = resolve(record.home, "home")?;
        let away = resolve(record.away, "away")?;
        if home == away {
            return Err(StoreError::Inconsistent {
                reason: format!("fixture {}: both sides are team index {}", record.id, record.home),
            });
        }

        let outcome = if record.completed {
            let verdict = match (record.winner, record.draw) {
                (Some(position), false) => {
                    let winner = resolve(position, "winner")?;
                    if winner != home && winner != away {
                        return Err(StoreError::Inconsistent {
                            reason: format!(
                                "fixture {}: winner index {} is not a participant",
                                record.id, position
                            ),
                        });
                    }
                    Verdict::Win(winner)
                }
                (None, true) => Verdict::Draw,
                (Some(_), true) | (None, false) => {
                    return Err(StoreError::Inconsistent {
                        reason: format!(
                            "fixture {}: completed but winner and draw flags disagree",
                            record.id
                        ),
                    });
                }
            };
            if record.summary.is_empty() {
                return Err(StoreError::Inconsistent {
                    reason: format!("fixture {}: completed without a result summary", record.id),
                });
            }
            Some(Outcome { verdict, summary: record.summary.clone() })
        } else {
            // winner/draw leftovers on an unplayed fixture carry no meaning,
            // but a summary does: the two must agree.
            if !record.summary.is_empty() {
                return Err(StoreError::Inconsistent {
                    reason: format!("fixture {}: result summary on an unplayed fixture", record.id),
                });
            }
            None
        };

        Ok(Fixture {
            id: FixtureId(record.id),
            home,
            away,
            date: record.date.clone(),
            time: record.time.clone(),
            venue: record.venue.clone(),
            outcome,
        })
    }
}
