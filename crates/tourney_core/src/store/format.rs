//! Line-oriented store layout.
//!
//! The on-disk format is plain newline-delimited text, one field per
//! line, kept byte-compatible with the files the legacy system wrote:
//!
//! ```text
//! teamCount
//!   team name
//!   playerCount
//!     player name
//!     player role
//!     shirt number
//! matchCount
//!   match id
//!   home team index          (position in the team list above)
//!   away team index
//!   date / time / venue      (three lines)
//!   completed flag           ("1" or "true" is true, anything else false)
//!   winner team index        (-1 when absent)
//!   draw flag
//!   result summary           (may be empty)
//! nextMatchId
//! ```
//!
//! [`decode`] is structural only: it turns text into records and applies
//! the legacy per-field defaults. Whether the records describe a valid
//! tournament is decided at the snapshot boundary, not here.

use serde::{Deserialize, Serialize};

use super::error::StoreError;

// ============================================================================
// Wire model
// ============================================================================

/// Wire form of one player line group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub role: String,
    pub shirt_number: u32,
}

/// Wire form of one team block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub players: Vec<PlayerRecord>,
}

/// Wire form of one match block. Team references are positions in the
/// team list, exactly as the file stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub id: u32,
    pub home: usize,
    pub away: usize,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub completed: bool,
    /// `None` is written as `-1`.
    pub winner: Option<usize>,
    pub draw: bool,
    pub summary: String,
}

/// Everything one store file holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub teams: Vec<TeamRecord>,
    pub fixtures: Vec<FixtureRecord>,
    pub next_fixture_id: u32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self { teams: Vec::new(), fixtures: Vec::new(), next_fixture_id: 1 }
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Serialize a snapshot into the line layout.
///
/// Fails only when a string field contains a line break, which the
/// layout cannot represent; nothing is written in that case.
pub fn encode(snapshot: &Snapshot) -> Result<String, StoreError> {
    validate_encodable(snapshot)?;

    let mut out = String::new();
    out.push_str(&format!("{}\n", snapshot.teams.len()));
    for team in &snapshot.teams {
        out.push_str(&format!("{}\n", team.name));
        out.push_str(&format!("{}\n", team.players.len()));
        for player in &team.players {
            out.push_str(&format!("{}\n", player.name));
            out.push_str(&format!("{}\n", player.role));
            out.push_str(&format!("{}\n", player.shirt_number));
        }
    }

    out.push_str(&format!("{}\n", snapshot.fixtures.len()));
    for fixture in &snapshot.fixtures {
        out.push_str(&format!("{}\n", fixture.id));
        out.push_str(&format!("{}\n", fixture.home));
        out.push_str(&format!("{}\n", fixture.away));
        out.push_str(&format!("{}\n", fixture.date));
        out.push_str(&format!("{}\n", fixture.time));
        out.push_str(&format!("{}\n", fixture.venue));
        out.push_str(&format!("{}\n", if fixture.completed { 1 } else { 0 }));
        match fixture.winner {
            Some(position) => out.push_str(&format!("{}\n", position)),
            None => out.push_str("-1\n"),
        }
        out.push_str(&format!("{}\n", if fixture.draw { 1 } else { 0 }));
        out.push_str(&format!("{}\n", fixture.summary));
    }

    out.push_str(&format!("{}\n", snapshot.next_fixture_id));
    Ok(out)
}

fn validate_encodable(snapshot: &Snapshot) -> Result<(), StoreError> {
    let check = |value: &str, field: String| {
        if value.contains(['\n', '\r']) {
            Err(StoreError::UnencodableField { field })
        } else {
            Ok(())
        }
    };

    for (t, team) in snapshot.teams.iter().enumerate() {
        check(&team.name, format!("team {} name", t + 1))?;
        for (p, player) in team.players.iter().enumerate() {
            check(&player.name, format!("team {} player {} name", t + 1, p + 1))?;
            check(&player.role, format!("team {} player {} role", t + 1, p + 1))?;
        }
    }
    for fixture in &snapshot.fixtures {
        check(&fixture.date, format!("fixture {} date", fixture.id))?;
        check(&fixture.time, format!("fixture {} time", fixture.id))?;
        check(&fixture.venue, format!("fixture {} venue", fixture.id))?;
        check(&fixture.summary, format!("fixture {} summary", fixture.id))?;
    }
    Ok(())
}

// ============================================================================
// Decoding
// ============================================================================

struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    /// 1-based number of the line most recently returned.
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines(), line: 0 }
    }

    fn next_line(&mut self, what: &str) -> Result<&'a str, StoreError> {
        self.line += 1;
        self.lines.next().ok_or_else(|| StoreError::Malformed {
            line: self.line,
            reason: format!("missing {}", what),
        })
    }

    /// A line that must parse as an unsigned number.
    fn next_count(&mut self, what: &str) -> Result<usize, StoreError> {
        let raw = self.next_line(what)?;
        raw.trim().parse().map_err(|_| StoreError::Malformed {
            line: self.line,
            reason: format!("unreadable {}: {:?}", what, raw),
        })
    }

    /// Winner reference: `-1` means none, other negatives are invalid.
    fn next_winner(&mut self) -> Result<Option<usize>, StoreError> {
        let raw = self.next_line("winner index")?;
        let value: i64 = raw.trim().parse().map_err(|_| StoreError::Malformed {
            line: self.line,
            reason: format!("unreadable winner index: {:?}", raw),
        })?;
        match value {
            -1 => Ok(None),
            v if v >= 0 => Ok(Some(v as usize)),
            v => Err(StoreError::Malformed {
                line: self.line,
                reason: format!("negative winner index {}", v),
            }),
        }
    }
}

/// The legacy truthy tokens, compared verbatim.
fn parse_flag(raw: &str) -> bool {
    raw == "1" || raw == "true"
}

/// Parse the line layout into a snapshot.
///
/// Per-field legacy defaults apply only where the original loader had
/// them: an unreadable shirt number becomes 0, an unreadable match id
/// takes its 1-based position, and a missing or unreadable trailer
/// becomes `matchCount + 1`. Everything else that fails to parse is an
/// error; content past the trailer is ignored.
pub fn decode(text: &str) -> Result<Snapshot, StoreError> {
    let mut reader = LineReader::new(text);

    let team_count = reader.next_count("team count")?;
    let mut teams = Vec::new();
    for _ in 0..team_count {
        let name = reader.next_line("team name")?.to_string();
        let player_count = reader.next_count("player count")?;
        let mut players = Vec::new();
        for _ in 0..player_count {
            let player_name = reader.next_line("player name")?.to_string();
            let role = reader.next_line("player role")?.to_string();
            let shirt_number = reader.next_line("shirt number")?.trim().parse().unwrap_or(0);
            players.push(PlayerRecord { name: player_name, role, shirt_number });
        }
        teams.push(TeamRecord { name, players });
    }

    let match_count = reader.next_count("match count")?;
    let mut fixtures = Vec::new();
    for position in 0..match_count {
        let id = reader
            .next_line("match id")?
            .trim()
            .parse()
            .unwrap_or(position as u32 + 1);
        let home = reader.next_count("home team index")?;
        let away = reader.next_count("away team index")?;
        let date = reader.next_line("date")?.to_string();
        let time = reader.next_line("time")?.to_string();
        let venue = reader.next_line("venue")?.to_string();
        let completed = parse_flag(reader.next_line("completed flag")?);
        let winner = reader.next_winner()?;
        let draw = parse_flag(reader.next_line("draw flag")?);
        let summary = reader.next_line("result summary")?.to_string();

        fixtures.push(FixtureRecord {
            id,
            home,
            away,
            date,
            time,
            venue,
            completed,
            winner,
            draw,
            summary,
        });
    }

    let next_fixture_id = match reader.next_line("next match id") {
        Ok(raw) => raw.trim().parse().unwrap_or(match_count as u32 + 1),
        Err(_) => match_count as u32 + 1,
    };

    Ok(Snapshot { teams, fixtures, next_fixture_id })
}
