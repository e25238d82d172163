//! Points table computation.
//!
//! The table is derived on demand from completed fixtures; nothing here is
//! cached or stored. Scoring is the same for every sport: two points for a
//! win, one for a draw, none for a loss.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Fixture, Team, TeamId, Verdict};

pub const POINTS_PER_WIN: u32 = 2;
pub const POINTS_PER_DRAW: u32 = 1;

/// One row of the points table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team: TeamId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points: u32,
}

/// Build the points table for `teams`, one row per team in list order.
///
/// Rows are deliberately not sorted; callers that want a ranking sort the
/// result themselves. Unplayed fixtures contribute nothing.
pub fn points_table(teams: &[Team], fixtures: &[Fixture]) -> Vec<Standing> {
    let mut rows: Vec<Standing> = teams
        .iter()
        .map(|team| Standing {
            team: team.id,
            name: team.name.clone(),
            played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            points: 0,
        })
        .collect();

    let index: HashMap<TeamId, usize> =
        teams.iter().enumerate().map(|(i, team)| (team.id, i)).collect();

    for fixture in fixtures {
        let Some(outcome) = &fixture.outcome else { continue };
        let (Some(&home), Some(&away)) = (index.get(&fixture.home), index.get(&fixture.away))
        else {
            continue;
        };

        rows[home].played += 1;
        rows[away].played += 1;

        match outcome.verdict {
            Verdict::Draw => {
                rows[home].draws += 1;
                rows[away].draws += 1;
                rows[home].points += POINTS_PER_DRAW;
                rows[away].points += POINTS_PER_DRAW;
            }
            Verdict::Win(winner) => {
                let (won, lost) =
                    if winner == fixture.home { (home, away) } else { (away, home) };
                rows[won].wins += 1;
                rows[won].points += POINTS_PER_WIN;
                rows[lost].losses += 1;
            }
        }
    }

    rows
}

/// Render rows as the classic tab-separated table.
pub fn render_points_table(title: &str, rows: &[Standing]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Points Table ({}) ===\n", title));
    out.push_str("Team\tP\tW\tL\tD\tPts\n");
    for row in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            row.name, row.played, row.wins, row.losses, row.draws, row.points
        ));
    }
    out
}
