use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Sport
// ============================================================================

/// The disciplines the engine can score. Fixed per tournament at
/// construction; every fixture in a tournament uses the same sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Cricket,
    Football,
    Basketball,
}

impl Sport {
    pub const fn all() -> [Sport; 3] {
        [Sport::Cricket, Sport::Football, Sport::Basketball]
    }

    /// Display name used in summaries and table headers.
    pub const fn name(&self) -> &'static str {
        match self {
            Sport::Cricket => "Cricket",
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
        }
    }

    /// Conventional store file name for this sport.
    pub const fn store_file(&self) -> &'static str {
        match self {
            Sport::Cricket => "cricket.txt",
            Sport::Football => "football.txt",
            Sport::Basketball => "basketball.txt",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cricket" => Ok(Sport::Cricket),
            "football" => Ok(Sport::Football),
            "basketball" => Ok(Sport::Basketball),
            _ => Err(format!("Unknown sport: {}", s)),
        }
    }
}

// ============================================================================
// Score sheets
// ============================================================================

/// Which side of a fixture a score favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

/// One side of a cricket scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CricketInnings {
    pub runs: u32,
    pub wickets: u32,
    /// Overs bowled. Part of the scorecard, no bearing on the result.
    pub overs: f32,
}

impl CricketInnings {
    pub fn new(runs: u32, wickets: u32, overs: f32) -> Self {
        Self { runs, wickets, overs }
    }
}

/// Raw final score of one fixture, one variant per sport.
///
/// Every sport resolves the same way: the higher total wins, equal totals
/// draw. The variants differ only in what the total is (runs, goals,
/// points) and what else the scorecard carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoreSheet {
    Cricket { home: CricketInnings, away: CricketInnings },
    Football { home_goals: u32, away_goals: u32 },
    Basketball { home_points: u32, away_points: u32 },
}

impl ScoreSheet {
    pub const fn sport(&self) -> Sport {
        match self {
            ScoreSheet::Cricket { .. } => Sport::Cricket,
            ScoreSheet::Football { .. } => Sport::Football,
            ScoreSheet::Basketball { .. } => Sport::Basketball,
        }
    }

    /// The decisive total for each side.
    fn totals(&self) -> (u32, u32) {
        match *self {
            ScoreSheet::Cricket { home, away } => (home.runs, away.runs),
            ScoreSheet::Football { home_goals, away_goals } => (home_goals, away_goals),
            ScoreSheet::Basketball { home_points, away_points } => (home_points, away_points),
        }
    }

    /// Resolve the sheet: `Some(side)` for a win, `None` for a draw.
    pub fn winning_side(&self) -> Option<TeamSide> {
        let (home, away) = self.totals();
        match home.cmp(&away) {
            Ordering::Greater => Some(TeamSide::Home),
            Ordering::Less => Some(TeamSide::Away),
            Ordering::Equal => None,
        }
    }

    /// One-line scoreboard text with the given team names.
    pub fn summary(&self, home_name: &str, away_name: &str) -> String {
        match *self {
            ScoreSheet::Cricket { home, away } => format!(
                "Cricket: {} {}/{} vs {} {}/{}",
                home_name, home.runs, home.wickets, away_name, away.runs, away.wickets
            ),
            ScoreSheet::Football { home_goals, away_goals } => format!(
                "Football: {} {} - {} {}",
                home_name, home_goals, away_goals, away_name
            ),
            ScoreSheet::Basketball { home_points, away_points } => format!(
                "Basketball: {} {} - {} {}",
                home_name, home_points, away_points, away_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sport_names_and_store_files() {
        assert_eq!(Sport::Cricket.name(), "Cricket");
        assert_eq!(Sport::Football.store_file(), "football.txt");
        assert_eq!(Sport::Basketball.to_string(), "Basketball");
        assert_eq!("CRICKET".parse::<Sport>(), Ok(Sport::Cricket));
        assert!("rugby".parse::<Sport>().is_err());
    }

    #[test]
    fn test_higher_total_wins_each_sport() {
        let cricket = ScoreSheet::Cricket {
            home: CricketInnings::new(250, 6, 50.0),
            away: CricketInnings::new(220, 9, 50.0),
        };
        assert_eq!(cricket.winning_side(), Some(TeamSide::Home));

        let football = ScoreSheet::Football { home_goals: 0, away_goals: 3 };
        assert_eq!(football.winning_side(), Some(TeamSide::Away));

        let basketball = ScoreSheet::Basketball { home_points: 101, away_points: 99 };
        assert_eq!(basketball.winning_side(), Some(TeamSide::Home));
    }

    #[test]
    fn test_equal_totals_draw() {
        let sheet = ScoreSheet::Football { home_goals: 1, away_goals: 1 };
        assert_eq!(sheet.winning_side(), None);

        let sheet = ScoreSheet::Cricket {
            home: CricketInnings::new(180, 2, 20.0),
            away: CricketInnings::new(180, 9, 19.3),
        };
        assert_eq!(sheet.winning_side(), None);
    }

    #[test]
    fn test_cricket_resolves_on_runs_alone() {
        // fewer wickets lost and fewer overs used never rescue a lower total
        let sheet = ScoreSheet::Cricket {
            home: CricketInnings::new(199, 0, 35.0),
            away: CricketInnings::new(200, 9, 50.0),
        };
        assert_eq!(sheet.winning_side(), Some(TeamSide::Away));
    }

    #[test]
    fn test_summary_formats() {
        let cricket = ScoreSheet::Cricket {
            home: CricketInnings::new(250, 6, 50.0),
            away: CricketInnings::new(220, 9, 50.0),
        };
        assert_eq!(
            cricket.summary("India", "Australia"),
            "Cricket: India 250/6 vs Australia 220/9"
        );

        let football = ScoreSheet::Football { home_goals: 2, away_goals: 1 };
        assert_eq!(football.summary("Leeds", "York"), "Football: Leeds 2 - 1 York");

        let basketball = ScoreSheet::Basketball { home_points: 98, away_points: 102 };
        assert_eq!(
            basketball.summary("Hawks", "Bulls"),
            "Basketball: Hawks 98 - 102 Bulls"
        );
    }

    fn sheet_with_totals(sport: Sport, home: u32, away: u32) -> ScoreSheet {
        match sport {
            Sport::Cricket => ScoreSheet::Cricket {
                home: CricketInnings::new(home, 3, 42.0),
                away: CricketInnings::new(away, 7, 50.0),
            },
            Sport::Football => ScoreSheet::Football { home_goals: home, away_goals: away },
            Sport::Basketball => {
                ScoreSheet::Basketball { home_points: home, away_points: away }
            }
        }
    }

    proptest! {
        #[test]
        fn test_verdict_follows_total_ordering(
            sport_pick in 0usize..3,
            home in 0u32..500,
            away in 0u32..500,
        ) {
            let sport = Sport::all()[sport_pick];
            let sheet = sheet_with_totals(sport, home, away);
            prop_assert_eq!(sheet.sport(), sport);

            let expected = match home.cmp(&away) {
                Ordering::Greater => Some(TeamSide::Home),
                Ordering::Less => Some(TeamSide::Away),
                Ordering::Equal => None,
            };
            prop_assert_eq!(sheet.winning_side(), expected);
        }

        #[test]
        fn test_cricket_wickets_and_overs_never_change_verdict(
            runs_home in 0u32..400,
            runs_away in 0u32..400,
            wickets in 0u32..=10,
            overs in 0.0f32..50.0,
        ) {
            let plain = ScoreSheet::Cricket {
                home: CricketInnings::new(runs_home, 0, 0.0),
                away: CricketInnings::new(runs_away, 0, 0.0),
            };
            let loaded = ScoreSheet::Cricket {
                home: CricketInnings::new(runs_home, wickets, overs),
                away: CricketInnings::new(runs_away, 10 - wickets, 50.0 - overs),
            };
            prop_assert_eq!(plain.winning_side(), loaded.winning_side());
        }
    }
}
