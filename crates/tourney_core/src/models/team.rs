use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::{Player, PlayerId};

/// Stable identity of a team. Survives renames and removals of other
/// teams; never reused within a tournament.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A competing side and its squad.
///
/// Team names are display labels, not identities; duplicates are allowed
/// and lookups always go through [`TeamId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: TeamId, name: String) -> Self {
        Self { id, name, players: Vec::new() }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }
}
