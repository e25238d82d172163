use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a player. Minted once by the tournament and never
/// reused, even after the player is removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A squad member. Owned by exactly one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Free-form duty label ("Batsman", "Goalkeeper", "Point Guard", ...).
    pub role: String,
    pub shirt_number: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: String, role: String, shirt_number: u32) -> Self {
        Self { id, name, role, shirt_number }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(PlayerId(7), "Virat Kohli".to_string(), "Batsman".to_string(), 18);
        assert_eq!(player.id, PlayerId(7));
        assert_eq!(player.name, "Virat Kohli");
        assert_eq!(player.role, "Batsman");
        assert_eq!(player.shirt_number, 18);
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(42).to_string(), "42");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId(1), "Alice".to_string(), "Keeper".to_string(), 1);
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
