//! End-of-game scores.

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// One player's totals across the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub name: String,
    pub exits: u32,
    pub ejects: u32,
    pub keys: u32,
}

impl PlayerScore {
    /// Score for a player, or `None` for an adversary.
    #[must_use]
    pub fn of(character: &Character) -> Option<Self> {
        let record = character.record()?;
        Some(Self {
            name: character.name.clone(),
            exits: record.exits,
            ejects: record.ejects,
            keys: record.keys,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Archetype;
    use crate::core::ActorId;

    #[test]
    fn test_score_of_player_only() {
        let mut p = Character::player(ActorId(0), "p1", 1);
        if let Some(r) = p.record_mut() {
            r.keys = 1;
            r.exits = 2;
        }
        assert_eq!(
            PlayerScore::of(&p),
            Some(PlayerScore {
                name: "p1".into(),
                exits: 2,
                ejects: 0,
                keys: 1
            })
        );

        let z = Character::adversary(ActorId(1), "Z0", 1, Archetype::Zombie);
        assert_eq!(PlayerScore::of(&z), None);
    }

    #[test]
    fn test_score_json_shape() {
        let score = PlayerScore {
            name: "p1".into(),
            exits: 1,
            ejects: 0,
            keys: 1,
        };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "p1", "exits": 1, "ejects": 0, "keys": 1})
        );
    }
}
