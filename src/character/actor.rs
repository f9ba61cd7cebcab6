//! Characters: players and adversaries.
//!
//! A `Character` carries the capabilities every actor shares (identity,
//! position, activity, turn index) plus a `Role` tag with the
//! faction-specific part. Players track their cumulative score; adversaries
//! carry their archetype.
//!
//! A character's `position` is a plain coordinate. The tile at that
//! coordinate lists the character among its occupants, and the level keeps
//! the two sides in step.

use serde::{Deserialize, Serialize};

use super::profile::{ActorKind, Archetype, Faction, MovementProfile};
use crate::core::{ActorId, Position};

/// Cumulative per-player counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Levels this player has left through the exit.
    pub exits: u32,
    /// Times this player has been ejected.
    pub ejects: u32,
    /// Keys this player has picked up.
    pub keys: u32,
    /// Whether the player has left the current level through its exit.
    pub exited: bool,
}

/// Faction-specific part of a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player(PlayerRecord),
    Adversary(Archetype),
}

/// A player or adversary on the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique ID within the game.
    pub id: ActorId,

    /// Display name, unique within the character's faction.
    pub name: String,

    /// 1-based turn index within the faction.
    pub turn: u32,

    /// Tile the character stands on, if placed.
    pub position: Option<Position>,

    /// False once the character has been eliminated (or the game ended).
    pub active: bool,

    /// Player counters or adversary archetype.
    pub role: Role,
}

impl Character {
    /// Create a player.
    pub fn player(id: ActorId, name: impl Into<String>, turn: u32) -> Self {
        Self {
            id,
            name: name.into(),
            turn,
            position: None,
            active: true,
            role: Role::Player(PlayerRecord::default()),
        }
    }

    /// Create an adversary of the given archetype.
    pub fn adversary(id: ActorId, name: impl Into<String>, turn: u32, archetype: Archetype) -> Self {
        Self {
            id,
            name: name.into(),
            turn,
            position: None,
            active: true,
            role: Role::Adversary(archetype),
        }
    }

    /// Movement-table key for this character.
    #[must_use]
    pub fn kind(&self) -> ActorKind {
        match &self.role {
            Role::Player(_) => ActorKind::Player,
            Role::Adversary(archetype) => (*archetype).into(),
        }
    }

    /// Which faction this character plays for.
    #[must_use]
    pub fn faction(&self) -> Faction {
        self.kind().faction()
    }

    /// Movement rules for this character.
    #[must_use]
    pub fn profile(&self) -> MovementProfile {
        self.kind().profile()
    }

    #[must_use]
    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player(_))
    }

    /// Adversary archetype, or `None` for players.
    #[must_use]
    pub fn archetype(&self) -> Option<Archetype> {
        match &self.role {
            Role::Adversary(archetype) => Some(*archetype),
            Role::Player(_) => None,
        }
    }

    /// Player counters, or `None` for adversaries.
    #[must_use]
    pub fn record(&self) -> Option<&PlayerRecord> {
        match &self.role {
            Role::Player(record) => Some(record),
            Role::Adversary(_) => None,
        }
    }

    /// Mutable player counters, or `None` for adversaries.
    pub fn record_mut(&mut self) -> Option<&mut PlayerRecord> {
        match &mut self.role {
            Role::Player(record) => Some(record),
            Role::Adversary(_) => None,
        }
    }

    /// True if this is a player that has left the level through its exit.
    #[must_use]
    pub fn has_exited(&self) -> bool {
        self.record().is_some_and(|r| r.exited)
    }

    /// Glyph used when rendering the level.
    ///
    /// Players show their turn index (1-9); adversaries their archetype.
    #[must_use]
    pub fn glyph(&self) -> char {
        match &self.role {
            Role::Player(_) => char::from_digit(self.turn, 10)
                .filter(|&c| c != '0')
                .unwrap_or('P'),
            Role::Adversary(archetype) => archetype.glyph(),
        }
    }
}
