//! Per-archetype movement policy.
//!
//! All faction- and archetype-specific movement rules live in one table,
//! keyed by `ActorKind`. The rule checker reads a `MovementProfile` instead of
//! branching on the kind of actor.
//!
//! | Kind   | Max distance | Search reach | Hallways | Border targets |
//! |--------|--------------|--------------|----------|----------------|
//! | Player | 2            | 2           | yes      | no             |
//! | Zombie | 1            | 1           | no       | no             |
//! | Ghost  | 1            | 1           | yes      | yes (teleport) |

use serde::{Deserialize, Serialize};

/// Which side of the game an actor plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Adversary,
}

/// The adversary archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Zombie,
    Ghost,
}

impl Archetype {
    /// Glyph used when rendering the level.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Archetype::Zombie => 'Z',
            Archetype::Ghost => 'G',
        }
    }

    /// Prefix for spawned adversary names (`Z0`, `G1`, ...).
    #[must_use]
    pub const fn name_prefix(self) -> &'static str {
        match self {
            Archetype::Zombie => "Z",
            Archetype::Ghost => "G",
        }
    }
}

/// Key into the movement table: players plus each adversary archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Player,
    Zombie,
    Ghost,
}

impl ActorKind {
    /// The faction this kind belongs to.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            ActorKind::Player => Faction::Player,
            ActorKind::Zombie | ActorKind::Ghost => Faction::Adversary,
        }
    }

    /// Movement rules for this kind.
    #[must_use]
    pub const fn profile(self) -> MovementProfile {
        match self {
            ActorKind::Player => PLAYER_PROFILE,
            ActorKind::Zombie => ZOMBIE_PROFILE,
            ActorKind::Ghost => GHOST_PROFILE,
        }
    }

    /// Lowercase name used in observations ("player", "zombie", "ghost").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Zombie => "zombie",
            ActorKind::Ghost => "ghost",
        }
    }
}

impl From<Archetype> for ActorKind {
    fn from(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Zombie => ActorKind::Zombie,
            Archetype::Ghost => ActorKind::Ghost,
        }
    }
}

/// Movement limits for one kind of actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementProfile {
    /// Largest Manhattan distance a single move may cover. Staying put
    /// (distance 0) is always within range.
    pub max_distance: u32,

    /// How many tiles out along each cardinal direction move enumeration
    /// looks.
    pub search_reach: i32,

    /// Whether the actor may step onto a hallway tile.
    pub may_enter_hallway: bool,

    /// Whether the actor may target a border tile. Placement turns such a
    /// move into a teleport.
    pub may_target_border: bool,
}

const PLAYER_PROFILE: MovementProfile = MovementProfile {
    max_distance: 2,
    search_reach: 2,
    may_enter_hallway: true,
    may_target_border: false,
};

const ZOMBIE_PROFILE: MovementProfile = MovementProfile {
    max_distance: 1,
    search_reach: 1,
    may_enter_hallway: false,
    may_target_border: false,
};

const GHOST_PROFILE: MovementProfile = MovementProfile {
    max_distance: 1,
    search_reach: 1,
    may_enter_hallway: true,
    may_target_border: true,
};
