//! # snarl-engine
//!
//! Rules engine for a turn-based, grid-based dungeon crawler.
//!
//! ## Design Principles
//!
//! 1. **One Owner Per Fact**: The level owns every tile; the roster owns
//!    every character. Characters hold a coordinate, tiles hold actor IDs,
//!    and the level's placement methods keep the two in step.
//!
//! 2. **Table-Driven Movement**: Distance limits, hallway access and
//!    border teleports are looked up per archetype from a
//!    `MovementProfile`, never matched on at call sites.
//!
//! 3. **Single Entry Point**: During play every move goes through
//!    `GameManager::accept_movement`, which validates, places and advances
//!    the turn as one step. A rejected move changes nothing.
//!
//! ## Modules
//!
//! - `core`: Positions, actor IDs, move requests, RNG, configuration
//! - `error`: Error types for levels, rosters, placement and moves
//! - `character`: Players, adversaries and the roster
//! - `level`: Tiles, rooms, hallways, placement, views, descriptions
//! - `rules`: Movement legality and validity checks
//! - `game`: Game aggregate and turn-order state machine
//! - `strategy`: Adversary move policies
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod character;
pub mod core;
pub mod error;
pub mod game;
pub mod level;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ActorId, Position,
    GameRng, GameRngState, GameConfig,
    MoveRequest, MoveResult, MoveRecord,
};

pub use crate::error::{LevelError, MoveRejection, PlacementError, RosterError};

pub use crate::character::{
    Character, Role, PlayerRecord,
    Faction, Archetype, ActorKind, MovementProfile,
    Roster,
};

pub use crate::level::{
    Tile, Occupant, Room, RoomId, Hallway, HallwayId, Level,
    Interaction, LevelReport, Observation, LevelDescription,
};

pub use crate::rules::RuleChecker;

pub use crate::game::{
    Game, GameStatus, LevelTransition,
    GameManager, Phase,
    PlayerScore, SpawnSchedule,
};

pub use crate::strategy::{AdversaryPolicy, ChaseNearest, RandomWalk};
