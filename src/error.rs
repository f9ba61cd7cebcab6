//! Error types for level construction, roster admission, placement and moves.
//!
//! Building a level can fail with a `LevelError`, which is fatal for that
//! level. A rejected move (`MoveRejection`) is an ordinary outcome: the driver
//! retries or skips. Being ejected is not an error at all; placement reports
//! it as `Interaction::Ejected`.

use thiserror::Error;

use crate::core::{ActorId, MoveResult, Position};
use crate::level::RoomId;

/// A level description or construction step that can't be honoured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("room of {rows}x{cols} is smaller than 3x3")]
    RoomTooSmall { rows: usize, cols: usize },

    #[error("room of {rows}x{cols} at {origin} extends past the level bounds")]
    RoomOutOfBounds {
        origin: Position,
        rows: usize,
        cols: usize,
    },

    #[error("cell {0} is already part of a room or hallway")]
    Overlap(Position),

    #[error("no tile at {0}")]
    MissingTile(Position),

    #[error("hallway leg from {from} to {to} is not a straight line")]
    DiagonalLeg { from: Position, to: Position },

    #[error("hallway leaves the level at {0}")]
    HallwayOutOfBounds(Position),

    #[error("hallway endpoint {0} is not inside any room")]
    UnattachedEndpoint(Position),

    #[error("unknown room {0:?}")]
    UnknownRoom(RoomId),

    #[error("cannot put the {object} at {position}")]
    InvalidObjectTile {
        object: &'static str,
        position: Position,
    },

    #[error("room layout does not match its {rows}x{cols} bounds")]
    LayoutMismatch { rows: usize, cols: usize },

    #[error("level has no key")]
    MissingKey,

    #[error("level has no exit")]
    MissingExit,

    #[error("level declares more than one {0}")]
    DuplicateObject(&'static str),
}

/// Refusal to admit a character to the roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster is full ({max} players)")]
    Full { max: usize },

    #[error("name '{0}' is already taken")]
    DuplicateName(String),
}

/// A placement the level refused. The level is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no tile at {0}")]
    NoTile(Position),

    #[error("{0} is a border tile")]
    Border(Position),

    #[error("{position} is held by {by}")]
    Occupied { position: Position, by: ActorId },

    #[error("{0} is not on the roster")]
    UnknownActor(ActorId),

    #[error("{0} has not been placed on the level")]
    NotPlaced(ActorId),

    #[error("no room tile is free for a teleport")]
    NoTeleportTarget,

    #[error("no free room tile to start on")]
    NoFreeTile,

    #[error("the level is already over")]
    LevelClosed,
}

/// Why the game manager turned down a move request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("the game is not in progress")]
    NotInProgress,

    #[error("it is not {0}'s turn")]
    OutOfTurn(ActorId),

    #[error("illegal move for {actor} to {to}")]
    IllegalMove { actor: ActorId, to: Position },

    #[error("{0} is not on the roster")]
    UnknownActor(ActorId),

    #[error("placement failed: {0}")]
    Blocked(#[from] PlacementError),
}

impl MoveRejection {
    /// The protocol tag for a rejected move.
    #[must_use]
    pub fn tag(&self) -> MoveResult {
        MoveResult::Invalid
    }
}
