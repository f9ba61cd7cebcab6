//! Move requests and move results.
//!
//! A driver (local prompt loop or remote handler) submits a `MoveRequest`:
//! who wants to move and where. The engine answers with a `MoveResult` tag,
//! the side-channel outcome the driver reports upstream.
//!
//! ```
//! use snarl_engine::core::{ActorId, MoveRequest, MoveResult, Position};
//!
//! let request = MoveRequest::new(ActorId(0), Position::new(1, 3));
//! assert_eq!(request.to, Position::new(1, 3));
//!
//! assert_eq!(MoveResult::Key.as_str(), "Key");
//! ```

use serde::{Deserialize, Serialize};

use super::entity::ActorId;
use super::position::Position;

/// A request to move an actor to a destination tile.
///
/// Staying in place is a move whose destination is the actor's own tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// The actor that wants to move.
    pub actor: ActorId,

    /// The destination tile.
    pub to: Position,
}

impl MoveRequest {
    /// Create a new move request.
    #[must_use]
    pub const fn new(actor: ActorId, to: Position) -> Self {
        Self { actor, to }
    }
}

/// Outcome tag reported back to the driver for one move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Accepted with no special interaction.
    #[serde(rename = "OK")]
    Ok,
    /// Accepted; the mover picked up the key.
    Key,
    /// Accepted; the mover left through the unlocked exit.
    Exit,
    /// Accepted; a player was ejected by the move.
    Eject,
    /// Rejected; nothing changed.
    Invalid,
}

impl MoveResult {
    /// The wire spelling of this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveResult::Ok => "OK",
            MoveResult::Key => "Key",
            MoveResult::Exit => "Exit",
            MoveResult::Eject => "Eject",
            MoveResult::Invalid => "Invalid",
        }
    }

    /// True for every tag except `Invalid`.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, MoveResult::Invalid)
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An applied move, kept in the game's move history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The actor that moved.
    pub actor: ActorId,

    /// The requested destination.
    pub to: Position,

    /// Outcome of the move.
    pub result: MoveResult,

    /// 0-based index of the level the move happened on.
    pub level: usize,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(request: MoveRequest, result: MoveResult, level: usize) -> Self {
        Self {
            actor: request.actor,
            to: request.to,
            result,
            level,
        }
    }
}
