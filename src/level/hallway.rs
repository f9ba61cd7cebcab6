//! Hallways: straight-legged corridors between two room doorways.

use serde::{Deserialize, Serialize};

use super::room::RoomId;
use crate::core::Position;

/// Index of a hallway within its level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HallwayId(pub u16);

/// A hallway on a level.
///
/// The hallway references the two rooms it connects; it does not own them.
/// Its tiles live in the level grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hallway {
    pub(crate) entrance: Position,
    pub(crate) exit: Position,
    pub(crate) waypoints: Vec<Position>,
    pub(crate) tiles: Vec<Position>,
    pub(crate) rooms: [RoomId; 2],
}

impl Hallway {
    /// Doorway tile in the first room.
    #[must_use]
    pub fn entrance(&self) -> Position {
        self.entrance
    }

    /// Doorway tile in the second room.
    #[must_use]
    pub fn exit(&self) -> Position {
        self.exit
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    /// Positions of the hallway's own tiles, from entrance to exit. Doorways
    /// belong to their rooms and are not included.
    #[must_use]
    pub fn tiles(&self) -> &[Position] {
        &self.tiles
    }

    /// The two rooms this hallway connects.
    #[must_use]
    pub fn rooms(&self) -> [RoomId; 2] {
        self.rooms
    }
}

/// Cells strictly between two axis-aligned points, walking from `from`.
///
/// Callers check alignment first; for a misaligned pair this yields nothing.
pub(crate) fn cells_between(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let (d_row, d_col) = ((to.row - from.row).signum(), (to.col - from.col).signum());
    let steps = if from.is_axis_aligned_with(to) {
        from.manhattan(to).saturating_sub(1) as i32
    } else {
        0
    };

    (1..=steps).map(move |i| from.offset(d_row * i, d_col * i))
}
