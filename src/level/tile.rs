//! Tiles and their occupants.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::character::Faction;
use crate::core::{ActorId, Position};

/// A character standing on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub id: ActorId,
    pub faction: Faction,
}

/// One cell of a room or hallway.
///
/// Tiles are created when their room or hallway is built and never move.
/// Flags and occupancy are mutated in place. The occupant list normally
/// holds at most one character of each faction, but that is enforced by the
/// rules and the level's placement logic, not by the tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Absolute position once the owning room or hallway is on a level;
    /// room-local before that.
    pub position: Position,

    /// Impassable wall (room perimeter, or a wall cell inside a layout).
    pub border: bool,

    /// Doorway between a room and a hallway.
    pub door: bool,

    /// The level's goal tile.
    pub level_exit: bool,

    /// Holds the (still uncollected) level key.
    pub key: bool,

    pub in_room: bool,
    pub in_hallway: bool,

    occupants: SmallVec<[Occupant; 2]>,
}

impl Tile {
    /// A room tile.
    #[must_use]
    pub fn room(position: Position, border: bool) -> Self {
        Self {
            position,
            border,
            door: false,
            level_exit: false,
            key: false,
            in_room: true,
            in_hallway: false,
            occupants: SmallVec::new(),
        }
    }

    /// A hallway tile.
    #[must_use]
    pub fn hallway(position: Position) -> Self {
        Self {
            position,
            border: false,
            door: false,
            level_exit: false,
            key: false,
            in_room: false,
            in_hallway: true,
            occupants: SmallVec::new(),
        }
    }

    /// Characters on this tile, in arrival order.
    #[must_use]
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        !self.occupants.is_empty()
    }

    /// True if the given character stands here.
    #[must_use]
    pub fn holds(&self, id: ActorId) -> bool {
        self.occupants.iter().any(|o| o.id == id)
    }

    /// Occupants of the given faction other than `except`.
    pub fn others_of(&self, faction: Faction, except: ActorId) -> impl Iterator<Item = &Occupant> {
        self.occupants
            .iter()
            .filter(move |o| o.faction == faction && o.id != except)
    }

    pub(crate) fn add_occupant(&mut self, occupant: Occupant) {
        if !self.holds(occupant.id) {
            self.occupants.push(occupant);
        }
    }

    pub(crate) fn remove_occupant(&mut self, id: ActorId) -> bool {
        let before = self.occupants.len();
        self.occupants.retain(|o| o.id != id);
        self.occupants.len() != before
    }
}
