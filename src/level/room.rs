//! Rooms: rectangular blocks of tiles with a wall perimeter.
//!
//! A `Room` is built off-level with room-local coordinates. Adding it to a
//! level moves its tiles into the level's grid, stamps absolute coordinates
//! into them and records the room's origin. From then on the level owns the
//! tiles and the room only describes the area it covers.
//!
//! ```
//! use snarl_engine::level::Room;
//!
//! let mut room = Room::new(5, 5);
//! assert!(room.set_door(1, 4));  // east wall
//! assert!(!room.set_door(0, 0)); // corners can't be doors
//! assert!(!room.set_door(2, 2)); // nor can interior tiles
//! ```

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::Position;
use crate::error::LevelError;

/// Index of a room within its level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u16);

/// Layout code for a wall cell.
pub const LAYOUT_WALL: u8 = 0;
/// Layout code for a floor cell.
pub const LAYOUT_FLOOR: u8 = 1;
/// Layout code for a doorway cell.
pub const LAYOUT_DOOR: u8 = 2;

/// A rectangular room.
#[derive(Clone, Debug)]
pub struct Room {
    rows: usize,
    cols: usize,
    /// Row-major local tiles; emptied once the room is placed.
    tiles: Vec<Tile>,
    origin: Option<Position>,
}

impl Room {
    /// A room whose perimeter is wall and whose interior is floor.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut tiles = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let border = r == 0 || c == 0 || r + 1 == rows || c + 1 == cols;
                tiles.push(Tile::room(Position::new(r as i32, c as i32), border));
            }
        }

        Self {
            rows,
            cols,
            tiles,
            origin: None,
        }
    }

    /// A room built from a 0/1/2 (wall/floor/door) layout.
    ///
    /// `layout` must have exactly `rows` rows of `cols` cells each.
    pub fn from_layout(rows: usize, cols: usize, layout: &[Vec<u8>]) -> Result<Self, LevelError> {
        let mismatch = LevelError::LayoutMismatch { rows, cols };
        if layout.len() != rows || layout.iter().any(|row| row.len() != cols) {
            return Err(mismatch);
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        for (r, row) in layout.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                let pos = Position::new(r as i32, c as i32);
                let tile = match code {
                    LAYOUT_WALL => Tile::room(pos, true),
                    LAYOUT_FLOOR => Tile::room(pos, false),
                    LAYOUT_DOOR => {
                        let mut door = Tile::room(pos, false);
                        door.door = true;
                        door
                    }
                    _ => return Err(mismatch),
                };
                tiles.push(tile);
            }
        }

        Ok(Self {
            rows,
            cols,
            tiles,
            origin: None,
        })
    }

    /// Mark a perimeter tile (not a corner) as a doorway.
    ///
    /// Returns false if the tile is out of range, interior, or a corner.
    /// The tile stays a wall until a hallway is attached to it.
    pub fn set_door(&mut self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols || self.origin.is_some() {
            return false;
        }
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        let on_edge = row == 0 || col == 0 || row == last_row || col == last_col;
        let corner = (row == 0 || row == last_row) && (col == 0 || col == last_col);
        if !on_edge || corner {
            return false;
        }

        let cols = self.cols;
        match self.tiles.get_mut(row * cols + col) {
            Some(tile) if tile.border => {
                tile.door = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Top-left corner on the level, once placed.
    #[must_use]
    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    /// Room-local tile, before the room is placed.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col)
    }

    /// True if the room is placed and covers the given absolute position.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.origin.is_some_and(|o| {
            pos.row >= o.row
                && pos.col >= o.col
                && pos.row < o.row + self.rows as i32
                && pos.col < o.col + self.cols as i32
        })
    }

    /// Hand the tiles over to a level at the given origin.
    pub(crate) fn take_tiles(&mut self, origin: Position) -> Vec<Tile> {
        self.origin = Some(origin);
        let mut tiles = std::mem::take(&mut self.tiles);
        for tile in &mut tiles {
            tile.position = tile.position.offset(origin.row, origin.col);
        }
        tiles
    }
}
