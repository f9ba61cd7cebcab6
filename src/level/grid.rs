//! The level: a fixed-size grid of rooms and hallways.
//!
//! The level owns every tile in a row-major arena of `Option<Tile>`; `None`
//! marks a void cell that belongs to no room or hallway. Rooms and hallways
//! are recorded alongside for lookups, but the arena is the single source of
//! truth for tile flags and occupancy.
//!
//! ## Usage
//!
//! ```
//! use snarl_engine::core::Position;
//! use snarl_engine::level::{Level, Room};
//!
//! let mut level = Level::new(12, 12);
//! let west = level.add_room(Position::new(0, 0), Room::new(5, 5)).unwrap();
//! let east = level.add_room(Position::new(6, 6), Room::new(4, 4)).unwrap();
//!
//! level
//!     .add_hallway(
//!         Position::new(1, 4),
//!         Position::new(6, 7),
//!         &[Position::new(1, 7)],
//!         [west, east],
//!     )
//!     .unwrap();
//! level.set_key(Position::new(7, 7)).unwrap();
//! level.set_level_exit(Position::new(8, 7)).unwrap();
//!
//! assert_eq!(level.player_start(), Some(Position::new(1, 1)));
//! assert!(level.tile(Position::new(3, 7)).unwrap().in_hallway);
//! ```

use log::debug;
use rustc_hash::FxHashSet;

use super::hallway::{cells_between, Hallway, HallwayId};
use super::placement::LevelReport;
use super::room::{Room, RoomId};
use super::tile::Tile;
use crate::core::{ActorId, Position};
use crate::error::LevelError;

/// Smallest room side, wall included.
pub const MIN_ROOM_SIDE: usize = 3;

/// One level of the dungeon.
#[derive(Clone, Debug)]
pub struct Level {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Tile>>,
    rooms: Vec<Room>,
    hallways: Vec<Hallway>,

    key: Option<Position>,
    level_exit: Option<Position>,

    player_start: Position,
    adversary_start: Position,

    pub(crate) exit_unlocked: bool,
    pub(crate) level_over: bool,
    pub(crate) departed: Vec<ActorId>,
    pub(crate) last_interaction: Option<String>,
    pub(crate) report: LevelReport,
}

impl Level {
    /// An empty level of the given size.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            rooms: Vec::new(),
            hallways: Vec::new(),
            key: None,
            level_exit: None,
            player_start: Position::new(rows as i32, cols as i32),
            adversary_start: Position::new(0, 0),
            exit_unlocked: false,
            level_over: false,
            departed: Vec::new(),
            last_interaction: None,
            report: LevelReport::default(),
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

    /// True if the position lies on the grid (tile or void).
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let (row, col) = (usize::try_from(pos.row).ok()?, usize::try_from(pos.col).ok()?);
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// The tile at a position, if any.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.cells.get(self.index(pos)?)?.as_ref()
    }

    pub(crate) fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        let idx = self.index(pos)?;
        self.cells.get_mut(idx)?.as_mut()
    }

    /// Every tile on the level, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Room tiles a character could be dropped onto: floor that is not a
    /// doorway and holds neither the key nor the exit.
    pub fn open_room_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles()
            .filter(|t| t.in_room && !t.border && !t.door && !t.key && !t.level_exit)
    }

    // === Construction ===

    /// Place a room with its top-left corner at `origin`.
    ///
    /// Fails if the room is smaller than 3x3, leaves the level, or overlaps
    /// any existing tile. On failure the level is unchanged.
    pub fn add_room(&mut self, origin: Position, mut room: Room) -> Result<RoomId, LevelError> {
        let (rows, cols) = (room.rows(), room.cols());
        if rows < MIN_ROOM_SIDE || cols < MIN_ROOM_SIDE {
            return Err(LevelError::RoomTooSmall { rows, cols });
        }

        let far_corner = origin.offset(rows as i32 - 1, cols as i32 - 1);
        if !self.in_bounds(origin) || !self.in_bounds(far_corner) {
            return Err(LevelError::RoomOutOfBounds { origin, rows, cols });
        }

        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                let pos = origin.offset(r, c);
                if self.tile(pos).is_some() {
                    return Err(LevelError::Overlap(pos));
                }
            }
        }

        for tile in room.take_tiles(origin) {
            if let Some(idx) = self.index(tile.position) {
                self.cells[idx] = Some(tile);
            }
        }

        self.update_start_points(origin, rows, cols);

        let id = RoomId(self.rooms.len() as u16);
        self.rooms.push(room);
        debug!("added {rows}x{cols} room {id:?} at {origin}");
        Ok(id)
    }

    /// Players start one tile inside the top-left-most room; adversaries
    /// one tile inside the bottom-right corner of the bottom-right-most room.
    fn update_start_points(&mut self, origin: Position, rows: usize, cols: usize) {
        if origin.row < self.player_start.row && origin.col < self.player_start.col {
            self.player_start = origin.offset(1, 1);
        }

        let (bottom, right) = (origin.row + rows as i32, origin.col + cols as i32);
        if bottom > self.adversary_start.row && right > self.adversary_start.col {
            self.adversary_start = Position::new(bottom - 2, right - 2);
        }
    }

    /// Connect two rooms with a hallway.
    ///
    /// The path runs entrance, each waypoint in order, exit. Every leg must
    /// be a straight horizontal or vertical line. A new hallway tile is
    /// created for each waypoint and each cell strictly between consecutive
    /// points; all of those cells must lie on the level and be empty. The
    /// entrance and exit must be existing tiles and become doorways.
    ///
    /// Nothing is committed unless the whole path is valid.
    pub fn add_hallway(
        &mut self,
        entrance: Position,
        exit: Position,
        waypoints: &[Position],
        rooms: [RoomId; 2],
    ) -> Result<HallwayId, LevelError> {
        for room in rooms {
            if self.room(room).is_none() {
                return Err(LevelError::UnknownRoom(room));
            }
        }
        for end in [entrance, exit] {
            if self.tile(end).is_none() {
                return Err(LevelError::MissingTile(end));
            }
        }

        let mut staged: Vec<Position> = Vec::new();
        let mut claimed: FxHashSet<Position> = FxHashSet::default();
        let mut claim = |level: &Self, pos: Position| -> Result<(), LevelError> {
            if !level.in_bounds(pos) {
                return Err(LevelError::HallwayOutOfBounds(pos));
            }
            if level.tile(pos).is_some() || !claimed.insert(pos) {
                return Err(LevelError::Overlap(pos));
            }
            staged.push(pos);
            Ok(())
        };

        let mut from = entrance;
        for (i, &to) in waypoints.iter().chain(std::iter::once(&exit)).enumerate() {
            if !from.is_axis_aligned_with(to) {
                return Err(LevelError::DiagonalLeg { from, to });
            }
            for cell in cells_between(from, to) {
                claim(self, cell)?;
            }
            if i < waypoints.len() {
                claim(self, to)?;
            }
            from = to;
        }

        for &pos in &staged {
            if let Some(idx) = self.index(pos) {
                self.cells[idx] = Some(Tile::hallway(pos));
            }
        }
        for end in [entrance, exit] {
            if let Some(tile) = self.tile_mut(end) {
                tile.border = false;
                tile.door = true;
            }
        }

        let id = HallwayId(self.hallways.len() as u16);
        debug!(
            "added hallway {id:?} {entrance} -> {exit} ({} tiles)",
            staged.len()
        );
        self.hallways.push(Hallway {
            entrance,
            exit,
            waypoints: waypoints.to_vec(),
            tiles: staged,
            rooms,
        });
        Ok(id)
    }

    fn check_object_tile(&self, pos: Position, object: &'static str) -> Result<(), LevelError> {
        let invalid = LevelError::InvalidObjectTile {
            object,
            position: pos,
        };
        let tile = self.tile(pos).ok_or_else(|| invalid.clone())?;
        if tile.in_hallway || tile.border || tile.door {
            return Err(invalid);
        }
        Ok(())
    }

    /// Put the level key on a room floor tile.
    ///
    /// Replaces any previous key. Fails on hallways, walls, doorways and the
    /// exit tile.
    pub fn set_key(&mut self, pos: Position) -> Result<(), LevelError> {
        self.check_object_tile(pos, "key")?;
        if self.level_exit == Some(pos) {
            return Err(LevelError::InvalidObjectTile {
                object: "key",
                position: pos,
            });
        }

        if let Some(old) = self.key.take().and_then(|old| self.tile_mut(old)) {
            old.key = false;
        }
        if let Some(tile) = self.tile_mut(pos) {
            tile.key = true;
        }
        self.key = Some(pos);
        Ok(())
    }

    /// Put the level exit on a room floor tile.
    ///
    /// Replaces any previous exit. Fails on hallways, walls, doorways and the
    /// key tile.
    pub fn set_level_exit(&mut self, pos: Position) -> Result<(), LevelError> {
        self.check_object_tile(pos, "exit")?;
        if self.key == Some(pos) {
            return Err(LevelError::InvalidObjectTile {
                object: "exit",
                position: pos,
            });
        }

        if let Some(old) = self.level_exit.take().and_then(|old| self.tile_mut(old)) {
            old.level_exit = false;
        }
        if let Some(tile) = self.tile_mut(pos) {
            tile.level_exit = true;
        }
        self.level_exit = Some(pos);
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0 as usize)
    }

    /// The room covering a position.
    #[must_use]
    pub fn room_at(&self, pos: Position) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.contains(pos))
            .map(|i| RoomId(i as u16))
    }

    #[must_use]
    pub fn hallways(&self) -> &[Hallway] {
        &self.hallways
    }

    #[must_use]
    pub fn hallway(&self, id: HallwayId) -> Option<&Hallway> {
        self.hallways.get(id.0 as usize)
    }

    /// Where the key was placed. Stays set after the key is collected.
    #[must_use]
    pub fn key(&self) -> Option<Position> {
        self.key
    }

    #[must_use]
    pub fn level_exit(&self) -> Option<Position> {
        self.level_exit
    }

    /// Default player start, or `None` before any room is added.
    #[must_use]
    pub fn player_start(&self) -> Option<Position> {
        (!self.rooms.is_empty()).then_some(self.player_start)
    }

    /// Default adversary start, or `None` before any room is added.
    #[must_use]
    pub fn adversary_start(&self) -> Option<Position> {
        (!self.rooms.is_empty()).then_some(self.adversary_start)
    }

    /// True once a player has picked up the key.
    #[must_use]
    pub fn is_exit_unlocked(&self) -> bool {
        self.exit_unlocked
    }

    /// True once a player has walked through the unlocked exit.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.level_over
    }

    /// Characters that have left this level, by exit or ejection, in order.
    #[must_use]
    pub fn departed(&self) -> &[ActorId] {
        &self.departed
    }

    #[must_use]
    pub fn has_departed(&self, id: ActorId) -> bool {
        self.departed.contains(&id)
    }

    /// Human-readable description of the most recent interaction.
    #[must_use]
    pub fn last_interaction(&self) -> Option<&str> {
        self.last_interaction.as_deref()
    }

    /// What has happened on this level so far.
    #[must_use]
    pub fn report(&self) -> &LevelReport {
        &self.report
    }
}
