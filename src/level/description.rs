//! Serializable level descriptions.
//!
//! The description format matches what level files carry: rooms with an
//! origin, bounds and a 0/1/2 layout; hallways between doorway tiles with
//! optional waypoints; and exactly one key and one exit.
//!
//! ```
//! use snarl_engine::level::{Level, LevelDescription};
//!
//! let json = r#"{
//!   "rooms": [
//!     { "origin": [0, 0], "bounds": { "rows": 3, "columns": 4 },
//!       "layout": [[0, 0, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]] }
//!   ],
//!   "hallways": [],
//!   "objects": [
//!     { "type": "key",  "position": [1, 1] },
//!     { "type": "exit", "position": [1, 2] }
//!   ]
//! }"#;
//!
//! let desc: LevelDescription = serde_json::from_str(json).unwrap();
//! let level = Level::from_description(4, 4, &desc).unwrap();
//! assert!(level.tile((1, 1).into()).unwrap().key);
//! ```

use serde::{Deserialize, Serialize};

use super::grid::Level;
use super::room::Room;
use crate::core::Position;
use crate::error::LevelError;

/// Room dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDescription {
    pub origin: Position,
    pub bounds: Bounds,
    pub layout: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallwayDescription {
    pub from: Position,
    pub to: Position,
    #[serde(default)]
    pub waypoints: Vec<Position>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDescription {
    Key { position: Position },
    Exit { position: Position },
}

/// A whole level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescription {
    pub rooms: Vec<RoomDescription>,
    #[serde(default)]
    pub hallways: Vec<HallwayDescription>,
    pub objects: Vec<ObjectDescription>,
}

impl Level {
    /// Build a `rows x cols` level from a description.
    ///
    /// Each hallway is attached to whichever rooms contain its endpoints.
    /// The description must name exactly one key and one exit.
    pub fn from_description(
        rows: usize,
        cols: usize,
        desc: &LevelDescription,
    ) -> Result<Self, LevelError> {
        let mut level = Level::new(rows, cols);

        for room in &desc.rooms {
            let built = Room::from_layout(room.bounds.rows, room.bounds.columns, &room.layout)?;
            level.add_room(room.origin, built)?;
        }

        for hallway in &desc.hallways {
            let from_room = level
                .room_at(hallway.from)
                .ok_or(LevelError::UnattachedEndpoint(hallway.from))?;
            let to_room = level
                .room_at(hallway.to)
                .ok_or(LevelError::UnattachedEndpoint(hallway.to))?;
            level.add_hallway(
                hallway.from,
                hallway.to,
                &hallway.waypoints,
                [from_room, to_room],
            )?;
        }

        let mut key = None;
        let mut exit = None;
        for object in &desc.objects {
            match *object {
                ObjectDescription::Key { position } => {
                    if key.replace(position).is_some() {
                        return Err(LevelError::DuplicateObject("key"));
                    }
                }
                ObjectDescription::Exit { position } => {
                    if exit.replace(position).is_some() {
                        return Err(LevelError::DuplicateObject("exit"));
                    }
                }
            }
        }

        level.set_key(key.ok_or(LevelError::MissingKey)?)?;
        level.set_level_exit(exit.ok_or(LevelError::MissingExit)?)?;
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Roster;

    fn boxed(rows: usize, cols: usize, doors: &[(usize, usize)]) -> Vec<Vec<u8>> {
        let mut layout = vec![vec![1u8; cols]; rows];
        for (r, row) in layout.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                    *cell = 0;
                }
            }
        }
        for &(r, c) in doors {
            layout[r][c] = 2;
        }
        layout
    }

    fn sample() -> LevelDescription {
        LevelDescription {
            rooms: vec![
                RoomDescription {
                    origin: Position::new(0, 0),
                    bounds: Bounds {
                        rows: 5,
                        columns: 5,
                    },
                    layout: boxed(5, 5, &[(1, 4)]),
                },
                RoomDescription {
                    origin: Position::new(6, 6),
                    bounds: Bounds {
                        rows: 4,
                        columns: 4,
                    },
                    layout: boxed(4, 4, &[(0, 1)]),
                },
            ],
            hallways: vec![HallwayDescription {
                from: Position::new(1, 4),
                to: Position::new(6, 7),
                waypoints: vec![Position::new(1, 7)],
            }],
            objects: vec![
                ObjectDescription::Key {
                    position: Position::new(7, 7),
                },
                ObjectDescription::Exit {
                    position: Position::new(8, 7),
                },
            ],
        }
    }

    #[test]
    fn test_from_description_renders() {
        let level = Level::from_description(12, 12, &sample()).unwrap();

        let expected = [
            "XXXXXXXXXXXX",
            "X.../...XXXX",
            "X...XXX.XXXX",
            "X...XXX.XXXX",
            "XXXXXXX.XXXX",
            "XXXXXXX.XXXX",
            "XXXXXXX/XXXX",
            "XXXXXXX+.XXX",
            "XXXXXXXo.XXX",
            "XXXXXXXXXXXX",
            "XXXXXXXXXXXX",
            "XXXXXXXXXXXX",
        ];
        assert_eq!(level.render(&Roster::default()), expected);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "type": "level",
            "rooms": [
                { "type": "room", "origin": [0, 0],
                  "bounds": { "rows": 3, "columns": 3 },
                  "layout": [[0, 0, 0], [0, 1, 0], [0, 0, 0]] },
                { "type": "room", "origin": [0, 5],
                  "bounds": { "rows": 3, "columns": 3 },
                  "layout": [[0, 0, 0], [0, 1, 0], [0, 0, 0]] }
            ],
            "hallways": [
                { "type": "hallway", "from": [1, 2], "to": [1, 5], "waypoints": [] }
            ],
            "objects": [
                { "type": "key", "position": [1, 1] },
                { "type": "exit", "position": [1, 6] }
            ]
        }"#;
        let desc: LevelDescription = serde_json::from_str(json).unwrap();
        let level = Level::from_description(3, 8, &desc).unwrap();

        assert_eq!(level.rooms().len(), 2);
        assert_eq!(
            level.hallways()[0].tiles(),
            &[Position::new(1, 3), Position::new(1, 4)]
        );
        assert!(level.tile(Position::new(1, 2)).unwrap().door);
    }

    #[test]
    fn test_objects_required_and_unique() {
        let mut no_key = sample();
        no_key.objects.remove(0);
        assert_eq!(
            Level::from_description(12, 12, &no_key).unwrap_err(),
            LevelError::MissingKey
        );

        let mut two_exits = sample();
        two_exits.objects.push(ObjectDescription::Exit {
            position: Position::new(2, 2),
        });
        assert_eq!(
            Level::from_description(12, 12, &two_exits).unwrap_err(),
            LevelError::DuplicateObject("exit")
        );
    }

    #[test]
    fn test_unattached_hallway() {
        let mut desc = sample();
        desc.hallways[0].from = Position::new(11, 0);
        assert_eq!(
            Level::from_description(12, 12, &desc).unwrap_err(),
            LevelError::UnattachedEndpoint(Position::new(11, 0))
        );
    }
}
