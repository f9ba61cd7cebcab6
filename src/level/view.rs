//! Text rendering and player observations.
//!
//! Each cell renders as one glyph, highest priority first:
//!
//! | Glyph      | Meaning                                |
//! |------------|----------------------------------------|
//! | `1`-`9`/`P`| player (turn index, `P` past 9)        |
//! | `Z` / `G`  | zombie / ghost                         |
//! | `o`        | level exit                             |
//! | `/`        | doorway                                |
//! | `X`        | wall or void                           |
//! | `+`        | key                                    |
//! | `.`        | floor or hallway                       |

use serde::{Deserialize, Serialize};

use super::grid::Level;
use crate::character::{ActorKind, Roster};
use crate::core::{ActorId, Position};

/// Observation layout code for walls, void and off-grid cells.
pub const OBSERVED_WALL: u8 = 0;
/// Observation layout code for walkable cells.
pub const OBSERVED_FLOOR: u8 = 1;
/// Observation layout code for doorways.
pub const OBSERVED_DOOR: u8 = 2;

/// Objects a player can see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Key,
    Exit,
}

/// A visible object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSighting {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub position: Position,
}

/// Another character within view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSighting {
    #[serde(rename = "type")]
    pub kind: ActorKind,
    pub name: String,
    pub position: Position,
}

/// What a player sees from where it stands.
///
/// `layout` is always `(2r + 1) x (2r + 1)` centred on the player; cells off
/// the level are walls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub position: Position,
    pub layout: Vec<Vec<u8>>,
    pub objects: Vec<ObjectSighting>,
    pub actors: Vec<ActorSighting>,
}

impl Level {
    /// Glyph for one cell.
    #[must_use]
    pub fn glyph_at(&self, roster: &Roster, pos: Position) -> char {
        let Some(tile) = self.tile(pos) else {
            return 'X';
        };

        if let Some(occupant) = tile.occupants().first() {
            return roster.get(occupant.id).map_or('P', |c| c.glyph());
        }
        if tile.level_exit {
            'o'
        } else if tile.door {
            '/'
        } else if tile.border {
            'X'
        } else if tile.key {
            '+'
        } else {
            '.'
        }
    }

    /// The whole level, one string per row.
    #[must_use]
    pub fn render(&self, roster: &Roster) -> Vec<String> {
        (0..self.rows() as i32)
            .map(|r| {
                (0..self.cols() as i32)
                    .map(|c| self.glyph_at(roster, Position::new(r, c)))
                    .collect()
            })
            .collect()
    }

    /// The cells within `radius` of `center` on both axes, clipped to the
    /// level.
    #[must_use]
    pub fn render_window(&self, roster: &Roster, center: Position, radius: i32) -> Vec<String> {
        let last_row = self.rows() as i32 - 1;
        let last_col = self.cols() as i32 - 1;
        let rows = (center.row - radius).max(0)..=(center.row + radius).min(last_row);
        let cols = (center.col - radius).max(0)..=(center.col + radius).min(last_col);

        rows.map(|r| {
            cols.clone()
                .map(|c| self.glyph_at(roster, Position::new(r, c)))
                .collect()
        })
        .collect()
    }

    /// The rendered window around a placed character.
    #[must_use]
    pub fn render_view(&self, roster: &Roster, viewer: ActorId, radius: i32) -> Option<Vec<String>> {
        let center = roster.get(viewer)?.position?;
        Some(self.render_window(roster, center, radius))
    }

    fn layout_code(&self, pos: Position) -> u8 {
        match self.tile(pos) {
            Some(t) if t.door => OBSERVED_DOOR,
            Some(t) if !t.border => OBSERVED_FLOOR,
            _ => OBSERVED_WALL,
        }
    }

    /// What a placed character sees within `radius`.
    #[must_use]
    pub fn observe(&self, roster: &Roster, viewer: ActorId, radius: i32) -> Option<Observation> {
        let center = roster.get(viewer)?.position?;

        let mut layout = Vec::with_capacity((2 * radius + 1).max(0) as usize);
        let mut objects = Vec::new();
        let mut actors = Vec::new();

        for r in center.row - radius..=center.row + radius {
            let mut row = Vec::with_capacity((2 * radius + 1).max(0) as usize);
            for c in center.col - radius..=center.col + radius {
                let pos = Position::new(r, c);
                row.push(self.layout_code(pos));

                let Some(tile) = self.tile(pos) else {
                    continue;
                };
                if tile.key && !self.exit_unlocked {
                    objects.push(ObjectSighting {
                        kind: ObjectKind::Key,
                        position: pos,
                    });
                }
                if tile.level_exit {
                    objects.push(ObjectSighting {
                        kind: ObjectKind::Exit,
                        position: pos,
                    });
                }
                for occupant in tile.occupants().iter().filter(|o| o.id != viewer) {
                    if let Some(other) = roster.get(occupant.id) {
                        actors.push(ActorSighting {
                            kind: other.kind(),
                            name: other.name.clone(),
                            position: pos,
                        });
                    }
                }
            }
            layout.push(row);
        }

        Some(Observation {
            position: center,
            layout,
            objects,
            actors,
        })
    }
}
