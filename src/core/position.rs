//! Grid coordinates.
//!
//! Every tile, character and object is addressed by a `(row, col)` pair.
//! Coordinates are signed so that neighbour arithmetic near the top-left edge
//! (e.g. `col - 1` at column 0) yields an off-grid position instead of
//! wrapping; the level simply reports no tile there.
//!
//! ## Usage
//!
//! ```
//! use snarl_engine::core::Position;
//!
//! let here = Position::new(3, 4);
//! let there = Position::new(1, 5);
//!
//! assert_eq!(here.manhattan(there), 3);
//! assert_eq!(here.offset(0, -1), Position::new(3, 3));
//! ```

use serde::{Deserialize, Serialize};

/// A `(row, col)` grid coordinate.
///
/// Serializes as a two-element array `[row, col]`, which is how level
/// descriptions and observations spell positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by a row and column delta.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if moving from `self` to `other` changes only one axis.
    #[must_use]
    pub const fn is_axis_aligned_with(self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Candidate destinations for an actor that may look `reach` tiles out.
    ///
    /// Order: in place, then for each reach step left, right, up, down.
    /// The same order the move enumeration reports moves in.
    pub fn candidates(self, reach: i32) -> impl Iterator<Item = Position> {
        const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

        std::iter::once(self).chain(DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
            (1..=reach).map(move |step| self.offset(dr * step, dc * step))
        }))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
