//! Game configuration.
//!
//! Drivers configure a game at startup through `GameConfig`. Every field has
//! a default matching the standard rules, so `GameConfig::default()` is a
//! complete configuration; the builder methods override individual knobs.

use serde::{Deserialize, Serialize};

/// Maximum number of players the standard rules admit.
pub const DEFAULT_MAX_PLAYERS: usize = 4;

/// Radius (in tiles) of a player's bounded view.
pub const DEFAULT_VIEW_RADIUS: i32 = 2;

/// Default level grid size when loading from a description.
pub const DEFAULT_LEVEL_SIZE: usize = 20;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Roster cap for players.
    pub max_players: usize,

    /// How many tiles in each direction a bounded view shows.
    pub view_radius: i32,

    /// Rows of a level built from a description.
    pub level_rows: usize,

    /// Columns of a level built from a description.
    pub level_cols: usize,

    /// Seed for the game's RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            view_radius: DEFAULT_VIEW_RADIUS,
            level_rows: DEFAULT_LEVEL_SIZE,
            level_cols: DEFAULT_LEVEL_SIZE,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the player cap.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the bounded-view radius.
    #[must_use]
    pub fn with_view_radius(mut self, radius: i32) -> Self {
        self.view_radius = radius;
        self
    }

    /// Set the grid size used for levels built from descriptions.
    #[must_use]
    pub fn with_level_size(mut self, rows: usize, cols: usize) -> Self {
        self.level_rows = rows;
        self.level_cols = cols;
        self
    }
}
