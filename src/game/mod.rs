//! The game aggregate and the turn-order state machine.
//!
//! - `state` - `Game`: roster, levels, completion bookkeeping, setup helpers
//! - `manager` - `GameManager`: phases, turn indices, move acceptance
//! - `spawn` - per-level adversary schedule
//! - `report` - end-of-game scores

pub mod manager;
pub mod report;
pub mod spawn;
pub mod state;

pub use manager::{GameManager, Phase};
pub use report::PlayerScore;
pub use spawn::SpawnSchedule;
pub use state::{Game, GameStatus, LevelTransition};
