//! Core engine types: positions, actor IDs, move requests, RNG, configuration.
//!
//! These are the building blocks every other module speaks in. None of them
//! know about tiles, rooms or turn order.

pub mod action;
pub mod config;
pub mod entity;
pub mod position;
pub mod rng;

pub use action::{MoveRecord, MoveRequest, MoveResult};
pub use config::GameConfig;
pub use entity::ActorId;
pub use position::Position;
pub use rng::{GameRng, GameRngState};
