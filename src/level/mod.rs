//! The spatial model: tiles, rooms, hallways and the level that owns them.
//!
//! - `tile` - `Tile` and its occupants
//! - `room` - rectangular rooms built off-level and then placed
//! - `hallway` - straight-legged corridors between room doorways
//! - `grid` - the `Level` arena and construction
//! - `placement` - moving characters and resolving key/exit/eject
//! - `view` - text rendering and observations
//! - `description` - serializable level descriptions

pub mod description;
pub mod grid;
pub mod hallway;
pub mod placement;
pub mod room;
pub mod tile;
pub mod view;

pub use description::{Bounds, HallwayDescription, LevelDescription, ObjectDescription, RoomDescription};
pub use grid::{Level, MIN_ROOM_SIDE};
pub use hallway::{Hallway, HallwayId};
pub use placement::{Interaction, LevelReport};
pub use room::{Room, RoomId};
pub use tile::{Occupant, Tile};
pub use view::{ActorSighting, ObjectKind, ObjectSighting, Observation};
