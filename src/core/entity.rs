//! Actor identification.
//!
//! Every character on the roster (player or adversary) gets a unique
//! `ActorId` when it is admitted. Tiles record their occupants by `ActorId`
//! and characters record their tile by `Position`, so neither side ever holds
//! a reference into the other.
//!
//! ## ID Layout
//!
//! IDs are handed out sequentially by the roster, starting at 0, and are never
//! reused within a game, even after the adversary roster is cleared between
//! levels. A stale ID therefore can't alias a freshly spawned adversary.
//!
//! ```
//! use snarl_engine::core::ActorId;
//!
//! let first = ActorId::new(0);
//! assert_eq!(first.next(), ActorId::new(1));
//! assert_eq!(format!("{}", first), "Actor(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a character in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Create an actor ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}
