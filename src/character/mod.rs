//! Characters and the roster that owns them.
//!
//! Players and adversaries share one `Character` type with a `Role` tag.
//! Movement policy differs per archetype and is looked up from the
//! `MovementProfile` table rather than matched on at each call site.

pub mod actor;
pub mod profile;
pub mod roster;

pub use actor::{Character, PlayerRecord, Role};
pub use profile::{ActorKind, Archetype, Faction, MovementProfile};
pub use roster::Roster;
