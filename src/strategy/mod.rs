//! Adversary move selection.
//!
//! The manager asks an `AdversaryPolicy` for each adversary's move during
//! the adversary phase. Policies are handed the legal moves up front, so
//! they only ever choose among them.

pub mod policy;

pub use policy::{AdversaryPolicy, ChaseNearest, RandomWalk};
