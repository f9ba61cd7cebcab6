//! Adversary policies.
//!
//! - `ChaseNearest`: step toward the first player in view, else wander
//! - `RandomWalk`: always wander

use crate::character::{ActorKind, Character};
use crate::core::{GameRng, Position};
use crate::level::Observation;

// =============================================================================
// Policy trait
// =============================================================================

/// Chooses an adversary's move.
pub trait AdversaryPolicy: Send + Sync {
    /// Pick one of `moves` for `actor`.
    ///
    /// `view` is what the adversary can see from where it stands, if it is
    /// placed. Returning `None` leaves the adversary where it is.
    fn choose_move(
        &self,
        actor: &Character,
        moves: &[Position],
        view: Option<&Observation>,
        rng: &mut GameRng,
    ) -> Option<Position>;
}

/// Pick a uniformly random move, or stay put if there is none.
fn wander(actor: &Character, moves: &[Position], rng: &mut GameRng) -> Option<Position> {
    rng.choose(moves).copied().or(actor.position)
}

// =============================================================================
// Chase
// =============================================================================

/// Close in on the first visible player.
///
/// Picks the legal move with the smallest Manhattan distance to that player
/// (the earliest such move on ties). With no player in view it moves at
/// random.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaseNearest;

impl AdversaryPolicy for ChaseNearest {
    fn choose_move(
        &self,
        actor: &Character,
        moves: &[Position],
        view: Option<&Observation>,
        rng: &mut GameRng,
    ) -> Option<Position> {
        let target = view.and_then(|obs| {
            obs.actors
                .iter()
                .find(|a| a.kind == ActorKind::Player)
                .map(|a| a.position)
        });

        match target {
            Some(target) if !moves.is_empty() => {
                moves.iter().copied().min_by_key(|m| m.manhattan(target))
            }
            _ => wander(actor, moves, rng),
        }
    }
}

// =============================================================================
// Random
// =============================================================================

/// Move uniformly at random among the legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomWalk;

impl AdversaryPolicy for RandomWalk {
    fn choose_move(
        &self,
        actor: &Character,
        moves: &[Position],
        _view: Option<&Observation>,
        rng: &mut GameRng,
    ) -> Option<Position> {
        wander(actor, moves, rng)
    }
}
