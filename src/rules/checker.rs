//! Movement legality and structural validity checks.
//!
//! `RuleChecker` borrows a level and the roster and answers questions about
//! them without mutating either. Every faction- or archetype-specific rule is
//! read from the actor's `MovementProfile`.
//!
//! ## Usage
//!
//! ```
//! use snarl_engine::character::Roster;
//! use snarl_engine::core::Position;
//! use snarl_engine::level::{Level, Room};
//! use snarl_engine::rules::RuleChecker;
//!
//! let mut level = Level::new(6, 6);
//! level.add_room(Position::new(0, 0), Room::new(5, 5)).unwrap();
//!
//! let mut roster = Roster::default();
//! let p1 = roster.admit_player("p1").unwrap();
//! level.place_player(&mut roster, p1, Position::new(1, 1)).unwrap();
//!
//! let rules = RuleChecker::new(&level, &roster);
//! assert!(rules.is_valid_movement(p1, Position::new(2, 2)));
//! assert!(!rules.is_valid_movement(p1, Position::new(0, 1))); // wall
//! ```

use crate::character::{Character, Roster};
use crate::core::{ActorId, Position};
use crate::game::{Game, GameStatus};
use crate::level::Level;

/// Largest roster a valid game may have.
const MAX_VALID_PLAYERS: usize = 4;

/// Read-only rule queries over one level and its roster.
#[derive(Clone, Copy, Debug)]
pub struct RuleChecker<'a> {
    level: &'a Level,
    roster: &'a Roster,
}

impl<'a> RuleChecker<'a> {
    #[must_use]
    pub fn new(level: &'a Level, roster: &'a Roster) -> Self {
        Self { level, roster }
    }

    /// Whether `actor` may move to `dest` right now.
    #[must_use]
    pub fn is_valid_movement(&self, actor: ActorId, dest: Position) -> bool {
        self.roster
            .get(actor)
            .is_some_and(|character| self.check(character, dest))
    }

    fn check(&self, character: &Character, dest: Position) -> bool {
        let Some(tile) = self.level.tile(dest) else {
            return false;
        };
        if !character.active {
            return false;
        }
        let Some(from) = character.position else {
            return false;
        };

        let faction = character.faction();
        let blocked = tile
            .others_of(faction, character.id)
            .any(|o| self.roster.get(o.id).is_some_and(|c| c.active));
        if blocked {
            return false;
        }

        let profile = character.profile();
        if from.manhattan(dest) > profile.max_distance {
            return false;
        }
        if tile.border && !profile.may_target_border {
            return false;
        }
        if tile.in_hallway && !profile.may_enter_hallway {
            return false;
        }

        true
    }

    /// Every legal destination for `actor`, staying in place first, then
    /// each cardinal direction (left, right, up, down) out to the actor's
    /// search reach. No duplicates.
    #[must_use]
    pub fn valid_moves(&self, actor: ActorId) -> Vec<Position> {
        let Some(character) = self.roster.get(actor) else {
            return Vec::new();
        };
        let Some(from) = character.position else {
            return Vec::new();
        };

        let mut moves: Vec<Position> = Vec::new();
        for dest in from.candidates(character.profile().search_reach) {
            if !moves.contains(&dest) && self.check(character, dest) {
                moves.push(dest);
            }
        }
        moves
    }

    /// A level is playable if it has a key and an exit and no tile belongs
    /// to both a room and a hallway.
    #[must_use]
    pub fn is_valid_level(level: &Level) -> bool {
        level.key().is_some()
            && level.level_exit().is_some()
            && !level.tiles().any(|t| t.in_room && t.in_hallway)
    }

    /// A game is consistent if it has 1-4 players, every placed character
    /// stands on a walkable tile of the current level, and players are
    /// active exactly when the game is in progress.
    #[must_use]
    pub fn is_valid_game_state(game: &Game) -> bool {
        let roster = game.roster();
        if roster.player_count() == 0 || roster.player_count() > MAX_VALID_PLAYERS {
            return false;
        }

        let Some(level) = game.current_level() else {
            return false;
        };
        let on_walkable = |c: &Character| {
            c.position
                .map_or(true, |pos| level.tile(pos).is_some_and(|t| !t.border))
        };
        if !roster.iter().all(on_walkable) {
            return false;
        }

        let any_active = roster.players().iter().any(|p| p.active);
        match game.status() {
            GameStatus::InProgress => any_active,
            GameStatus::Over => !any_active,
        }
    }
}
