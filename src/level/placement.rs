//! Putting characters on tiles and resolving what happens when they land.
//!
//! Placement does not check movement legality (distance, hallways, turn
//! order); that is the rule checker's job. It does enforce the occupancy
//! invariants: one player per tile, one adversary per tile, no one on a
//! wall. Every placement validates first and mutates only once it is sure
//! to succeed, so an `Err` leaves the level and roster untouched.
//!
//! Landing resolves at most one interaction:
//!
//! - a player stepping onto the key unlocks the exit
//! - a player stepping onto the unlocked exit leaves the level and ends it
//! - a player stepping onto an adversary, or an adversary onto a player,
//!   ejects the player

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::grid::Level;
use super::tile::Occupant;
use crate::character::{Faction, Roster};
use crate::core::{ActorId, GameRng, MoveResult, Position};
use crate::error::PlacementError;

/// The outcome of a successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    /// Plain move; nothing else happened.
    Moved,
    /// The mover picked up the key.
    KeyFound,
    /// The mover left through the unlocked exit.
    ExitReached,
    /// A player was ejected.
    Ejected { victim: ActorId },
}

impl Interaction {
    /// The protocol tag for this outcome.
    #[must_use]
    pub fn tag(self) -> MoveResult {
        match self {
            Interaction::Moved => MoveResult::Ok,
            Interaction::KeyFound => MoveResult::Key,
            Interaction::ExitReached => MoveResult::Exit,
            Interaction::Ejected { .. } => MoveResult::Eject,
        }
    }
}

/// Per-level summary of who did what.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReport {
    /// Name of the player who found the key.
    pub key: Option<String>,
    /// Names of players who exited, in order.
    pub exits: Vec<String>,
    /// Names of players who were ejected, in order.
    pub ejects: Vec<String>,
}

impl Level {
    /// Put a player on a tile.
    ///
    /// Fails on a missing or wall tile, or one held by another active
    /// player. Landing on an adversary ejects the mover.
    pub fn place_player(
        &mut self,
        roster: &mut Roster,
        id: ActorId,
        dest: Position,
    ) -> Result<Interaction, PlacementError> {
        match roster.get(id) {
            Some(c) if c.is_player() => {}
            _ => return Err(PlacementError::UnknownActor(id)),
        }

        let tile = self.tile(dest).ok_or(PlacementError::NoTile(dest))?;
        if tile.border {
            return Err(PlacementError::Border(dest));
        }

        let blocker = tile
            .others_of(Faction::Player, id)
            .find(|o| roster.get(o.id).is_some_and(|c| c.active));
        if let Some(other) = blocker {
            return Err(PlacementError::Occupied {
                position: dest,
                by: other.id,
            });
        }

        if tile.others_of(Faction::Adversary, id).next().is_some() {
            return if self.eliminate(roster, id) {
                Ok(Interaction::Ejected { victim: id })
            } else {
                Err(PlacementError::LevelClosed)
            };
        }

        self.move_occupant(roster, id, Faction::Player, dest)?;

        let (on_key, on_exit) = match self.tile(dest) {
            Some(t) => (t.key, t.level_exit),
            None => (false, false),
        };

        if on_key {
            self.collect_key(roster, id, dest);
            Ok(Interaction::KeyFound)
        } else if on_exit && self.exit_unlocked && !self.has_departed(id) {
            self.take_exit(roster, id);
            Ok(Interaction::ExitReached)
        } else {
            Ok(Interaction::Moved)
        }
    }

    /// Put an adversary on a tile.
    ///
    /// Targeting a wall teleports the adversary to a uniformly random open
    /// room tile instead. Fails if the landing tile holds another adversary.
    /// Any player on the landing tile is ejected.
    pub fn place_adversary(
        &mut self,
        roster: &mut Roster,
        id: ActorId,
        dest: Position,
        rng: &mut GameRng,
    ) -> Result<Interaction, PlacementError> {
        match roster.get(id) {
            Some(c) if !c.is_player() => {}
            _ => return Err(PlacementError::UnknownActor(id)),
        }

        let tile = self.tile(dest).ok_or(PlacementError::NoTile(dest))?;
        let landing = if tile.border {
            let target = self.teleport_target(rng)?;
            debug!("{id} teleports from {dest} to {target}");
            target
        } else {
            dest
        };

        let tile = self.tile(landing).ok_or(PlacementError::NoTile(landing))?;
        if let Some(other) = tile.others_of(Faction::Adversary, id).next() {
            return Err(PlacementError::Occupied {
                position: landing,
                by: other.id,
            });
        }

        let victims: Vec<ActorId> = tile
            .others_of(Faction::Player, id)
            .map(|o| o.id)
            .filter(|victim| !self.has_departed(*victim))
            .collect();

        let mut interaction = Interaction::Moved;
        for victim in victims {
            if self.eliminate(roster, victim) && interaction == Interaction::Moved {
                interaction = Interaction::Ejected { victim };
            }
        }

        self.move_occupant(roster, id, Faction::Adversary, landing)?;
        Ok(interaction)
    }

    fn teleport_target(&self, rng: &mut GameRng) -> Result<Position, PlacementError> {
        let candidates: Vec<Position> = self.open_room_tiles().map(|t| t.position).collect();
        rng.choose(&candidates)
            .copied()
            .ok_or(PlacementError::NoTeleportTarget)
    }

    /// Take a character off its tile without changing anything else.
    pub fn remove_character(
        &mut self,
        roster: &mut Roster,
        id: ActorId,
    ) -> Result<Position, PlacementError> {
        let character = roster
            .get_mut(id)
            .ok_or(PlacementError::UnknownActor(id))?;
        let pos = character.position.take().ok_or(PlacementError::NotPlaced(id))?;
        if let Some(tile) = self.tile_mut(pos) {
            tile.remove_occupant(id);
        }
        Ok(pos)
    }

    /// Eject a player from the level.
    ///
    /// Takes the player off its tile, deactivates it and marks it departed.
    /// Does nothing (and returns false) once the level is over or if the
    /// player has already left it.
    pub fn eliminate(&mut self, roster: &mut Roster, id: ActorId) -> bool {
        if self.level_over || self.has_departed(id) {
            return false;
        }
        let Some(character) = roster.get_mut(id) else {
            return false;
        };

        if let Some(pos) = character.position.take() {
            if let Some(tile) = self.tile_mut(pos) {
                tile.remove_occupant(id);
            }
        }
        character.active = false;
        if let Some(record) = character.record_mut() {
            record.ejects += 1;
        }

        let name = character.name.clone();
        info!("{name} was expelled");
        self.departed.push(id);
        self.last_interaction = Some(format!("{name} was expelled"));
        self.report.ejects.push(name);
        true
    }

    /// Move a character's occupancy to `dest`. `dest` must already be
    /// validated.
    fn move_occupant(
        &mut self,
        roster: &mut Roster,
        id: ActorId,
        faction: Faction,
        dest: Position,
    ) -> Result<(), PlacementError> {
        let character = roster
            .get_mut(id)
            .ok_or(PlacementError::UnknownActor(id))?;
        if let Some(prev) = character.position {
            if let Some(tile) = self.tile_mut(prev) {
                tile.remove_occupant(id);
            }
        }

        let tile = self.tile_mut(dest).ok_or(PlacementError::NoTile(dest))?;
        tile.add_occupant(Occupant { id, faction });
        character.position = Some(dest);
        Ok(())
    }

    fn collect_key(&mut self, roster: &mut Roster, id: ActorId, at: Position) {
        if let Some(tile) = self.tile_mut(at) {
            tile.key = false;
        }
        self.exit_unlocked = true;

        let Some(character) = roster.get_mut(id) else {
            return;
        };
        if let Some(record) = character.record_mut() {
            record.keys += 1;
        }
        info!("{} found the key", character.name);
        self.last_interaction = Some(format!("{} found the key", character.name));
        self.report.key = Some(character.name.clone());
    }

    fn take_exit(&mut self, roster: &mut Roster, id: ActorId) {
        self.level_over = true;
        self.departed.push(id);

        let Some(character) = roster.get_mut(id) else {
            return;
        };
        // Leaving frees the exit tile for the next player.
        if let Some(pos) = character.position.take() {
            if let Some(tile) = self.tile_mut(pos) {
                tile.remove_occupant(id);
            }
        }
        if let Some(record) = character.record_mut() {
            record.exits += 1;
            record.exited = true;
        }
        info!("{} exited", character.name);
        self.last_interaction = Some(format!("{} exited", character.name));
        self.report.exits.push(character.name.clone());
    }
}
