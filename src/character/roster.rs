//! The roster of players and adversaries.
//!
//! Admission assigns each character a fresh `ActorId` and the next 1-based
//! turn index within its faction. Players are capped (4 under the standard
//! rules); adversaries are not. Names must be unique within a faction.
//!
//! The adversary list is cleared and rebuilt on every level transition;
//! players persist for the whole game.

use rustc_hash::FxHashMap;

use super::actor::Character;
use super::profile::{Archetype, Faction};
use crate::core::ActorId;
use crate::error::RosterError;

/// Location of a character within the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Player(usize),
    Adversary(usize),
}

/// Owns every character in a game.
#[derive(Clone, Debug)]
pub struct Roster {
    players: Vec<Character>,
    adversaries: Vec<Character>,
    index: FxHashMap<ActorId, Slot>,
    next_id: ActorId,
    max_players: usize,
}

impl Roster {
    /// Create an empty roster with the given player cap.
    #[must_use]
    pub fn new(max_players: usize) -> Self {
        Self {
            players: Vec::new(),
            adversaries: Vec::new(),
            index: FxHashMap::default(),
            next_id: ActorId::new(0),
            max_players,
        }
    }

    /// Player cap.
    #[must_use]
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    fn alloc_id(&mut self) -> ActorId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Admit a player.
    ///
    /// Fails if the roster is full or the name is already used by a player.
    pub fn admit_player(&mut self, name: &str) -> Result<ActorId, RosterError> {
        if self.players.len() >= self.max_players {
            return Err(RosterError::Full {
                max: self.max_players,
            });
        }
        if self.players.iter().any(|p| p.name == name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }

        let id = self.alloc_id();
        let turn = self.players.len() as u32 + 1;
        self.index.insert(id, Slot::Player(self.players.len()));
        self.players.push(Character::player(id, name, turn));
        Ok(id)
    }

    /// Admit an adversary.
    ///
    /// Fails only if the name is already used by an adversary.
    pub fn admit_adversary(&mut self, name: &str, archetype: Archetype) -> Result<ActorId, RosterError> {
        if self.adversaries.iter().any(|a| a.name == name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }

        let id = self.alloc_id();
        let turn = self.adversaries.len() as u32 + 1;
        self.index.insert(id, Slot::Adversary(self.adversaries.len()));
        self.adversaries
            .push(Character::adversary(id, name, turn, archetype));
        Ok(id)
    }

    /// Remove every adversary. Their IDs are not reused.
    pub fn clear_adversaries(&mut self) {
        for adversary in self.adversaries.drain(..) {
            self.index.remove(&adversary.id);
        }
    }

    /// Look up a character by ID.
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Character> {
        match *self.index.get(&id)? {
            Slot::Player(i) => self.players.get(i),
            Slot::Adversary(i) => self.adversaries.get(i),
        }
    }

    /// Look up a character by ID, mutably.
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Character> {
        match *self.index.get(&id)? {
            Slot::Player(i) => self.players.get_mut(i),
            Slot::Adversary(i) => self.adversaries.get_mut(i),
        }
    }

    /// Faction of a character, if it is on the roster.
    #[must_use]
    pub fn faction_of(&self, id: ActorId) -> Option<Faction> {
        self.index.get(&id).map(|slot| match slot {
            Slot::Player(_) => Faction::Player,
            Slot::Adversary(_) => Faction::Adversary,
        })
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Character] {
        &self.players
    }

    /// Players in turn order, mutably.
    pub fn players_mut(&mut self) -> &mut [Character] {
        &mut self.players
    }

    /// Adversaries in turn order.
    #[must_use]
    pub fn adversaries(&self) -> &[Character] {
        &self.adversaries
    }

    /// Every character: players first, then adversaries.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.players.iter().chain(self.adversaries.iter())
    }

    /// The player holding the given turn index.
    #[must_use]
    pub fn player_by_turn(&self, turn: u32) -> Option<&Character> {
        self.players.iter().find(|p| p.turn == turn)
    }

    /// The adversary holding the given turn index.
    #[must_use]
    pub fn adversary_by_turn(&self, turn: u32) -> Option<&Character> {
        self.adversaries.iter().find(|a| a.turn == turn)
    }

    /// Find a character by faction and name.
    #[must_use]
    pub fn find_by_name(&self, faction: Faction, name: &str) -> Option<&Character> {
        let list = match faction {
            Faction::Player => &self.players,
            Faction::Adversary => &self.adversaries,
        };
        list.iter().find(|c| c.name == name)
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of adversaries.
    #[must_use]
    pub fn adversary_count(&self) -> usize {
        self.adversaries.len()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_MAX_PLAYERS)
    }
}
