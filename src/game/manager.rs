//! The turn-order state machine.
//!
//! `GameManager` wraps a `Game` and is the single entry point for moves
//! during play. A round is every remaining player in turn order, then every
//! adversary in turn order. A move is applied only if the game is running,
//! it is the mover's faction's phase and individual turn, and the rule
//! checker allows it; then the placement is made and the turn advances.
//!
//! ## Usage
//!
//! ```
//! use snarl_engine::core::{GameConfig, Position};
//! use snarl_engine::game::{Game, GameManager, Phase};
//! use snarl_engine::level::{Level, Room};
//!
//! let mut level = Level::new(8, 8);
//! level.add_room(Position::new(0, 0), Room::new(6, 6)).unwrap();
//! level.set_key(Position::new(3, 3)).unwrap();
//! level.set_level_exit(Position::new(4, 4)).unwrap();
//!
//! let mut manager = GameManager::new(Game::new(GameConfig::default(), vec![level]));
//! let p1 = manager.accept_player("p1").unwrap();
//! manager.game_mut().place_players();
//! manager.start();
//!
//! assert_eq!(manager.current_actor(), Some(p1));
//! assert!(manager.accept_movement(p1, Position::new(1, 3)).is_ok());
//! assert_eq!(manager.phase(), Phase::Players); // no adversaries: straight back
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::state::{Game, GameStatus, LevelTransition};
use crate::character::{Archetype, Faction};
use crate::core::{ActorId, MoveRecord, MoveRequest, Position};
use crate::error::{MoveRejection, PlacementError, RosterError};
use crate::level::Interaction;
use crate::strategy::AdversaryPolicy;

/// Which faction holds the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Players,
    Adversaries,
}

impl Phase {
    #[must_use]
    pub fn faction(self) -> Faction {
        match self {
            Phase::Players => Faction::Player,
            Phase::Adversaries => Faction::Adversary,
        }
    }
}

/// Turn-order state machine over one game.
#[derive(Clone, Debug)]
pub struct GameManager {
    game: Game,
    phase: Phase,
    player_turn: u32,
    adversary_turn: u32,
}

impl GameManager {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            phase: Phase::Players,
            player_turn: 1,
            adversary_turn: 1,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Direct access for level setup (spawning, initial placement) between
    /// rounds. Moves during play go through `accept_movement`.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn index of the player due to move.
    #[must_use]
    pub fn player_turn(&self) -> u32 {
        self.player_turn
    }

    /// Turn index of the adversary due to move.
    #[must_use]
    pub fn adversary_turn(&self) -> u32 {
        self.adversary_turn
    }

    /// Admit a player (at most four, unique names).
    pub fn accept_player(&mut self, name: &str) -> Result<ActorId, RosterError> {
        self.game.roster_mut().admit_player(name)
    }

    /// Admit an adversary (unique names).
    pub fn accept_adversary(&mut self, name: &str, archetype: Archetype) -> Result<ActorId, RosterError> {
        self.game.roster_mut().admit_adversary(name, archetype)
    }

    /// Begin play: players move first, from the lowest remaining turn.
    pub fn start(&mut self) {
        self.game.set_status(GameStatus::InProgress);
        self.phase = Phase::Players;
        self.adversary_turn = 1;
        self.player_turn = self.remaining_player_turns().first().copied().unwrap_or(1);
        debug!("game started, player {} to move", self.player_turn);
    }

    /// Stop play.
    pub fn end_game(&mut self) {
        self.game.set_status(GameStatus::Over);
    }

    /// The actor whose turn it is, or `None` once every player has left
    /// the level.
    #[must_use]
    pub fn current_actor(&self) -> Option<ActorId> {
        let roster = self.game.roster();
        let actor = match self.phase {
            Phase::Players => roster.player_by_turn(self.player_turn),
            Phase::Adversaries => roster.adversary_by_turn(self.adversary_turn),
        };
        actor.map(|c| c.id).filter(|&id| !self.has_departed(id))
    }

    /// Legal destinations for an actor on the current level.
    #[must_use]
    pub fn valid_moves(&self, actor: ActorId) -> Vec<Position> {
        self.game
            .rules()
            .map(|rules| rules.valid_moves(actor))
            .unwrap_or_default()
    }

    /// Try to move `actor` to `to`.
    ///
    /// On success the placement is applied, the turn advances and the
    /// move is recorded. On rejection nothing changes.
    pub fn accept_movement(&mut self, actor: ActorId, to: Position) -> Result<Interaction, MoveRejection> {
        let result = self.try_move(actor, to);
        if let Err(rejection) = &result {
            debug!("rejected {actor} -> {to}: {rejection}");
        }
        result
    }

    /// `accept_movement` for a request value.
    pub fn submit(&mut self, request: MoveRequest) -> Result<Interaction, MoveRejection> {
        self.accept_movement(request.actor, request.to)
    }

    fn try_move(&mut self, actor: ActorId, to: Position) -> Result<Interaction, MoveRejection> {
        if self.game.status() != GameStatus::InProgress {
            return Err(MoveRejection::NotInProgress);
        }

        let character = self
            .game
            .roster()
            .get(actor)
            .ok_or(MoveRejection::UnknownActor(actor))?;
        let faction = character.faction();
        let turn = match self.phase {
            Phase::Players => self.player_turn,
            Phase::Adversaries => self.adversary_turn,
        };
        if faction != self.phase.faction() || character.turn != turn || self.has_departed(actor) {
            return Err(MoveRejection::OutOfTurn(actor));
        }

        let legal = self
            .game
            .rules()
            .is_some_and(|rules| rules.is_valid_movement(actor, to));
        if !legal {
            return Err(MoveRejection::IllegalMove { actor, to });
        }

        let interaction = self.game.place(actor, faction, to)?;
        debug!("{actor} -> {to}: {}", interaction.tag());

        match faction {
            Faction::Player => self.advance_player_turn(),
            Faction::Adversary => self.advance_adversary_turn(),
        }

        let index = self.game.current_index();
        self.game.record(MoveRecord::new(
            MoveRequest::new(actor, to),
            interaction.tag(),
            index,
        ));
        Ok(interaction)
    }

    /// Give up the current actor's move and pass the turn.
    pub fn skip_turn(&mut self) {
        debug!("turn skipped in {:?} phase", self.phase);
        match self.phase {
            Phase::Players => self.advance_player_turn(),
            Phase::Adversaries => self.advance_adversary_turn(),
        }
    }

    fn has_departed(&self, actor: ActorId) -> bool {
        self.game
            .current_level()
            .is_some_and(|level| level.has_departed(actor))
    }

    /// Turn indices of players still on the current level, ascending.
    fn remaining_player_turns(&self) -> Vec<u32> {
        let Some(level) = self.game.current_level() else {
            return Vec::new();
        };
        let mut turns: Vec<u32> = self
            .game
            .roster()
            .players()
            .iter()
            .filter(|p| !level.has_departed(p.id))
            .map(|p| p.turn)
            .collect();
        turns.sort_unstable();
        turns
    }

    fn advance_player_turn(&mut self) {
        let remaining = self.remaining_player_turns();
        match remaining.iter().find(|&&t| t > self.player_turn) {
            Some(&next) => self.player_turn = next,
            None => {
                self.player_turn = remaining.first().copied().unwrap_or(1);
                self.enter_adversary_phase();
            }
        }
    }

    fn enter_adversary_phase(&mut self) {
        if self.game.roster().adversary_count() == 0 {
            debug!("no adversaries; players move again");
            return;
        }
        self.phase = Phase::Adversaries;
        self.adversary_turn = 1;
    }

    fn advance_adversary_turn(&mut self) {
        if self.adversary_turn as usize >= self.game.roster().adversary_count() {
            self.adversary_turn = 1;
            self.phase = Phase::Players;
            // Players ejected during the adversary phase lose their slot.
            self.player_turn = self.remaining_player_turns().first().copied().unwrap_or(1);
        } else {
            self.adversary_turn += 1;
        }
    }

    /// Let `policy` play every adversary turn until the phase returns to
    /// the players (or the game stops).
    ///
    /// An adversary whose chosen move is rejected stays in place instead;
    /// if even that fails, its turn is skipped.
    pub fn play_adversary_phase(
        &mut self,
        policy: &dyn AdversaryPolicy,
    ) -> Vec<(ActorId, Result<Interaction, MoveRejection>)> {
        let mut outcomes = Vec::new();

        while self.phase == Phase::Adversaries && self.game.status() == GameStatus::InProgress {
            let Some(actor) = self.current_actor() else {
                self.skip_turn();
                continue;
            };
            let Some(character) = self.game.roster().get(actor).cloned() else {
                self.skip_turn();
                continue;
            };

            let moves = self.valid_moves(actor);
            let view = self.game.observe(actor);
            let choice = policy.choose_move(&character, &moves, view.as_ref(), self.game.rng_mut());

            let mut result = match choice {
                Some(to) => self.accept_movement(actor, to),
                None => Err(MoveRejection::Blocked(PlacementError::NotPlaced(actor))),
            };
            if result.is_err() {
                if let Some(here) = character.position {
                    result = self.accept_movement(actor, here);
                }
            }
            if result.is_err() {
                self.skip_turn();
            }
            outcomes.push((actor, result));
        }

        outcomes
    }

    /// Leave the current level: end the game on the last one, or advance
    /// once every player is out. Turn order restarts either way.
    pub fn level_up(&mut self) -> LevelTransition {
        let transition = self.game.level_up();
        if transition != LevelTransition::Blocked {
            self.phase = Phase::Players;
            self.player_turn = 1;
            self.adversary_turn = 1;
        }
        transition
    }
}
