//! The game aggregate: roster, levels, RNG and completion bookkeeping.
//!
//! `Game` owns everything that persists across moves. It does not know about
//! turn order; that lives in `GameManager`, which is the only caller that
//! should mutate a game during live play. The setup helpers here (spawning
//! adversaries, placing characters on start tiles) are for drivers preparing
//! a level before play begins.
//!
//! ## Usage
//!
//! ```
//! use snarl_engine::core::{GameConfig, Position};
//! use snarl_engine::game::{Game, GameStatus};
//! use snarl_engine::level::{Level, Room};
//!
//! let mut level = Level::new(8, 8);
//! level.add_room(Position::new(0, 0), Room::new(6, 6)).unwrap();
//! level.set_key(Position::new(2, 2)).unwrap();
//! level.set_level_exit(Position::new(4, 4)).unwrap();
//!
//! let mut game = Game::new(GameConfig::default().with_seed(9), vec![level]);
//! game.roster_mut().admit_player("p1").unwrap();
//! game.spawn_adversaries().unwrap();
//! game.place_at_initial_positions().unwrap();
//!
//! assert_eq!(game.status(), GameStatus::Over);
//! assert_eq!(game.roster().adversary_count(), 1);
//! ```

use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::report::PlayerScore;
use super::spawn::SpawnSchedule;
use crate::character::{Faction, Roster};
use crate::core::{ActorId, GameConfig, GameRng, GameRngState, MoveRecord, Position};
use crate::error::{PlacementError, RosterError};
use crate::level::{Interaction, Level, Observation};
use crate::rules::RuleChecker;

/// Whether a game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// What `Game::level_up` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelTransition {
    /// The last level was finished; the game is over.
    GameOver,
    /// Moved on to the level with this 0-based index.
    Advanced(usize),
    /// Some player is still on the current level; nothing changed.
    Blocked,
}

/// The game aggregate.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    roster: Roster,
    levels: Vec<Level>,
    current: usize,
    completed: FxHashSet<usize>,
    status: GameStatus,
    rng: GameRng,
    history: Vec<MoveRecord>,
}

impl Game {
    /// A game over the given levels, in play order. Starts `Over` until a
    /// manager starts it.
    #[must_use]
    pub fn new(config: GameConfig, levels: Vec<Level>) -> Self {
        Self {
            roster: Roster::new(config.max_players),
            rng: GameRng::new(config.seed),
            config,
            levels,
            current: 0,
            completed: FxHashSet::default(),
            status: GameStatus::Over,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// 0-based index of the level being played.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based number of the level being played.
    #[must_use]
    pub fn level_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.current)
    }

    pub fn current_level_mut(&mut self) -> Option<&mut Level> {
        self.levels.get_mut(self.current)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Where the random stream stands, for replaying from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind or fast-forward the random stream to a captured point.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        debug!("rng restored to word {} of seed {}", state.word_pos, state.seed);
        self.rng = GameRng::from_state(state);
    }

    /// Every accepted move so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub(crate) fn record(&mut self, record: MoveRecord) {
        self.history.push(record);
    }

    /// Rule checker over the current level.
    #[must_use]
    pub fn rules(&self) -> Option<RuleChecker<'_>> {
        Some(RuleChecker::new(self.current_level()?, &self.roster))
    }

    /// Place a character on the current level, dispatching on faction.
    pub(crate) fn place(
        &mut self,
        actor: ActorId,
        faction: Faction,
        to: Position,
    ) -> Result<Interaction, PlacementError> {
        let Self {
            levels,
            current,
            roster,
            rng,
            ..
        } = self;
        let level = levels.get_mut(*current).ok_or(PlacementError::LevelClosed)?;
        match faction {
            Faction::Player => level.place_player(roster, actor, to),
            Faction::Adversary => level.place_adversary(roster, actor, to, rng),
        }
    }

    /// Place a character on the current level outside turn order, for
    /// level setup and scripted scenarios.
    pub fn place_character(&mut self, actor: ActorId, to: Position) -> Result<Interaction, PlacementError> {
        let faction = self
            .roster
            .faction_of(actor)
            .ok_or(PlacementError::UnknownActor(actor))?;
        self.place(actor, faction, to)
    }

    // === Lifecycle ===

    /// True once the current level has been exited through, or every
    /// player has left it.
    #[must_use]
    pub fn is_end_of_level(&self) -> bool {
        let Some(level) = self.current_level() else {
            return false;
        };
        level.is_over()
            || self
                .roster
                .players()
                .iter()
                .all(|p| level.has_departed(p.id))
    }

    /// Count the current level as completed if it has ended.
    ///
    /// Returns true only the first time a given level is counted; repeated
    /// calls are harmless.
    pub fn complete_level(&mut self) -> bool {
        if !self.is_end_of_level() || !self.completed.insert(self.current) {
            return false;
        }
        info!(
            "level {} complete ({}/{})",
            self.level_number(),
            self.completed.len(),
            self.levels.len()
        );
        true
    }

    #[must_use]
    pub fn levels_completed(&self) -> usize {
        self.completed.len()
    }

    /// True once every level has been completed.
    #[must_use]
    pub fn is_end_of_game(&self) -> bool {
        self.completed.len() == self.levels.len()
    }

    /// Move on from the current level.
    ///
    /// On the last level this ends the game and deactivates every player.
    /// Otherwise it advances only if every player has left the current
    /// level; players are then reset to active and unplaced. Either way the
    /// adversaries are dismissed, and the caller is expected to spawn and
    /// place a fresh set.
    pub fn level_up(&mut self) -> LevelTransition {
        if self.current + 1 >= self.levels.len() {
            for player in self.roster.players_mut() {
                player.active = false;
            }
            self.dismiss_adversaries();
            self.status = GameStatus::Over;
            info!("game over after level {}", self.level_number());
            return LevelTransition::GameOver;
        }

        let all_departed = match self.current_level() {
            Some(level) => self
                .roster
                .players()
                .iter()
                .all(|p| level.has_departed(p.id)),
            None => false,
        };
        if !all_departed {
            debug!("level {} still has players on it", self.level_number());
            return LevelTransition::Blocked;
        }

        self.dismiss_adversaries();
        if let Some(level) = self.levels.get_mut(self.current) {
            for player in self.roster.players() {
                if let Some(tile) = player.position.and_then(|pos| level.tile_mut(pos)) {
                    tile.remove_occupant(player.id);
                }
            }
        }
        for player in self.roster.players_mut() {
            player.active = true;
            player.position = None;
            if let Some(record) = player.record_mut() {
                record.exited = false;
            }
        }

        self.current += 1;
        info!("advancing to level {}", self.level_number());
        LevelTransition::Advanced(self.current)
    }

    /// Take every adversary off the current level and drop it from the
    /// roster.
    fn dismiss_adversaries(&mut self) {
        if let Some(level) = self.levels.get_mut(self.current) {
            for adversary in self.roster.adversaries() {
                if let Some(tile) = adversary.position.and_then(|pos| level.tile_mut(pos)) {
                    tile.remove_occupant(adversary.id);
                }
            }
        }
        self.roster.clear_adversaries();
    }

    // === Setup ===

    /// Admit this level's adversaries per the spawn schedule.
    pub fn spawn_adversaries(&mut self) -> Result<Vec<ActorId>, RosterError> {
        let schedule = SpawnSchedule::for_level(self.level_number());
        debug!(
            "spawning {} zombies and {} ghosts for level {}",
            schedule.zombies,
            schedule.ghosts,
            self.level_number()
        );
        schedule
            .spawns()
            .map(|(name, archetype)| self.roster.admit_adversary(&name, archetype))
            .collect()
    }

    /// A random unoccupied open room tile on the current level.
    pub fn random_start_position(&mut self) -> Option<Position> {
        let level = self.levels.get(self.current)?;
        let free: Vec<Position> = level
            .open_room_tiles()
            .filter(|t| !t.is_occupied())
            .map(|t| t.position)
            .collect();
        self.rng.choose(&free).copied()
    }

    /// Put every unplaced character on a random free tile, players first.
    pub fn place_at_initial_positions(&mut self) -> Result<(), PlacementError> {
        let ids: Vec<(ActorId, Faction)> = self
            .roster
            .iter()
            .filter(|c| c.position.is_none() && c.active)
            .map(|c| (c.id, c.faction()))
            .collect();

        for (id, faction) in ids {
            let at = self
                .random_start_position()
                .ok_or(PlacementError::NoFreeTile)?;
            self.place(id, faction, at)?;
        }
        Ok(())
    }

    /// Put every player on the level's player start tile. Only the first
    /// can land there; the rest are reported back as failures.
    pub fn place_players(&mut self) -> Vec<(ActorId, Result<Interaction, PlacementError>)> {
        let start = self.current_level().and_then(Level::player_start);
        let ids: Vec<ActorId> = self.roster.players().iter().map(|p| p.id).collect();
        self.place_all_at(ids, Faction::Player, start)
    }

    /// Put every adversary on the level's adversary start tile. Only the
    /// first can land there.
    pub fn place_adversaries(&mut self) -> Vec<(ActorId, Result<Interaction, PlacementError>)> {
        let start = self.current_level().and_then(Level::adversary_start);
        let ids: Vec<ActorId> = self.roster.adversaries().iter().map(|a| a.id).collect();
        self.place_all_at(ids, Faction::Adversary, start)
    }

    fn place_all_at(
        &mut self,
        ids: Vec<ActorId>,
        faction: Faction,
        start: Option<Position>,
    ) -> Vec<(ActorId, Result<Interaction, PlacementError>)> {
        ids.into_iter()
            .map(|id| {
                let result = match start {
                    Some(at) => self.place(id, faction, at),
                    None => Err(PlacementError::NoFreeTile),
                };
                (id, result)
            })
            .collect()
    }

    // === Views ===

    /// The current level, rendered in full.
    #[must_use]
    pub fn render_current_level(&self) -> Vec<String> {
        self.current_level()
            .map(|level| level.render(&self.roster))
            .unwrap_or_default()
    }

    /// The bounded view around a character.
    #[must_use]
    pub fn render_view(&self, actor: ActorId) -> Option<Vec<String>> {
        self.current_level()?
            .render_view(&self.roster, actor, self.config.view_radius)
    }

    /// The structured view around a character.
    #[must_use]
    pub fn observe(&self, actor: ActorId) -> Option<Observation> {
        self.current_level()?
            .observe(&self.roster, actor, self.config.view_radius)
    }

    /// Every player's totals.
    #[must_use]
    pub fn scores(&self) -> Vec<PlayerScore> {
        self.roster
            .players()
            .iter()
            .filter_map(PlayerScore::of)
            .collect()
    }
}
