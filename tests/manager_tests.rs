//! Turn-order and game-flow tests.
//!
//! These tests drive a `GameManager` through whole rounds:
//! - Out-of-turn and illegal moves are rejected without side effects
//! - Players and adversaries alternate by phase
//! - Ejections, key pickups and exits update the level and the scores
//! - Levels advance and the game ends after the last one

use snarl_engine::core::{GameConfig, Position};
use snarl_engine::error::MoveRejection;
use snarl_engine::game::{Game, GameManager, GameStatus, LevelTransition, Phase, PlayerScore};
use snarl_engine::level::{Interaction, Level, Room};
use snarl_engine::rules::RuleChecker;
use snarl_engine::strategy::{ChaseNearest, RandomWalk};
use snarl_engine::{ActorId, Archetype};

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Two 5x5 rooms joined by a hallway; key and exit in the south-east room.
fn two_room_level() -> Level {
    let mut west = Room::new(5, 5);
    west.set_door(1, 4);
    let mut east = Room::new(5, 5);
    east.set_door(0, 1);

    let mut level = Level::new(12, 12);
    let a = level.add_room(pos(0, 0), west).unwrap();
    let b = level.add_room(pos(6, 6), east).unwrap();
    level
        .add_hallway(pos(1, 4), pos(6, 7), &[pos(1, 7)], [a, b])
        .unwrap();
    level.set_key(pos(7, 7)).unwrap();
    level.set_level_exit(pos(8, 7)).unwrap();
    level
}

/// One 10x10 room with the key and exit on its second row.
fn open_level() -> Level {
    let mut level = Level::new(10, 10);
    level.add_room(pos(0, 0), Room::new(10, 10)).unwrap();
    level.set_key(pos(1, 4)).unwrap();
    level.set_level_exit(pos(1, 6)).unwrap();
    level
}

struct Scenario {
    manager: GameManager,
    p1: ActorId,
    p2: ActorId,
    a1: ActorId,
    a2: ActorId,
}

fn scenario() -> Scenario {
    let mut manager = GameManager::new(Game::new(GameConfig::default(), vec![two_room_level()]));
    let p1 = manager.accept_player("p1").unwrap();
    let p2 = manager.accept_player("p2").unwrap();
    let a1 = manager.accept_adversary("a1", Archetype::Zombie).unwrap();
    let a2 = manager.accept_adversary("a2", Archetype::Zombie).unwrap();

    let game = manager.game_mut();
    game.place_character(p1, pos(1, 1)).unwrap();
    game.place_character(p2, pos(1, 2)).unwrap();
    game.place_character(a1, pos(9, 7)).unwrap();
    game.place_character(a2, pos(9, 8)).unwrap();

    manager.start();
    Scenario {
        manager,
        p1,
        p2,
        a1,
        a2,
    }
}

/// One full round: rejections first, then every player and adversary in order.
#[test]
fn test_full_round_with_rejections() {
    let Scenario {
        mut manager,
        p1,
        p2,
        a1,
        a2,
    } = scenario();

    assert_eq!(
        manager.accept_movement(p1, pos(1, 4)),
        Err(MoveRejection::IllegalMove {
            actor: p1,
            to: pos(1, 4)
        })
    );
    assert_eq!(
        manager.accept_movement(a1, pos(9, 7)),
        Err(MoveRejection::OutOfTurn(a1))
    );
    assert_eq!(
        manager.accept_movement(p2, pos(1, 3)),
        Err(MoveRejection::OutOfTurn(p2))
    );
    assert!(manager.game().history().is_empty());

    assert_eq!(manager.accept_movement(p1, pos(1, 3)), Ok(Interaction::Moved));
    assert_eq!(manager.current_actor(), Some(p2));
    assert_eq!(manager.accept_movement(p2, pos(1, 4)), Ok(Interaction::Moved));
    assert_eq!(manager.phase(), Phase::Adversaries);
    assert_eq!(manager.current_actor(), Some(a1));

    assert_eq!(manager.accept_movement(a1, pos(8, 7)), Ok(Interaction::Moved));
    assert_eq!(manager.accept_movement(a2, pos(8, 8)), Ok(Interaction::Moved));
    assert_eq!(manager.phase(), Phase::Players);
    assert_eq!(manager.current_actor(), Some(p1));

    assert_eq!(manager.game().history().len(), 4);
    assert!(RuleChecker::is_valid_game_state(manager.game()));
}

/// Zombies may stand in a doorway but not step into the hallway beyond it.
#[test]
fn test_zombie_stops_at_door() {
    let Scenario {
        mut manager,
        p1,
        p2,
        a1,
        ..
    } = scenario();
    manager.game_mut().place_character(a1, pos(6, 7)).unwrap();

    manager.accept_movement(p1, pos(1, 3)).unwrap();
    manager.accept_movement(p2, pos(1, 4)).unwrap();

    assert_eq!(manager.valid_moves(a1), vec![pos(6, 7), pos(7, 7)]);
    assert_eq!(
        manager.accept_movement(a1, pos(5, 7)),
        Err(MoveRejection::IllegalMove {
            actor: a1,
            to: pos(5, 7)
        })
    );
    assert!(manager.valid_moves(p2).contains(&pos(1, 6)));
}

/// Adversary stepping onto a player ejects that player.
#[test]
fn test_adversary_ejects_player() {
    let mut manager = GameManager::new(Game::new(GameConfig::default(), vec![open_level()]));
    let p1 = manager.accept_player("p1").unwrap();
    let z = manager.accept_adversary("Z0", Archetype::Zombie).unwrap();
    manager.game_mut().place_character(p1, pos(2, 2)).unwrap();
    manager.game_mut().place_character(z, pos(2, 3)).unwrap();
    manager.start();

    // Staying put is a legal move.
    assert_eq!(manager.accept_movement(p1, pos(2, 2)), Ok(Interaction::Moved));
    assert_eq!(
        manager.accept_movement(z, pos(2, 2)),
        Ok(Interaction::Ejected { victim: p1 })
    );

    let game = manager.game();
    let level = game.current_level().unwrap();
    assert!(level.has_departed(p1));
    assert!(game.is_end_of_level());
    assert_eq!(level.last_interaction(), Some("p1 was expelled"));
    assert_eq!(game.scores()[0].ejects, 1);
    assert!(!game.roster().get(p1).unwrap().active);
}

/// Player walking onto an adversary is ejected, and that still uses the turn.
#[test]
fn test_player_walks_into_adversary() {
    let mut manager = GameManager::new(Game::new(GameConfig::default(), vec![open_level()]));
    let p1 = manager.accept_player("p1").unwrap();
    let p2 = manager.accept_player("p2").unwrap();
    let z = manager.accept_adversary("Z0", Archetype::Zombie).unwrap();
    manager.game_mut().place_character(p1, pos(5, 5)).unwrap();
    manager.game_mut().place_character(p2, pos(2, 2)).unwrap();
    manager.game_mut().place_character(z, pos(5, 6)).unwrap();
    manager.start();

    assert_eq!(
        manager.accept_movement(p1, pos(5, 6)),
        Ok(Interaction::Ejected { victim: p1 })
    );
    assert_eq!(manager.current_actor(), Some(p2));
    assert_eq!(manager.game().roster().get(p1).unwrap().position, None);

    manager.accept_movement(p2, pos(2, 3)).unwrap();
    assert_eq!(manager.phase(), Phase::Adversaries);
    manager.accept_movement(z, pos(5, 5)).unwrap();

    // Back to players: only p2 is left.
    assert_eq!(manager.player_turn(), 2);
    assert_eq!(manager.current_actor(), Some(p2));
}

/// Key, then exit, then the game ends on its only level.
#[test]
fn test_key_exit_game_over() {
    let mut manager = GameManager::new(Game::new(GameConfig::default(), vec![open_level()]));
    let p1 = manager.accept_player("p1").unwrap();
    manager.game_mut().place_character(p1, pos(1, 2)).unwrap();
    manager.start();

    assert_eq!(manager.accept_movement(p1, pos(1, 4)), Ok(Interaction::KeyFound));
    assert!(manager.game().current_level().unwrap().is_exit_unlocked());
    assert_eq!(manager.phase(), Phase::Players);
    assert_eq!(manager.accept_movement(p1, pos(1, 6)), Ok(Interaction::ExitReached));

    let game = manager.game_mut();
    assert!(game.is_end_of_level());
    assert!(game.complete_level());
    assert!(!game.complete_level());
    assert!(game.is_end_of_game());

    assert_eq!(manager.level_up(), LevelTransition::GameOver);
    assert_eq!(manager.game().status(), GameStatus::Over);
    assert_eq!(
        manager.accept_movement(p1, pos(1, 5)),
        Err(MoveRejection::NotInProgress)
    );
    assert_eq!(
        manager.game().scores(),
        vec![PlayerScore {
            name: "p1".into(),
            exits: 1,
            ejects: 0,
            keys: 1,
        }]
    );
    assert!(RuleChecker::is_valid_game_state(manager.game()));
}

/// Once the last player has left, no player holds the turn.
#[test]
fn test_exited_player_gets_no_turn() {
    let mut manager = GameManager::new(Game::new(GameConfig::default(), vec![open_level()]));
    let p1 = manager.accept_player("p1").unwrap();
    let z = manager.accept_adversary("Z0", Archetype::Zombie).unwrap();
    let game = manager.game_mut();
    assert_eq!(game.place_character(p1, pos(1, 4)), Ok(Interaction::KeyFound));
    game.place_character(p1, pos(1, 5)).unwrap();
    game.place_character(z, pos(8, 8)).unwrap();
    manager.start();

    assert_eq!(manager.accept_movement(p1, pos(1, 6)), Ok(Interaction::ExitReached));
    assert_eq!(manager.phase(), Phase::Adversaries);
    manager.accept_movement(z, pos(8, 7)).unwrap();

    assert_eq!(manager.phase(), Phase::Players);
    assert_eq!(manager.current_actor(), None);
    assert_eq!(
        manager.accept_movement(p1, pos(1, 5)),
        Err(MoveRejection::OutOfTurn(p1))
    );
    assert_eq!(manager.game().history().len(), 2);
}

/// Two levels with spawned adversaries driven by policies.
#[test]
fn test_two_level_game() {
    let config = GameConfig::default().with_seed(7);
    let mut manager = GameManager::new(Game::new(config, vec![open_level(), open_level()]));
    let p1 = manager.accept_player("p1").unwrap();
    let p2 = manager.accept_player("p2").unwrap();

    let spawned = manager.game_mut().spawn_adversaries().unwrap();
    assert_eq!(spawned.len(), 1);
    let game = manager.game_mut();
    game.place_character(p1, pos(1, 1)).unwrap();
    game.place_character(p2, pos(2, 1)).unwrap();
    game.place_character(spawned[0], pos(8, 8)).unwrap();
    manager.start();

    // Round 1
    manager.accept_movement(p1, pos(1, 3)).unwrap();
    manager.accept_movement(p2, pos(2, 3)).unwrap();
    let outcomes = manager.play_adversary_phase(&RandomWalk);
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].1.is_ok());
    assert_eq!(manager.phase(), Phase::Players);

    // Round 2
    assert_eq!(manager.accept_movement(p1, pos(1, 4)), Ok(Interaction::KeyFound));
    manager.accept_movement(p2, pos(2, 5)).unwrap();
    let outcomes = manager.play_adversary_phase(&ChaseNearest);
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].1.is_ok());

    // Round 3: both leave through the same exit.
    assert_eq!(manager.accept_movement(p1, pos(1, 6)), Ok(Interaction::ExitReached));
    assert_eq!(manager.current_actor(), Some(p2));
    assert_eq!(manager.accept_movement(p2, pos(1, 6)), Ok(Interaction::ExitReached));

    assert!(manager.game_mut().complete_level());
    assert_eq!(manager.level_up(), LevelTransition::Advanced(1));
    assert_eq!(manager.phase(), Phase::Players);
    assert_eq!(manager.game().level_number(), 2);
    assert_eq!(manager.game().roster().adversary_count(), 0);

    // Level 2: two zombies, everyone placed at random.
    let game = manager.game_mut();
    assert_eq!(game.spawn_adversaries().unwrap().len(), 2);
    game.place_at_initial_positions().unwrap();
    assert!(game.roster().iter().all(|c| c.position.is_some()));
    assert!(RuleChecker::is_valid_game_state(game));

    assert_eq!(manager.level_up(), LevelTransition::GameOver);
    let scores = manager.game().scores();
    assert_eq!(scores[0].keys, 1);
    assert_eq!(scores[0].exits, 1);
    assert_eq!(scores[1].keys, 0);
    assert_eq!(scores[1].exits, 1);
    assert!(RuleChecker::is_valid_game_state(manager.game()));
}
