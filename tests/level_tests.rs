//! Level construction and rendering tests.
//!
//! These tests build levels through the public API and check:
//! - Exact text renders of multi-room levels
//! - Hallway routing through waypoints
//! - Key pickup and exit unlocking
//! - Loading from a JSON description

use snarl_engine::character::Roster;
use snarl_engine::core::{GameRng, Position};
use snarl_engine::error::{LevelError, PlacementError};
use snarl_engine::level::{Interaction, Level, LevelDescription, Room};
use snarl_engine::Archetype;

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Two rooms joined by an L-shaped hallway, key and exit in the east room.
fn two_room_level() -> Level {
    let mut west = Room::new(5, 5);
    assert!(west.set_door(1, 4));
    let mut east = Room::new(4, 4);
    assert!(east.set_door(0, 1));

    let mut level = Level::new(12, 12);
    let a = level.add_room(pos(0, 0), west).unwrap();
    let b = level.add_room(pos(6, 6), east).unwrap();
    level.set_key(pos(7, 7)).unwrap();
    level.set_level_exit(pos(8, 7)).unwrap();
    level
        .add_hallway(pos(1, 4), pos(6, 7), &[pos(1, 7)], [a, b])
        .unwrap();
    level
}

#[test]
fn test_render_two_rooms_one_hallway() {
    let level = two_room_level();

    let expected = [
        "XXXXXXXXXXXX",
        "X.../...XXXX",
        "X...XXX.XXXX",
        "X...XXX.XXXX",
        "XXXXXXX.XXXX",
        "XXXXXXX.XXXX",
        "XXXXXXX/XXXX",
        "XXXXXXX+.XXX",
        "XXXXXXXo.XXX",
        "XXXXXXXXXXXX",
        "XXXXXXXXXXXX",
        "XXXXXXXXXXXX",
    ];
    assert_eq!(level.render(&Roster::default()), expected);
}

#[test]
fn test_render_three_rooms_two_hallways() {
    let mut north = Room::new(5, 5);
    north.set_door(4, 1);
    let mut middle = Room::new(5, 5);
    middle.set_door(0, 1);
    middle.set_door(3, 0);
    let mut south = Room::new(5, 5);
    south.set_door(0, 1);

    let mut level = Level::new(20, 20);
    let n = level.add_room(pos(0, 0), north).unwrap();
    let m = level.add_room(pos(10, 10), middle).unwrap();
    let s = level.add_room(pos(15, 0), south).unwrap();

    // Walls can't hold the key or the exit.
    assert!(level.set_key(pos(1, 0)).is_err());
    assert!(level.set_level_exit(pos(19, 0)).is_err());

    level
        .add_hallway(pos(4, 1), pos(10, 11), &[pos(6, 1), pos(6, 11)], [n, m])
        .unwrap();
    level
        .add_hallway(pos(13, 10), pos(15, 1), &[pos(13, 1)], [m, s])
        .unwrap();

    let expected = [
        "XXXXXXXXXXXXXXXXXXXX",
        "X...XXXXXXXXXXXXXXXX",
        "X...XXXXXXXXXXXXXXXX",
        "X...XXXXXXXXXXXXXXXX",
        "X/XXXXXXXXXXXXXXXXXX",
        "X.XXXXXXXXXXXXXXXXXX",
        "X...........XXXXXXXX",
        "XXXXXXXXXXX.XXXXXXXX",
        "XXXXXXXXXXX.XXXXXXXX",
        "XXXXXXXXXXX.XXXXXXXX",
        "XXXXXXXXXXX/XXXXXXXX",
        "XXXXXXXXXXX...XXXXXX",
        "XXXXXXXXXXX...XXXXXX",
        "X........./...XXXXXX",
        "X.XXXXXXXXXXXXXXXXXX",
        "X/XXXXXXXXXXXXXXXXXX",
        "X...XXXXXXXXXXXXXXXX",
        "X...XXXXXXXXXXXXXXXX",
        "X...XXXXXXXXXXXXXXXX",
        "XXXXXXXXXXXXXXXXXXXX",
    ];
    assert_eq!(level.render(&Roster::default()), expected);
    assert_eq!(level.player_start(), Some(pos(1, 1)));
    assert_eq!(level.adversary_start(), Some(pos(13, 13)));
}

#[test]
fn test_bounded_view_follows_player() {
    let level_and_roster = || {
        let mut level = two_room_level();
        let mut roster = Roster::default();
        let p1 = roster.admit_player("p1").unwrap();
        level.place_player(&mut roster, p1, pos(1, 5)).unwrap();
        (level, roster, p1)
    };
    let (level, roster, p1) = level_and_roster();

    assert_eq!(
        level.render_view(&roster, p1, 2).unwrap(),
        ["XXXXX", "./1..", ".XXX.", ".XXX."]
    );
}

#[test]
fn test_key_counts_once() {
    let mut level = two_room_level();
    let mut roster = Roster::default();
    let p1 = roster.admit_player("p1").unwrap();

    level.place_player(&mut roster, p1, pos(7, 8)).unwrap();
    assert_eq!(
        level.place_player(&mut roster, p1, pos(7, 7)),
        Ok(Interaction::KeyFound)
    );
    level.place_player(&mut roster, p1, pos(7, 8)).unwrap();
    assert_eq!(
        level.place_player(&mut roster, p1, pos(7, 7)),
        Ok(Interaction::Moved)
    );

    assert!(level.is_exit_unlocked());
    assert_eq!(roster.get(p1).unwrap().record().unwrap().keys, 1);
}

#[test]
fn test_locked_exit_is_just_floor() {
    let mut level = two_room_level();
    let mut roster = Roster::default();
    let p1 = roster.admit_player("p1").unwrap();

    assert_eq!(
        level.place_player(&mut roster, p1, pos(8, 7)),
        Ok(Interaction::Moved)
    );
    assert!(!level.is_over());
    assert!(level.departed().is_empty());
}

#[test]
fn test_ghost_teleport_lands_in_a_room() {
    let mut level = two_room_level();
    let mut roster = Roster::default();
    let ghost = roster.admit_adversary("G0", Archetype::Ghost).unwrap();
    let mut rng = GameRng::new(21);

    level
        .place_adversary(&mut roster, ghost, pos(3, 7), &mut rng)
        .unwrap();
    level
        .place_adversary(&mut roster, ghost, pos(0, 0), &mut rng)
        .unwrap();

    let at = roster.get(ghost).unwrap().position.unwrap();
    let tile = level.tile(at).unwrap();
    assert!(tile.in_room && !tile.border && !tile.door);
    assert!(!level.tile(pos(3, 7)).unwrap().is_occupied());
}

#[test]
fn test_unknown_actor_placement() {
    let mut level = two_room_level();
    let mut roster = Roster::default();
    let z = roster.admit_adversary("Z0", Archetype::Zombie).unwrap();

    // Adversaries go through place_adversary.
    assert_eq!(
        level.place_player(&mut roster, z, pos(2, 2)),
        Err(PlacementError::UnknownActor(z))
    );
}

#[test]
fn test_load_description_from_json() {
    let json = r#"{
        "type": "level",
        "rooms": [
            { "type": "room", "origin": [0, 0],
              "bounds": { "rows": 5, "columns": 5 },
              "layout": [[0, 0, 0, 0, 0],
                         [0, 1, 1, 1, 2],
                         [0, 1, 1, 1, 0],
                         [0, 1, 1, 1, 0],
                         [0, 0, 0, 0, 0]] },
            { "type": "room", "origin": [6, 6],
              "bounds": { "rows": 4, "columns": 4 },
              "layout": [[0, 2, 0, 0],
                         [0, 1, 1, 0],
                         [0, 1, 1, 0],
                         [0, 0, 0, 0]] }
        ],
        "hallways": [
            { "type": "hallway", "from": [1, 4], "to": [6, 7], "waypoints": [[1, 7]] }
        ],
        "objects": [
            { "type": "key", "position": [7, 7] },
            { "type": "exit", "position": [8, 7] }
        ]
    }"#;

    let desc: LevelDescription = serde_json::from_str(json).unwrap();
    let level = Level::from_description(12, 12, &desc).unwrap();

    assert_eq!(
        level.render(&Roster::default()),
        two_room_level().render(&Roster::default())
    );
}

#[test]
fn test_description_errors_surface() {
    let json = r#"{
        "rooms": [
            { "origin": [0, 0], "bounds": { "rows": 3, "columns": 3 },
              "layout": [[0, 0, 0], [0, 1, 0], [0, 0, 0]] },
            { "origin": [1, 1], "bounds": { "rows": 3, "columns": 3 },
              "layout": [[0, 0, 0], [0, 1, 0], [0, 0, 0]] }
        ],
        "objects": []
    }"#;
    let desc: LevelDescription = serde_json::from_str(json).unwrap();

    assert_eq!(
        Level::from_description(10, 10, &desc).unwrap_err(),
        LevelError::Overlap(pos(1, 1))
    );
}
