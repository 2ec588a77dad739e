use zen_maze_core::{Command, Difficulty, Direction, Event, Grid, Level, LevelId, Point, Tile};
use zen_maze_world::{apply, query, Session};

/// Small hand-built maze with a bend, so both legal moves and wall
/// collisions are available from known cells.
///
/// ```text
/// #####
/// #...#
/// ###.#
/// #...#
/// #####
/// ```
fn bent_level() -> Level {
    let rows = ["#####", "#...#", "###.#", "#...#", "#####"];
    let tiles = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|cell| if cell == '#' { Tile::Wall } else { Tile::Passage })
        .collect();
    let grid = Grid::from_tiles(5, 5, tiles);
    Level::new(
        LevelId::new(3),
        grid,
        Point::new(1, 1),
        Point::new(1, 3),
        Difficulty::Easy,
    )
}

/// Directions that walk `bent_level` from start to exit.
const SOLUTION: [Direction; 6] = [
    Direction::East,
    Direction::East,
    Direction::South,
    Direction::South,
    Direction::West,
    Direction::West,
];

fn step(session: &mut Session, direction: Direction) -> Vec<Event> {
    let mut events = Vec::new();
    apply(session, Command::Move { direction }, &mut events);
    events
}

#[test]
fn collision_rejects_without_recording_history() {
    let mut session = Session::new(bent_level());

    let events = step(&mut session, Direction::South);

    assert_eq!(
        events,
        vec![Event::MoveRejected {
            at: Point::new(1, 1),
            direction: Direction::South,
        }]
    );
    assert_eq!(query::player_position(&session), Point::new(1, 1));
    assert_eq!(query::move_count(&session), 0);
    assert_eq!(query::history_len(&session), 0);
}

#[test]
fn undo_restores_the_exact_prior_position() {
    let mut session = Session::new(bent_level());

    let moved = step(&mut session, Direction::East);
    assert_eq!(
        moved,
        vec![Event::PlayerMoved {
            from: Point::new(1, 1),
            to: Point::new(2, 1),
        }]
    );
    assert_eq!(query::move_count(&session), 1);
    assert_eq!(query::history_len(&session), 1);

    let mut events = Vec::new();
    apply(&mut session, Command::Undo, &mut events);

    assert_eq!(
        events,
        vec![Event::MoveUndone {
            from: Point::new(2, 1),
            to: Point::new(1, 1),
        }]
    );
    assert_eq!(query::player_position(&session), Point::new(1, 1));
    assert_eq!(query::move_count(&session), 0);
    assert_eq!(query::history_len(&session), 0);
}

#[test]
fn undo_on_empty_history_is_a_no_op() {
    let mut session = Session::new(bent_level());
    let mut events = Vec::new();

    apply(&mut session, Command::Undo, &mut events);

    assert!(events.is_empty());
    assert_eq!(query::player_position(&session), Point::new(1, 1));
    assert_eq!(query::move_count(&session), 0);
}

#[test]
fn reaching_the_exit_wins_exactly_once_and_freezes_the_session() {
    let mut session = Session::new(bent_level());
    let mut all_events = Vec::new();

    for direction in SOLUTION {
        all_events.extend(step(&mut session, direction));
    }

    assert!(query::is_won(&session));
    assert_eq!(query::move_count(&session), 6);

    let wins: Vec<_> = all_events
        .iter()
        .filter(|event| matches!(event, Event::LevelWon { .. }))
        .collect();
    assert_eq!(
        wins,
        vec![&Event::LevelWon {
            level: LevelId::new(3),
            moves: 6,
        }]
    );

    // Frozen until an explicit reset: moves and undos emit nothing.
    assert!(step(&mut session, Direction::East).is_empty());
    let mut events = Vec::new();
    apply(&mut session, Command::Undo, &mut events);
    assert!(events.is_empty());
    assert_eq!(query::player_position(&session), Point::new(1, 3));
    assert_eq!(query::move_count(&session), 6);
}

#[test]
fn restart_restores_the_start_state_regardless_of_prior_state() {
    let mut session = Session::new(bent_level());

    for direction in SOLUTION {
        let _ = step(&mut session, direction);
    }
    assert!(query::is_won(&session));

    let mut events = Vec::new();
    apply(&mut session, Command::Restart, &mut events);

    assert_eq!(
        events,
        vec![Event::SessionReset {
            level: LevelId::new(3),
            start: Point::new(1, 1),
        }]
    );
    assert!(!query::is_won(&session));
    assert_eq!(query::player_position(&session), Point::new(1, 1));
    assert_eq!(query::move_count(&session), 0);
    assert_eq!(query::history_len(&session), 0);
}

#[test]
fn moves_then_undos_round_trip_to_the_start() {
    let mut session = Session::new(bent_level());

    // Walk almost to the exit so the session stays in play.
    let walk = &SOLUTION[..5];
    for direction in walk {
        let _ = step(&mut session, *direction);
    }
    assert_eq!(query::move_count(&session), 5);
    assert_eq!(query::history_len(&session), 5);

    let mut events = Vec::new();
    for _ in walk {
        apply(&mut session, Command::Undo, &mut events);
    }

    assert_eq!(query::player_position(&session), Point::new(1, 1));
    assert_eq!(query::move_count(&session), 0);
    assert_eq!(query::history_len(&session), 0);
    assert!(!query::is_won(&session));
}
