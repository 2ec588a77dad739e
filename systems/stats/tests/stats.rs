use std::time::Duration;

use zen_maze_core::{Difficulty, Event, LevelId, Point};
use zen_maze_system_stats::{best_time_key, MemoryStore, RecordStore, Stats};

fn loaded(level: u32) -> Event {
    Event::LevelLoaded {
        level: LevelId::new(level),
        difficulty: Difficulty::Easy,
    }
}

fn tick(millis: u64) -> Event {
    Event::TimeAdvanced {
        dt: Duration::from_millis(millis),
    }
}

fn moved() -> Event {
    Event::PlayerMoved {
        from: Point::new(1, 1),
        to: Point::new(2, 1),
    }
}

fn undone() -> Event {
    Event::MoveUndone {
        from: Point::new(2, 1),
        to: Point::new(1, 1),
    }
}

fn won(level: u32) -> Event {
    Event::LevelWon {
        level: LevelId::new(level),
        moves: 3,
    }
}

#[test]
fn seconds_accumulate_from_ticks_only_while_running() {
    let mut stats = Stats::new();
    let mut store = MemoryStore::new();

    stats.handle(&[loaded(1), tick(500), tick(500), tick(250)], &mut store);
    assert_eq!(stats.seconds(), 1);

    stats.handle(&[won(1), tick(5_000)], &mut store);
    assert_eq!(stats.seconds(), 1, "level clock freezes after the win");
    assert_eq!(stats.session_seconds(), 6, "career clock keeps running");
}

#[test]
fn moves_track_advances_and_undos() {
    let mut stats = Stats::new();
    let mut store = MemoryStore::new();

    stats.handle(&[loaded(1), moved(), moved(), undone()], &mut store);

    assert_eq!(stats.moves(), 1);
    assert_eq!(stats.session_moves(), 2, "undo never shrinks career totals");
}

#[test]
fn first_win_records_a_best_time() {
    let mut stats = Stats::new();
    let mut store = MemoryStore::new();

    stats.handle(&[loaded(7), tick(4_000), won(7)], &mut store);

    assert_eq!(stats.best_seconds(), Some(4));
    assert_eq!(store.get(&best_time_key(LevelId::new(7))), Some("4".to_owned()));
    assert_eq!(stats.levels_cleared(), 1);
}

#[test]
fn slower_attempts_never_overwrite_the_best_time() {
    let mut stats = Stats::new();
    let mut store = MemoryStore::new();
    store.set(&best_time_key(LevelId::new(7)), "3".to_owned());

    stats.handle(&[loaded(7), tick(9_000), won(7)], &mut store);

    assert_eq!(stats.best_seconds(), Some(3));
    assert_eq!(store.get(&best_time_key(LevelId::new(7))), Some("3".to_owned()));
}

#[test]
fn faster_attempts_improve_the_best_time() {
    let mut stats = Stats::new();
    let mut store = MemoryStore::new();
    store.set(&best_time_key(LevelId::new(7)), "9".to_owned());

    stats.handle(&[loaded(7), tick(2_000), won(7)], &mut store);

    assert_eq!(stats.best_seconds(), Some(2));
    assert_eq!(store.get(&best_time_key(LevelId::new(7))), Some("2".to_owned()));
}

#[test]
fn loading_a_level_resets_counters_and_reads_its_best() {
    let mut stats = Stats::new();
    let mut store = MemoryStore::new();
    store.set(&best_time_key(LevelId::new(2)), "11".to_owned());

    stats.handle(&[loaded(1), tick(3_000), moved(), moved()], &mut store);
    assert_eq!(stats.moves(), 2);
    assert_eq!(stats.seconds(), 3);

    stats.handle(&[loaded(2)], &mut store);

    assert_eq!(stats.level(), Some(LevelId::new(2)));
    assert_eq!(stats.moves(), 0);
    assert_eq!(stats.seconds(), 0);
    assert_eq!(stats.best_seconds(), Some(11));
}
