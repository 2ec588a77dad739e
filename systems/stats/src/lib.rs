#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic statistics system fed by session events.
//!
//! The session owns no clock; an external ticker drives `TimeAdvanced`
//! events and this system turns them into elapsed seconds, alongside move
//! counters, career totals, and per-level best times. Persistence flows
//! through an injected [`RecordStore`] so the system itself never touches a
//! file or any other ambient state.

use std::{collections::HashMap, time::Duration};

use zen_maze_core::{Event, LevelId};

/// Key-value persistence interface through which best times flow.
///
/// Mirrors the string-keyed store the original product persisted records
/// in; adapters decide what medium backs it.
pub trait RecordStore {
    /// Retrieves the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

/// Volatile in-memory store used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        let _ = self.entries.insert(key.to_owned(), value);
    }
}

/// Store key under which a level's best completion time is recorded.
#[must_use]
pub fn best_time_key(level: LevelId) -> String {
    format!("best/{}", level.get())
}

/// Pure statistics system accumulating play metrics from session events.
#[derive(Debug, Default)]
pub struct Stats {
    level: Option<LevelId>,
    moves: u32,
    elapsed: Duration,
    best_seconds: Option<u64>,
    running: bool,
    session_moves: u64,
    session_elapsed: Duration,
    levels_cleared: u32,
}

impl Stats {
    /// Creates a statistics system with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes session events, updating counters and persisting improved
    /// best times through the provided store.
    pub fn handle(&mut self, events: &[Event], store: &mut dyn RecordStore) {
        for event in events {
            match event {
                Event::LevelLoaded { level, .. } => self.begin_level(*level, store),
                Event::SessionReset { level, .. } => self.begin_level(*level, store),
                Event::TimeAdvanced { dt } => {
                    self.session_elapsed = self.session_elapsed.saturating_add(*dt);
                    if self.running {
                        self.elapsed = self.elapsed.saturating_add(*dt);
                    }
                }
                Event::PlayerMoved { .. } => {
                    self.moves = self.moves.saturating_add(1);
                    self.session_moves = self.session_moves.saturating_add(1);
                }
                Event::MoveUndone { .. } => {
                    self.moves = self.moves.saturating_sub(1);
                }
                Event::LevelWon { level, .. } => {
                    self.running = false;
                    self.levels_cleared = self.levels_cleared.saturating_add(1);

                    let seconds = self.elapsed.as_secs();
                    let improved = self
                        .best_seconds
                        .map_or(true, |best| seconds < best);
                    if improved {
                        store.set(&best_time_key(*level), seconds.to_string());
                        self.best_seconds = Some(seconds);
                    }
                }
                Event::MoveRejected { .. } => {}
            }
        }
    }

    fn begin_level(&mut self, level: LevelId, store: &dyn RecordStore) {
        self.level = Some(level);
        self.moves = 0;
        self.elapsed = Duration::ZERO;
        self.running = true;
        self.best_seconds = store
            .get(&best_time_key(level))
            .and_then(|value| value.parse().ok());
    }

    /// Level the counters currently describe, once one has loaded.
    #[must_use]
    pub const fn level(&self) -> Option<LevelId> {
        self.level
    }

    /// Net successful moves recorded for the current level.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Whole seconds elapsed on the current level.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Best completion time known for the current level, in seconds.
    #[must_use]
    pub const fn best_seconds(&self) -> Option<u64> {
        self.best_seconds
    }

    /// Career total of successful moves across all levels this session.
    #[must_use]
    pub const fn session_moves(&self) -> u64 {
        self.session_moves
    }

    /// Career total of elapsed seconds across all levels this session.
    #[must_use]
    pub const fn session_seconds(&self) -> u64 {
        self.session_elapsed.as_secs()
    }

    /// Number of levels completed this session.
    #[must_use]
    pub const fn levels_cleared(&self) -> u32 {
        self.levels_cleared
    }
}
