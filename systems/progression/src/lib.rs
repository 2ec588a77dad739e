#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic progression system that advances through the level catalog.

use zen_maze_core::{Command, Event, LevelId};
use zen_maze_world::{catalog, LevelCatalog};

/// Pure system that reacts to win events by emitting load commands for the
/// next catalog level.
///
/// The system remembers which level it already advanced from so a win event
/// replayed across consecutive batches cannot trigger a second load; the
/// marker clears once the session confirms a new level.
#[derive(Debug, Default)]
pub struct Progression {
    advanced_from: Option<LevelId>,
}

impl Progression {
    /// Creates a progression system with no pending advancement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes session events and emits catalog load commands.
    pub fn handle(&mut self, events: &[Event], catalog: &LevelCatalog, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::LevelLoaded { .. } => {
                    self.advanced_from = None;
                }
                Event::LevelWon { level, .. } => {
                    if self.advanced_from == Some(*level) {
                        continue;
                    }
                    self.advanced_from = Some(*level);
                    out.push(Command::LoadLevel {
                        level: catalog.level_at(next_level(*level)),
                    });
                }
                _ => {}
            }
        }
    }
}

/// Identifier of the level that follows `current` in the catalog.
///
/// The final catalog level reloads itself rather than walking past the
/// advertised span.
#[must_use]
pub fn next_level(current: LevelId) -> LevelId {
    if current.get() >= catalog::LEVEL_SPAN {
        current
    } else {
        LevelId::new(current.get().saturating_add(1))
    }
}
