#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Zen Maze.
//!
//! The [`Session`] owns the live navigation state for one play-through of a
//! level. Adapters mutate it exclusively through [`apply`], which executes a
//! [`Command`] and broadcasts the resulting [`Event`] values; the [`query`]
//! module provides the read-only counterpart. The procedural content
//! pipeline lives alongside it: [`carve`] produces perfect mazes, [`goal`]
//! places exits, and [`catalog`] binds both to level identifiers.

pub mod carve;
pub mod catalog;
pub mod goal;

use zen_maze_core::{Command, Event, Level, Point};

pub use carve::{generate, generate_seeded};
pub use catalog::{level_with_seed, LevelCatalog, SeedMode};
pub use goal::{find_furthest_point, DistanceField};

/// Live navigation state for one play-through of a level.
///
/// The session is a plain state machine: every operation is total, illegal
/// moves are ordinary rejected transitions rather than errors, and the win
/// flag transitions false to true at most once per play-through. One
/// controller owns the session; concurrent input sources must serialize
/// their commands externally.
#[derive(Clone, Debug)]
pub struct Session {
    level: Level,
    player: Point,
    history: Vec<Point>,
    move_count: u32,
    won: bool,
}

impl Session {
    /// Creates a session positioned at the level's start cell.
    #[must_use]
    pub fn new(level: Level) -> Self {
        let player = level.start();
        Self {
            level,
            player,
            history: Vec::new(),
            move_count: 0,
            won: false,
        }
    }

    fn load(&mut self, level: Level) {
        self.player = level.start();
        self.level = level;
        self.history.clear();
        self.move_count = 0;
        self.won = false;
    }

    fn restart(&mut self) {
        self.player = self.level.start();
        self.history.clear();
        self.move_count = 0;
        self.won = false;
    }
}

/// Applies the provided command to the session, mutating state
/// deterministically and appending the resulting events.
pub fn apply(session: &mut Session, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::LoadLevel { level } => {
            let id = level.id();
            let difficulty = level.difficulty();
            session.load(level);
            out_events.push(Event::LevelLoaded {
                level: id,
                difficulty,
            });
        }
        Command::Move { direction } => {
            if session.won {
                return;
            }

            let from = session.player;
            let candidate = from
                .step(direction)
                .filter(|cell| session.level.grid().is_passage(*cell));

            let Some(to) = candidate else {
                out_events.push(Event::MoveRejected { at: from, direction });
                return;
            };

            session.history.push(from);
            session.move_count = session.move_count.saturating_add(1);
            session.player = to;
            out_events.push(Event::PlayerMoved { from, to });

            if to == session.level.exit() {
                session.won = true;
                out_events.push(Event::LevelWon {
                    level: session.level.id(),
                    moves: session.move_count,
                });
            }
        }
        Command::Undo => {
            if session.won {
                return;
            }

            let Some(restored) = session.history.pop() else {
                return;
            };

            let from = session.player;
            session.player = restored;
            session.move_count = session.move_count.saturating_sub(1);
            out_events.push(Event::MoveUndone { from, to: restored });
        }
        Command::Restart => {
            session.restart();
            out_events.push(Event::SessionReset {
                level: session.level.id(),
                start: session.player,
            });
        }
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
        }
    }
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use super::Session;
    use zen_maze_core::{Grid, Level, Point};

    /// Cell the player currently occupies.
    #[must_use]
    pub fn player_position(session: &Session) -> Point {
        session.player
    }

    /// Number of successful moves recorded since the last reset.
    #[must_use]
    pub fn move_count(session: &Session) -> u32 {
        session.move_count
    }

    /// Number of positions available to undo.
    #[must_use]
    pub fn history_len(session: &Session) -> usize {
        session.history.len()
    }

    /// Reports whether the player reached the exit this play-through.
    #[must_use]
    pub fn is_won(session: &Session) -> bool {
        session.won
    }

    /// Provides read-only access to the active level descriptor.
    #[must_use]
    pub fn level(session: &Session) -> &Level {
        &session.level
    }

    /// Provides read-only access to the active maze grid.
    #[must_use]
    pub fn grid(session: &Session) -> &Grid {
        session.level.grid()
    }
}
