#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Zen Maze engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative game session, and pure systems. Adapters submit [`Command`]
//! values describing desired mutations, the session executes those commands
//! via its `apply` entry point, and then broadcasts [`Event`] values for
//! systems to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command
//! batches.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Zen Maze.";

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the active level and resets the navigation state.
    LoadLevel {
        /// Level descriptor the session should adopt.
        level: Level,
    },
    /// Requests that the player advance one cell in the given direction.
    Move {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Requests that the most recent successful move be reverted.
    Undo,
    /// Restarts the active level from its start cell.
    Restart,
    /// Advances the session clock by the provided delta time.
    Tick {
        /// Duration of wall-clock time that elapsed since the previous tick.
        dt: Duration,
    },
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a new level became active.
    LevelLoaded {
        /// Identifier of the level that was loaded.
        level: LevelId,
        /// Difficulty tier assigned to the level.
        difficulty: Difficulty,
    },
    /// Confirms that the player advanced between two passage cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: Point,
        /// Cell the player occupies after completing the move.
        to: Point,
    },
    /// Reports that a move request hit a wall or the grid boundary.
    MoveRejected {
        /// Cell the player occupied when the move was rejected.
        at: Point,
        /// Direction of the rejected step.
        direction: Direction,
    },
    /// Confirms that the most recent move was reverted.
    MoveUndone {
        /// Cell the player occupied before the undo.
        from: Point,
        /// Cell the player occupies after the undo.
        to: Point,
    },
    /// Announces that the player reached the exit cell.
    LevelWon {
        /// Identifier of the level that was completed.
        level: LevelId,
        /// Number of moves recorded when the exit was reached.
        moves: u32,
    },
    /// Confirms that the active level was restarted from its start cell.
    SessionReset {
        /// Identifier of the level that was restarted.
        level: LevelId,
        /// Cell the player was returned to.
        start: Point,
    },
    /// Indicates that the session clock advanced.
    TimeAdvanced {
        /// Duration of wall-clock time that elapsed in the tick.
        dt: Duration,
    },
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// All four directions in the fixed traversal order used by searches.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Location of a single grid cell expressed as x and y coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    x: u32,
    y: u32,
}

impl Point {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Computes the Manhattan distance between two coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the neighboring coordinate one cell away in `direction`.
    ///
    /// Steps that would leave the `u32` coordinate range yield `None` so
    /// callers never observe wrapped positions.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Point> {
        match direction {
            Direction::North => self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            Direction::East => self.x.checked_add(1).map(|x| Point::new(x, self.y)),
            Direction::South => self.y.checked_add(1).map(|y| Point::new(self.x, y)),
            Direction::West => self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
        }
    }
}

/// Content of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Solid cell that blocks traversal.
    Wall,
    /// Carved cell open for traversal.
    Passage,
}

/// Dense row-major maze grid with immutable dimensions.
///
/// Grids produced by the carving algorithm always have odd dimensions, a
/// fully walled border, and passage cells forming a spanning tree over the
/// odd-coordinate sub-lattice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Assembles a grid from row-major tiles.
    ///
    /// The tile count must match `width * height`; a mismatch indicates a
    /// defective producer and aborts immediately.
    #[must_use]
    pub fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Self {
        let expected = u64::from(width) * u64::from(height);
        assert_eq!(
            u64::try_from(tiles.len()).unwrap_or(u64::MAX),
            expected,
            "tile count must match grid dimensions"
        );
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the tile at the provided coordinate, if it lies in bounds.
    #[must_use]
    pub fn tile(&self, point: Point) -> Option<Tile> {
        self.index(point)
            .and_then(|index| self.tiles.get(index))
            .copied()
    }

    /// Reports whether the coordinate lies in bounds on a carved passage.
    #[must_use]
    pub fn is_passage(&self, point: Point) -> bool {
        matches!(self.tile(point), Some(Tile::Passage))
    }

    /// Dense tiles stored in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x() < self.width && point.y() < self.height {
            let row = usize::try_from(point.y()).ok()?;
            let column = usize::try_from(point.x()).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Unique identifier assigned to a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(u32);

impl LevelId {
    /// Creates a new one-based level identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Difficulty tier assigned to a level by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Introductory tier covering the smallest grids.
    Easy,
    /// Intermediate tier with moderately sized grids.
    Medium,
    /// Advanced tier approaching the maximum grid size.
    Hard,
    /// Final tier played exclusively on maximum-size grids.
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// Immutable descriptor of one generated maze bound to a level identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    id: LevelId,
    grid: Grid,
    start: Point,
    exit: Point,
    difficulty: Difficulty,
}

impl Level {
    /// Assembles a level descriptor from its parts.
    #[must_use]
    pub fn new(id: LevelId, grid: Grid, start: Point, exit: Point, difficulty: Difficulty) -> Self {
        Self {
            id,
            grid,
            start,
            exit,
            difficulty,
        }
    }

    /// Identifier assigned to the level.
    #[must_use]
    pub const fn id(&self) -> LevelId {
        self.id
    }

    /// Maze grid traversed by the player.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell the player occupies when the level begins.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Cell the player must reach to complete the level.
    #[must_use]
    pub const fn exit(&self) -> Point {
        self.exit
    }

    /// Difficulty tier assigned by the catalog.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
