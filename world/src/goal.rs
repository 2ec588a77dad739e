//! Breadth-first goal placement over carved mazes.

use std::collections::VecDeque;

use zen_maze_core::{Direction, Grid, Point};

/// Sentinel distance for cells the search never reached, so callers can
/// distinguish walls from traversable tiles.
const UNREACHED: u16 = u16::MAX;

/// Returns the passage cell farthest from `start` by breadth-first distance.
///
/// Ties at the maximum distance resolve to the first such cell dequeued,
/// which is deterministic given the fixed neighbor expansion order of
/// [`Direction::ALL`]. Because carved mazes are spanning trees, the BFS
/// distance equals the unique path length, and the returned cell is distinct
/// from `start` whenever the maze holds more than one passage.
///
/// `start` must reference a passage cell; anything else indicates a corrupt
/// level descriptor and aborts immediately.
#[must_use]
pub fn find_furthest_point(grid: &Grid, start: Point) -> Point {
    let (_, furthest) = flood(grid, start);
    furthest
}

/// Dense breadth-first distance grid seeded from a single start cell.
///
/// The field mirrors the maze dimensions and stores the forward search
/// results used to audit goal placement and to plan solution walks.
/// Distances default to `u16::MAX` for unreachable cells.
#[derive(Clone, Debug)]
pub struct DistanceField {
    width: u32,
    height: u32,
    distances: Vec<u16>,
}

impl DistanceField {
    /// Builds the distance field for `grid` seeded at `start`.
    ///
    /// `start` must reference a passage cell, as for
    /// [`find_furthest_point`].
    #[must_use]
    pub fn from_grid(grid: &Grid, start: Point) -> Self {
        let (distances, _) = flood(grid, start);
        Self {
            width: grid.width(),
            height: grid.height(),
            distances,
        }
    }

    /// Distance recorded for the provided cell, if it lies within the field.
    ///
    /// Unreached cells (walls included) report `u16::MAX`.
    #[must_use]
    pub fn distance(&self, cell: Point) -> Option<u16> {
        if cell.x() >= self.width || cell.y() >= self.height {
            return None;
        }

        let width = usize::try_from(self.width).ok()?;
        index(width, cell).and_then(|offset| self.distances.get(offset).copied())
    }

    /// Largest finite distance recorded anywhere in the field.
    #[must_use]
    pub fn max_distance(&self) -> u16 {
        self.distances
            .iter()
            .copied()
            .filter(|distance| *distance != UNREACHED)
            .max()
            .unwrap_or(0)
    }
}

fn flood(grid: &Grid, start: Point) -> (Vec<u16>, Point) {
    assert!(
        grid.is_passage(start),
        "goal placement requires a passage start cell"
    );

    let width = usize::try_from(grid.width()).unwrap_or(0);
    let height = usize::try_from(grid.height()).unwrap_or(0);
    let cell_count = width.checked_mul(height).unwrap_or(0);

    let mut distances = vec![UNREACHED; cell_count];
    let mut queue = VecDeque::new();

    if let Some(start_index) = index(width, start) {
        distances[start_index] = 0;
        queue.push_back(start);
    }

    let mut furthest = start;
    let mut max_distance = 0;

    while let Some(cell) = queue.pop_front() {
        let Some(current_index) = index(width, cell) else {
            continue;
        };
        let current_distance = distances[current_index];

        if current_distance > max_distance {
            max_distance = current_distance;
            furthest = cell;
        }

        if current_distance >= UNREACHED.saturating_sub(1) {
            continue;
        }

        let next_distance = current_distance + 1;

        for direction in Direction::ALL {
            let Some(neighbor) = cell.step(direction) else {
                continue;
            };

            if !grid.is_passage(neighbor) {
                continue;
            }

            let Some(neighbor_index) = index(width, neighbor) else {
                continue;
            };

            if distances[neighbor_index] != UNREACHED {
                continue;
            }

            distances[neighbor_index] = next_distance;
            queue.push_back(neighbor);
        }
    }

    (distances, furthest)
}

fn index(width: usize, cell: Point) -> Option<usize> {
    let column = usize::try_from(cell.x()).ok()?;
    let row = usize::try_from(cell.y()).ok()?;
    row.checked_mul(width)?.checked_add(column)
}
