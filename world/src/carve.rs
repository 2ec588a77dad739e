//! Randomized depth-first maze carving over the odd sub-lattice.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zen_maze_core::{Direction, Grid, Point, Tile};

/// Smallest dimension that leaves room for the walled border around the
/// interior carving cell at (1, 1).
const MIN_DIMENSION: u32 = 3;

/// Carves a perfect maze of the requested size using the provided random
/// source.
///
/// Even dimensions are rounded up to the next odd value and anything smaller
/// than three is raised to three, so the carving lattice always fits inside a
/// one-cell wall border. The passage cells of the returned grid form a
/// spanning tree over the odd-coordinate sub-lattice: exactly one simple path
/// connects any two passages.
#[must_use]
pub fn generate<R: Rng>(width: u32, height: u32, rng: &mut R) -> Grid {
    let width = round_up_to_odd(width);
    let height = round_up_to_odd(height);

    let mut lattice = Lattice::new(width, height);
    let origin = Point::new(1, 1);
    lattice.carve(origin);

    // Explicit frame stack instead of recursion: the walk can reach every
    // interior cell before the first backtrack on large grids.
    let mut stack = vec![Frame::new(origin, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(direction) = frame.next_direction() else {
            let _ = stack.pop();
            continue;
        };
        let cell = frame.cell();

        let Some((link, target)) = double_step(cell, direction) else {
            continue;
        };

        if lattice.in_interior(target) && lattice.is_uncarved(target) {
            lattice.carve(link);
            lattice.carve(target);
            stack.push(Frame::new(target, rng));
        }
    }

    lattice.into_grid()
}

/// Carves a perfect maze from a numeric seed.
///
/// Identical seeds always produce identical grids, which is what the stable
/// catalog mode and the replay tests rely on.
#[must_use]
pub fn generate_seeded(width: u32, height: u32, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(width, height, &mut rng)
}

fn round_up_to_odd(value: u32) -> u32 {
    let odd = if value % 2 == 0 {
        value.saturating_add(1)
    } else {
        value
    };
    odd.max(MIN_DIMENSION)
}

fn double_step(cell: Point, direction: Direction) -> Option<(Point, Point)> {
    let link = cell.step(direction)?;
    let target = link.step(direction)?;
    Some((link, target))
}

/// One depth-first walk frame: a carved cell plus the shuffled directions
/// still awaiting a visit.
#[derive(Clone, Copy, Debug)]
struct Frame {
    cell: Point,
    directions: [Direction; 4],
    cursor: usize,
}

impl Frame {
    fn new<R: Rng>(cell: Point, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Self {
            cell,
            directions,
            cursor: 0,
        }
    }

    const fn cell(&self) -> Point {
        self.cell
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.cursor).copied();
        if direction.is_some() {
            self.cursor += 1;
        }
        direction
    }
}

#[derive(Clone, Debug)]
struct Lattice {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Lattice {
    fn new(width: u32, height: u32) -> Self {
        let capacity_u64 = u64::from(width) * u64::from(height);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; capacity],
        }
    }

    fn carve(&mut self, cell: Point) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.tiles.get_mut(index) {
                *slot = Tile::Passage;
            }
        }
    }

    fn is_uncarved(&self, cell: Point) -> bool {
        self.index(cell)
            .and_then(|index| self.tiles.get(index))
            .is_some_and(|tile| *tile == Tile::Wall)
    }

    fn in_interior(&self, cell: Point) -> bool {
        cell.x() > 0 && cell.x() + 1 < self.width && cell.y() > 0 && cell.y() + 1 < self.height
    }

    fn index(&self, cell: Point) -> Option<usize> {
        if cell.x() < self.width && cell.y() < self.height {
            let row = usize::try_from(cell.y()).ok()?;
            let column = usize::try_from(cell.x()).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }

    fn into_grid(self) -> Grid {
        Grid::from_tiles(self.width, self.height, self.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_dimensions_round_up_to_odd() {
        let grid = generate_seeded(8, 8, 7);
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 9);
    }

    #[test]
    fn degenerate_dimensions_yield_single_passage() {
        let grid = generate_seeded(1, 1, 7);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);

        let passages = grid
            .tiles()
            .iter()
            .filter(|tile| **tile == Tile::Passage)
            .count();
        assert_eq!(passages, 1);
        assert!(grid.is_passage(Point::new(1, 1)));
    }

    #[test]
    fn identical_seeds_carve_identical_grids() {
        let first = generate_seeded(21, 21, 0x5eed);
        let second = generate_seeded(21, 21, 0x5eed);
        assert_eq!(first, second);
    }
}
