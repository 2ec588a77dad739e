//! Deterministic level catalog mapping identifiers to materialized levels.

use zen_maze_core::{Difficulty, Grid, Level, LevelId, Point};

use crate::{carve, goal};

/// Span of level identifiers advertised by the reference catalog.
pub const LEVEL_SPAN: u32 = 500;

const BASE_SIZE: u32 = 9;
const MAX_SIZE: u32 = 41;
const GROWTH_CADENCE: u32 = 15;
const GROWTH_STEP: u32 = 2;

/// Cell every level starts from; the carve origin, guaranteed passage.
const START_CELL: Point = Point::new(1, 1);

const LEVEL_SEED_DOMAIN: u64 = 0x7a3e_9d10_55c4_8b6f;
const LEVEL_SEED_STRIDE: u64 = 6_364_136_223_846_793_005;

/// Policy governing how the catalog seeds the maze carve for a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedMode {
    /// Derive the carve seed from the level identifier so repeated lookups
    /// return the same topology.
    Stable,
    /// Draw a fresh seed per lookup so every attempt carves new topology,
    /// matching the original product behavior.
    Fresh,
}

/// Pure mapping from level identifiers to materialized level descriptors.
///
/// The {size, difficulty} mapping is fixed for a given identifier no matter
/// how often a level is regenerated; only topology varies, and only in
/// [`SeedMode::Fresh`].
#[derive(Clone, Copy, Debug)]
pub struct LevelCatalog {
    seed_mode: SeedMode,
}

impl LevelCatalog {
    /// Creates a catalog with the provided seed policy.
    #[must_use]
    pub const fn new(seed_mode: SeedMode) -> Self {
        Self { seed_mode }
    }

    /// Seed policy the catalog was constructed with.
    #[must_use]
    pub const fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    /// Materializes the level bound to the provided identifier.
    #[must_use]
    pub fn level_at(&self, id: LevelId) -> Level {
        let size = size_for(id);
        let grid = match self.seed_mode {
            SeedMode::Stable => carve::generate_seeded(size, size, carve_seed(id)),
            SeedMode::Fresh => carve::generate(size, size, &mut rand::thread_rng()),
        };
        assemble(id, grid)
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::new(SeedMode::Stable)
    }
}

/// Materializes a level from an explicit carve seed, bypassing the catalog
/// seed policy. Size and difficulty still follow the identifier mapping.
#[must_use]
pub fn level_with_seed(id: LevelId, seed: u64) -> Level {
    let size = size_for(id);
    assemble(id, carve::generate_seeded(size, size, seed))
}

/// Difficulty tier assigned to the provided level identifier.
#[must_use]
pub const fn difficulty_for(id: LevelId) -> Difficulty {
    let value = id.get();
    if value <= 20 {
        Difficulty::Easy
    } else if value <= 100 {
        Difficulty::Medium
    } else if value <= 300 {
        Difficulty::Hard
    } else {
        Difficulty::Expert
    }
}

/// Grid edge length assigned to the provided level identifier.
///
/// Starts at nine cells and grows by two for every fifteen levels, capped at
/// forty-one.
#[must_use]
pub const fn size_for(id: LevelId) -> u32 {
    let grown = BASE_SIZE + (id.get() / GROWTH_CADENCE) * GROWTH_STEP;
    if grown < MAX_SIZE {
        grown
    } else {
        MAX_SIZE
    }
}

fn assemble(id: LevelId, grid: Grid) -> Level {
    let exit = goal::find_furthest_point(&grid, START_CELL);
    Level::new(id, grid, START_CELL, exit, difficulty_for(id))
}

fn carve_seed(id: LevelId) -> u64 {
    u64::from(id.get())
        .wrapping_mul(LEVEL_SEED_STRIDE)
        .wrapping_add(LEVEL_SEED_DOMAIN)
}
