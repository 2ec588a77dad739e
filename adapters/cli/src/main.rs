#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Zen Maze experience.

mod config;
mod level_transfer;
mod store;

use std::{path::PathBuf, time::Duration};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use zen_maze_core::{Command, Direction, Event, Level, LevelId, WELCOME_BANNER};
use zen_maze_system_progression::Progression;
use zen_maze_system_stats::{best_time_key, RecordStore, Stats};
use zen_maze_world::{
    apply, level_with_seed, query, DistanceField, LevelCatalog, SeedMode, Session,
};

use crate::store::FileStore;

/// Simulated time charged per walkthrough step.
const STEP_CADENCE: Duration = Duration::from_secs(1);

#[derive(Debug, Parser)]
#[command(name = "zen-maze", about = "Procedural maze levels on the command line")]
struct Cli {
    /// Level identifier to load; defaults to the configured start level.
    #[arg(long)]
    level: Option<u32>,

    /// Explicit carve seed overriding the catalog's seed policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Carve fresh topology instead of the stable per-identifier maze.
    #[arg(long)]
    fresh: bool,

    /// Print the shareable transfer string for the selected level and exit.
    #[arg(long)]
    share: bool,

    /// Decode the provided transfer string and print its descriptor.
    #[arg(long, value_name = "STRING")]
    inspect: Option<String>,

    /// Walk the solution path and print the resulting statistics.
    #[arg(long)]
    walkthrough: bool,

    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(encoded) = cli.inspect.as_deref() {
        return inspect(encoded);
    }

    let config = config::load(cli.config.as_deref())?;
    let seed_mode = if cli.fresh || config.fresh_topology {
        SeedMode::Fresh
    } else {
        SeedMode::Stable
    };
    let catalog = LevelCatalog::new(seed_mode);

    let id = LevelId::new(cli.level.unwrap_or(config.start_level));
    let level = match cli.seed {
        Some(seed) => level_with_seed(id, seed),
        None => catalog.level_at(id),
    };

    if cli.share {
        println!("{}", level_transfer::encode(&level));
        return Ok(());
    }

    println!("{WELCOME_BANNER}");

    let mut records = FileStore::load(&config.records_path)?;
    print_descriptor(&level);
    print_best_time(&level, &records);

    if cli.walkthrough {
        walkthrough(level, &catalog, &mut records)?;
        records.save()?;
    }

    Ok(())
}

fn inspect(encoded: &str) -> Result<()> {
    let level = level_transfer::decode(encoded).with_context(|| {
        format!(
            "expected a '{}' level string",
            level_transfer::SNAPSHOT_HEADER
        )
    })?;
    print_descriptor(&level);
    Ok(())
}

fn print_descriptor(level: &Level) {
    let grid = level.grid();
    let field = DistanceField::from_grid(grid, level.start());
    let solution_steps = field.distance(level.exit()).unwrap_or(u16::MAX);

    println!("Level {} ({})", level.id().get(), level.difficulty());
    println!("  grid: {}x{}", grid.width(), grid.height());
    println!(
        "  exit: ({}, {}), {} steps from the start",
        level.exit().x(),
        level.exit().y(),
        solution_steps
    );
}

fn print_best_time(level: &Level, records: &FileStore) {
    match records.get(&best_time_key(level.id())) {
        Some(best) => println!("  best: {best}s"),
        None => println!("  best: no record yet"),
    }
}

/// Demonstrates the engine end to end: walks the unique solution path,
/// pumping the statistics and progression systems with the broadcast
/// events, then reports the outcome.
fn walkthrough(level: Level, catalog: &LevelCatalog, records: &mut FileStore) -> Result<()> {
    let steps = solution_path(&level);

    let mut session = Session::new(level);
    let mut progression = Progression::new();
    let mut stats = Stats::new();

    let mut events: Vec<Event> = Vec::new();
    apply(&mut session, Command::Restart, &mut events);
    for direction in steps {
        apply(&mut session, Command::Move { direction }, &mut events);
        apply(&mut session, Command::Tick { dt: STEP_CADENCE }, &mut events);
    }

    ensure!(
        query::is_won(&session),
        "solution walk failed to reach the exit"
    );

    stats.handle(&events, records);
    let mut follow_ups = Vec::new();
    progression.handle(&events, catalog, &mut follow_ups);

    println!(
        "Walked the solution in {} moves over {}s.",
        stats.moves(),
        stats.seconds()
    );
    if let Some(best) = stats.best_seconds() {
        println!("Best recorded time: {best}s.");
    }

    for command in follow_ups {
        if let Command::LoadLevel { level } = command {
            let next_id = level.id();
            let mut load_events = Vec::new();
            apply(&mut session, Command::LoadLevel { level }, &mut load_events);
            stats.handle(&load_events, records);
            println!("Next up: level {}.", next_id.get());
        }
    }

    Ok(())
}

/// Derives the start-to-exit walk by descending the exit-seeded distance
/// field; in a perfect maze the descending neighbor is unique at every cell.
fn solution_path(level: &Level) -> Vec<Direction> {
    let grid = level.grid();
    let field = DistanceField::from_grid(grid, level.exit());

    let mut steps = Vec::new();
    let mut cursor = level.start();

    while cursor != level.exit() {
        let Some(current) = field.distance(cursor) else {
            break;
        };

        let next = Direction::ALL.into_iter().find_map(|direction| {
            let neighbor = cursor.step(direction)?;
            let closer = field.distance(neighbor) == Some(current.checked_sub(1)?);
            (grid.is_passage(neighbor) && closer).then_some((direction, neighbor))
        });

        let Some((direction, neighbor)) = next else {
            break;
        };
        steps.push(direction);
        cursor = neighbor;
    }

    steps
}
