use zen_maze_core::{Command, Difficulty, Event, LevelId};
use zen_maze_system_progression::Progression;
use zen_maze_world::LevelCatalog;

fn won(level: u32) -> Event {
    Event::LevelWon {
        level: LevelId::new(level),
        moves: 12,
    }
}

fn loaded(level: u32) -> Event {
    Event::LevelLoaded {
        level: LevelId::new(level),
        difficulty: Difficulty::Easy,
    }
}

#[test]
fn win_emits_a_load_command_for_the_next_level() {
    let catalog = LevelCatalog::default();
    let mut progression = Progression::new();
    let mut commands = Vec::new();

    progression.handle(&[won(4)], &catalog, &mut commands);

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        Command::LoadLevel { level } => assert_eq!(level.id(), LevelId::new(5)),
        other => panic!("unexpected command emitted: {other:?}"),
    }
}

#[test]
fn replayed_win_does_not_advance_twice() {
    let catalog = LevelCatalog::default();
    let mut progression = Progression::new();
    let mut commands = Vec::new();

    progression.handle(&[won(4)], &catalog, &mut commands);
    progression.handle(&[won(4)], &catalog, &mut commands);

    assert_eq!(commands.len(), 1, "duplicate win must be ignored");
}

#[test]
fn load_confirmation_clears_the_advancement_marker() {
    let catalog = LevelCatalog::default();
    let mut progression = Progression::new();
    let mut commands = Vec::new();

    progression.handle(&[won(4)], &catalog, &mut commands);
    progression.handle(&[loaded(5)], &catalog, &mut commands);
    // Replaying level 4 after an explicit reload is a fresh win.
    progression.handle(&[loaded(4), won(4)], &catalog, &mut commands);

    assert_eq!(commands.len(), 2);
}

#[test]
fn final_level_reloads_itself() {
    let catalog = LevelCatalog::default();
    let mut progression = Progression::new();
    let mut commands = Vec::new();

    progression.handle(&[won(500)], &catalog, &mut commands);

    match &commands[0] {
        Command::LoadLevel { level } => assert_eq!(level.id(), LevelId::new(500)),
        other => panic!("unexpected command emitted: {other:?}"),
    }
}
