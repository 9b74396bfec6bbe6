use std::fs;
use std::path::PathBuf;

use conway::{Cell, GridBounds, LifeError, LiveSet, PatternError, Simulation, SimulationControl, grid, store};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Unique scratch path per test so parallel tests never share a file.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("conway-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

fn set(cells: &[(i32, i32)]) -> LiveSet {
    cells.iter().copied().map(Cell::from).collect()
}

#[test]
fn save_then_load_round_trips() {
    let path = scratch("round_trip.txt");
    let cells = set(&[(0, 0), (3, 9), (39, 19), (12, 4)]);

    store::save(&cells, &path).unwrap();
    assert_eq!(store::load(&path).unwrap(), cells);
}

#[test]
fn random_boards_round_trip() {
    let path = scratch("random_round_trip.txt");
    let mut rng = StdRng::seed_from_u64(77);
    for (w, h) in [(1, 1), (40, 20), (13, 57), (120, 90)] {
        let cells = grid::random_fill(GridBounds::new(w, h), 0.3, &mut rng);
        store::save(&cells, &path).unwrap();
        assert_eq!(store::load(&path).unwrap(), cells, "{w}x{h}");
    }
}

#[test]
fn save_overwrites_previous_contents() {
    let path = scratch("overwrite.txt");
    store::save(&set(&[(1, 1), (2, 2), (3, 3)]), &path).unwrap();
    store::save(&set(&[(5, 6)]), &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "5,6\n");
}

#[test]
fn missing_file_loads_empty() {
    let path = scratch("does_not_exist.txt");
    assert!(store::load(&path).unwrap().is_empty());
}

#[test]
fn controller_load_of_missing_file_empties_board() {
    let path = scratch("never_written.txt");
    let mut sim = Simulation::with_cells(GridBounds::new(3, 3), set(&[(1, 0), (1, 1), (1, 2)]));
    sim.tick();
    assert_eq!(sim.generation(), 1);

    sim.load(&path).unwrap();
    assert!(sim.cells().is_empty());
    assert_eq!(sim.generation(), 0);
}

#[test]
fn save_into_missing_directory_fails() {
    let path = scratch("no_such_dir").join("patterns.txt");
    assert!(matches!(store::save(&set(&[(0, 0)]), &path), Err(PatternError::Io(_))));
}

#[test]
fn controller_round_trip_resets_generation() {
    let path = scratch("controller.txt");
    let bounds = GridBounds::new(10, 10);
    let glider = set(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);

    let mut sim = Simulation::with_cells(bounds, glider.clone());
    sim.save(&path).unwrap();
    sim.tick();
    sim.tick();
    assert_eq!(sim.generation(), 2);

    sim.load(&path).unwrap();
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.cells(), &glider);
}

#[test]
fn controller_load_clips_to_bounds() {
    let path = scratch("clipped.txt");
    fs::write(&path, "0,0\n4,4\n5,1\n-1,2\n").unwrap();

    let mut sim = Simulation::with_cells(GridBounds::new(5, 5), LiveSet::new());
    sim.load(&path).unwrap();
    assert_eq!(sim.cells(), &set(&[(0, 0), (4, 4)]));
}

#[test]
fn failed_load_leaves_board_untouched() {
    let path = scratch("malformed.txt");
    fs::write(&path, "1,1\n2;2\n").unwrap();

    let before = set(&[(1, 0), (1, 1), (1, 2)]);
    let mut sim = Simulation::with_cells(GridBounds::new(3, 3), before.clone());
    sim.tick();
    let after_tick = sim.cells().clone();

    let err = sim.load(&path).unwrap_err();
    assert!(matches!(
        err,
        LifeError::Pattern { source: PatternError::Parse { line: 2, .. }, .. }
    ));
    assert_eq!(sim.cells(), &after_tick);
    assert_eq!(sim.generation(), 1);
}

#[test]
fn failed_save_leaves_board_untouched() {
    let path = scratch("missing_parent").join("out.txt");
    let cells = set(&[(1, 1)]);
    let sim = Simulation::with_cells(GridBounds::new(3, 3), cells.clone());

    assert!(sim.save(&path).is_err());
    assert_eq!(sim.cells(), &cells);
}
