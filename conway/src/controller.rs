// controller.rs - Owns the board, generation counter, pause flag and history

use crate::config::SimConfig;
use crate::engine;
use crate::error::{LifeError, Result};
use crate::grid::{self, Cell, GridBounds, LiveSet};
use crate::history::HistoryTracker;
use crate::patterns::Pattern;
use crate::store;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Operations the input layer may trigger.
pub trait SimulationControl {
    fn toggle_pause(&mut self);
    fn step_once(&mut self) -> Result<()>;
    fn clear(&mut self);
    fn randomize(&mut self, density: f64);
    fn save(&self, path: &Path) -> Result<()>;
    fn load(&mut self, path: &Path) -> Result<()>;
    fn tick(&mut self) -> bool;
}

pub struct Simulation {
    bounds     : GridBounds,
    cells      : LiveSet,
    generation : u64,
    paused     : bool,
    history    : HistoryTracker,
    rng        : StdRng,
}

impl Simulation {
    /// Running, generation 0, board filled at `density`.
    pub fn new(bounds: GridBounds, density: f64, mut rng: StdRng) -> Self {
        let cells = grid::random_fill(bounds, density, &mut rng);
        Self {
            bounds,
            cells,
            generation: 0,
            paused: false,
            history: HistoryTracker::default(),
            rng,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config.bounds, config.density, rng)
    }

    /// Running, generation 0, with the given board. Cells outside `bounds` are dropped.
    pub fn with_cells(bounds: GridBounds, cells: LiveSet) -> Self {
        let (cells, _) = grid::clip_to_bounds(cells, bounds);
        Self {
            bounds,
            cells,
            generation: 0,
            paused: false,
            history: HistoryTracker::default(),
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn cells(&self) -> &LiveSet {
        &self.cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    /// Record this frame's measured rate alongside the current population.
    pub fn record_sample(&mut self, rate: f32) -> bool {
        self.history.record_sample(rate, self.cells.len())
    }

    /// Replace the board with a random fill drawn from `rng`; generation resets.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let cells = grid::random_fill(self.bounds, density, rng);
        self.reset_to(cells);
        log::info!("randomized board at density {density}: {} live cells", self.cells.len());
    }

    /// Flip a single in-bounds cell. Returns false for off-grid positions.
    pub fn toggle_cell(&mut self, cell: Cell) -> bool {
        if !self.bounds.contains(cell) {
            return false;
        }
        if !self.cells.remove(&cell) {
            self.cells.insert(cell);
        }
        true
    }

    /// Clear the board and stamp `pattern` in the middle; generation resets.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.reset_to(pattern.place_centered(self.bounds));
        log::info!("applied pattern {:?} ({} live cells)", pattern.name, self.cells.len());
    }

    fn reset_to(&mut self, cells: LiveSet) {
        self.cells = cells;
        self.generation = 0;
    }

    fn advance(&mut self) {
        self.cells = engine::advance(&self.cells, self.bounds);
        self.generation += 1;
    }
}

impl SimulationControl for Simulation {
    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("paused = {}", self.paused);
    }

    fn step_once(&mut self) -> Result<()> {
        if !self.paused {
            log::warn!("ignoring single step while running");
            return Err(LifeError::StepWhileRunning);
        }
        self.advance();
        Ok(())
    }

    fn clear(&mut self) {
        self.reset_to(LiveSet::new());
    }

    fn randomize(&mut self, density: f64) {
        let mut rng = self.rng.clone();
        self.randomize_with(density, &mut rng);
        self.rng = rng;
    }

    fn save(&self, path: &Path) -> Result<()> {
        store::save(&self.cells, path).map_err(|source| LifeError::Pattern {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("saved {} cells to {}", self.cells.len(), path.display());
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        let loaded = store::load(path).map_err(|source| LifeError::Pattern {
            path: path.to_path_buf(),
            source,
        })?;
        let (cells, dropped) = grid::clip_to_bounds(loaded, self.bounds);
        if dropped > 0 {
            log::warn!(
                "dropped {dropped} cells outside the {}x{} grid while loading {}",
                self.bounds.width,
                self.bounds.height,
                path.display()
            );
        }
        self.reset_to(cells);
        log::info!("loaded {} cells from {}", self.cells.len(), path.display());
        Ok(())
    }

    fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.advance();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn set(cells: &[(i32, i32)]) -> LiveSet {
        cells.iter().copied().map(Cell::from).collect()
    }

    fn blinker_sim() -> Simulation {
        Simulation::with_cells(GridBounds::new(3, 3), set(&[(1, 0), (1, 1), (1, 2)]))
    }

    #[test]
    fn starts_running_at_generation_zero() {
        let sim = Simulation::new(GridBounds::new(40, 20), 0.2, StdRng::seed_from_u64(1));
        assert!(!sim.is_paused());
        assert_eq!(sim.generation(), 0);
        assert!(sim.cells().iter().all(|&c| sim.bounds().contains(c)));
        assert!(sim.history().is_empty());
    }

    #[test]
    fn seeded_configs_start_identically() {
        let config = SimConfig { seed: Some(99), ..SimConfig::default() };
        assert_eq!(
            Simulation::from_config(&config).cells(),
            Simulation::from_config(&config).cells()
        );
    }

    #[test]
    fn tick_advances_only_while_running() {
        let mut sim = blinker_sim();
        assert!(sim.tick());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.cells(), &set(&[(0, 1), (1, 1), (2, 1)]));

        sim.toggle_pause();
        assert!(!sim.tick());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn step_requires_pause() {
        let mut sim = blinker_sim();
        let before = sim.cells().clone();
        assert!(matches!(sim.step_once(), Err(LifeError::StepWhileRunning)));
        assert_eq!(sim.cells(), &before);
        assert_eq!(sim.generation(), 0);

        sim.toggle_pause();
        sim.step_once().unwrap();
        sim.step_once().unwrap();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.cells(), &before);
    }

    #[test]
    fn clear_keeps_pause_state() {
        let mut sim = blinker_sim();
        sim.toggle_pause();
        sim.step_once().unwrap();
        sim.clear();
        assert!(sim.cells().is_empty());
        assert_eq!(sim.generation(), 0);
        assert!(sim.is_paused());
    }

    #[test]
    fn randomize_resets_generation() {
        let mut sim = blinker_sim();
        sim.tick();
        sim.randomize(1.0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 9);

        let mut rng = StdRng::seed_from_u64(3);
        sim.randomize_with(0.0, &mut rng);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn successive_randomize_calls_draw_fresh_boards() {
        let mut sim = Simulation::new(GridBounds::new(40, 20), 0.5, StdRng::seed_from_u64(4));
        sim.randomize(0.5);
        let first = sim.cells().clone();
        sim.randomize(0.5);
        assert_ne!(sim.cells(), &first);

        // Same seed replays the same sequence of boards.
        let mut replay = Simulation::new(GridBounds::new(40, 20), 0.5, StdRng::seed_from_u64(4));
        replay.randomize(0.5);
        assert_eq!(replay.cells(), &first);
    }

    #[test]
    fn toggle_cell_respects_bounds() {
        let mut sim = Simulation::with_cells(GridBounds::new(4, 4), LiveSet::new());
        assert!(sim.toggle_cell(Cell::new(2, 3)));
        assert!(sim.cells().contains(&Cell::new(2, 3)));
        assert!(sim.toggle_cell(Cell::new(2, 3)));
        assert!(sim.cells().is_empty());
        assert!(!sim.toggle_cell(Cell::new(4, 0)));
        assert!(sim.cells().is_empty());
    }

    #[test]
    fn apply_pattern_resets_generation() {
        let mut sim = blinker_sim();
        sim.tick();
        sim.apply_pattern(patterns::find("Blinker").unwrap());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 3);
    }

    #[test]
    fn samples_pair_rate_with_population() {
        let mut sim = blinker_sim();
        assert!(!sim.record_sample(0.0));
        assert!(sim.record_sample(6.0));
        assert_eq!(sim.history().recent_window(1), (vec![6.0], vec![3]));
    }
}
