// config.rs - Startup parameters, read once at process start

use crate::grid::GridBounds;
use crate::store::DEFAULT_PATTERN_FILE;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WIDTH   : i32 = 40;
pub const DEFAULT_HEIGHT  : i32 = 20;
pub const DEFAULT_FPS     : i32 = 6;
pub const DEFAULT_DENSITY : f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub bounds       : GridBounds,
    pub fps          : i32,
    pub density      : f64,       // Fill probability for randomize
    pub pattern_path : PathBuf,
    pub seed         : Option<u64>, // None draws from OS entropy
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: GridBounds::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            fps: DEFAULT_FPS,
            density: DEFAULT_DENSITY,
            pattern_path: PathBuf::from(DEFAULT_PATTERN_FILE),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Target time between ticks. Non-positive fps means no throttling.
    pub fn frame_interval(&self) -> Duration {
        if self.fps > 0 {
            Duration::from_secs_f64(1.0 / self.fps as f64)
        } else {
            Duration::ZERO
        }
    }
}
