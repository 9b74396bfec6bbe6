// cli.rs - Command-line flags mapped onto SimConfig

use clap::Parser;
use conway::config::{DEFAULT_DENSITY, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use conway::store::DEFAULT_PATTERN_FILE;
use conway::{GridBounds, SimConfig};
use std::path::PathBuf;

/// Conway's Game of Life on a bounded grid.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Grid columns.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,
    /// Grid rows.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,
    /// Target generations per second while running.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: i32,
    /// Probability that a cell starts alive on randomize.
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,
    /// File used by save (S) and load (L).
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PATTERN_FILE)]
    pub pattern_file: PathBuf,
    /// Seed for reproducible random boards.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<Args> for SimConfig {
    fn from(args: Args) -> Self {
        Self {
            bounds: GridBounds::new(args.width, args.height),
            fps: args.fps,
            density: args.density,
            pattern_path: args.pattern_file,
            seed: args.seed,
        }
    }
}
