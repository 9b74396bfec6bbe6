// lib.rs - Conway's Game of Life on a bounded grid

pub mod config;      // Startup parameters
pub mod controller;  // Simulation state and operations
pub mod engine;      // Generation step
pub mod error;
pub mod grid;        // Cell / LiveSet / GridBounds
pub mod history;     // Rolling frame-rate and population samples
pub mod patterns;    // Built-in seed patterns
pub mod store;       // Pattern file save/load

pub use config::SimConfig;
pub use controller::{Simulation, SimulationControl};
pub use engine::advance;
pub use error::{LifeError, PatternError};
pub use grid::{Cell, GridBounds, LiveSet};
pub use history::{HISTORY_CAPACITY, HistoryTracker};
