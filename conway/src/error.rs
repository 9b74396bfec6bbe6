// error.rs - Error types for pattern files and controller operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading or writing the pattern line format.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Line is not two comma-separated integers. `line` is 1-based.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Errors reported by the simulation controller.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Save or load of a pattern file failed; simulation state is unchanged.
    #[error("pattern file {}: {source}", .path.display())]
    Pattern {
        path: PathBuf,
        #[source]
        source: PatternError,
    },

    #[error("cannot single-step while the simulation is running")]
    StepWhileRunning,
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
