// store.rs - Pattern file persistence, one "x,y" cell per line

use crate::error::PatternError;
use crate::grid::{Cell, LiveSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_PATTERN_FILE: &str = "patterns.txt";

/// Write every cell as `x,y\n`, sorted so repeated saves produce identical files.
pub fn write_cells<W: Write>(cells: &LiveSet, mut out: W) -> io::Result<()> {
    let mut sorted: Vec<Cell> = cells.iter().copied().collect();
    sorted.sort_unstable();
    for Cell { x, y } in sorted {
        writeln!(out, "{x},{y}")?;
    }
    out.flush()
}

/// Parse the whole stream. Any malformed line fails the entire read.
pub fn read_cells<R: BufRead>(input: R) -> Result<LiveSet, PatternError> {
    let mut cells = LiveSet::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        cells.insert(parse_line(&line).map_err(|reason| PatternError::Parse {
            line: index + 1,
            reason,
        })?);
    }
    Ok(cells)
}

fn parse_line(line: &str) -> Result<Cell, String> {
    let tokens: Vec<&str> = line.trim().split(',').collect();
    let [x, y] = tokens.as_slice() else {
        return Err(format!("expected 2 comma-separated values, found {}", tokens.len()));
    };
    let parse = |token: &str| {
        token
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate {token:?}: {e}"))
    };
    Ok(Cell::new(parse(*x)?, parse(*y)?))
}

/// Overwrite `path` with the given cells.
pub fn save(cells: &LiveSet, path: &Path) -> Result<(), PatternError> {
    let file = File::create(path)?;
    write_cells(cells, BufWriter::new(file))?;
    log::debug!("wrote {} cells to {}", cells.len(), path.display());
    Ok(())
}

/// Read cells from `path`. A missing file is an empty pattern, not an error.
pub fn load(path: &Path) -> Result<LiveSet, PatternError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} does not exist, loading empty pattern", path.display());
            return Ok(LiveSet::new());
        }
        Err(e) => return Err(e.into()),
    };
    read_cells(BufReader::new(file))
}
