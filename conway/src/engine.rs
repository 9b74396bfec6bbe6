// engine.rs - B3/S23 generation step over a sparse live set

use crate::grid::{Cell, GridBounds, LiveSet};
use std::collections::HashMap;

/// Tally of live neighbors for every cell adjacent to a live cell.
///
/// Off-grid positions are tallied too; only cells with at least one live
/// neighbor appear as keys.
pub fn neighbor_counts(live: &LiveSet) -> HashMap<Cell, u8> {
    let mut counts = HashMap::with_capacity(live.len() * 8);
    for cell in live {
        for neighbor in cell.neighbors() {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }
    counts
}

/// Compute the next generation. Pure: `live` is not modified.
///
/// Cost is proportional to the number of live cells, not the grid area.
/// Candidates outside `bounds` are counted but never returned.
pub fn advance(live: &LiveSet, bounds: GridBounds) -> LiveSet {
    neighbor_counts(live)
        .into_iter()
        .filter(|&(cell, count)| match (live.contains(&cell), count) {
            (true, 2) | (true, 3) => true,   // Survival
            (false, 3)            => true,   // Birth
            _                     => false,  // Death or stays dead
        })
        .map(|(cell, _)| cell)
        .filter(|&cell| bounds.contains(cell))
        .collect()
}
