// history.rs - Rolling frame-rate and population samples

use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 100;

/// Two FIFO buffers filled in lockstep: index `i` in each refers to the same frame.
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    capacity    : usize,
    rates       : VecDeque<f32>,
    populations : VecDeque<usize>,
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl HistoryTracker {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            rates: VecDeque::with_capacity(capacity),
            populations: VecDeque::with_capacity(capacity),
        }
    }

    /// Append one observation unless `rate` is not strictly positive.
    /// Returns whether the sample was accepted; a zero-capacity tracker accepts but retains nothing.
    pub fn record_sample(&mut self, rate: f32, population: usize) -> bool {
        // NaN fails this comparison too
        if !(rate > 0.0) {
            return false;
        }
        self.rates.push_back(rate);
        self.populations.push_back(population);
        while self.rates.len() > self.capacity {
            self.rates.pop_front();
            self.populations.pop_front();
        }
        true
    }

    /// The last `min(k, len)` samples from each buffer, oldest first.
    pub fn recent_window(&self, k: usize) -> (Vec<f32>, Vec<usize>) {
        let skip = self.len().saturating_sub(k);
        (
            self.rates.iter().skip(skip).copied().collect(),
            self.populations.iter().skip(skip).copied().collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn rates(&self) -> impl Iterator<Item = f32> + '_ {
        self.rates.iter().copied()
    }

    pub fn populations(&self) -> impl Iterator<Item = usize> + '_ {
        self.populations.iter().copied()
    }
}
