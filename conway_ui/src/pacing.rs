// pacing.rs - Tick scheduling and achieved-rate measurement

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const RATE_WINDOW: usize = 10; // Intervals averaged into one rate

pub struct FrameClock {
    interval  : Duration,
    last_tick : Option<Instant>,
    recent    : VecDeque<Duration>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
            recent: VecDeque::with_capacity(RATE_WINDOW),
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.last_tick
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Time left before the next tick is due.
    pub fn until_due(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Mark a tick at `now` and return the achieved ticks per second,
    /// averaged over recent intervals. 0.0 until an interval has been seen.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if let Some(last) = self.last_tick.replace(now) {
            if self.recent.len() == RATE_WINDOW {
                self.recent.pop_front();
            }
            self.recent.push_back(now.saturating_duration_since(last));
        }
        let total: Duration = self.recent.iter().sum();
        if total.is_zero() {
            0.0
        } else {
            self.recent.len() as f32 / total.as_secs_f32()
        }
    }
}
