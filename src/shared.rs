use std::sync::atomic::Ordering;

use atomic_float::AtomicF64;

/// Latest score, written by the acquisition loop and read by the output loop.
///
/// Only the most recent value is kept. A reader that falls behind sees the
/// newest score, never a torn or stale-mixed one.
#[derive(Debug)]
pub struct ScoreCell {
    score: AtomicF64,
}

impl ScoreCell {
    pub fn new(initial: f64) -> Self {
        Self {
            score: AtomicF64::new(initial),
        }
    }

    pub fn store(&self, score: f64) {
        self.score.store(score, Ordering::Release);
    }

    pub fn load(&self) -> f64 {
        self.score.load(Ordering::Acquire)
    }
}

impl Default for ScoreCell {
    fn default() -> Self {
        Self::new(0.0)
    }
}
