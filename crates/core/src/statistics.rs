//! Per-shape spawn counters.

use crate::types::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    counts: [u32; 7],
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one spawn of `kind`.
    pub fn record(&mut self, kind: ShapeKind) {
        self.counts[kind.index()] += 1;
    }

    pub fn count(&self, kind: ShapeKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Share of `kind` among all spawns, in percent. 0.0 before the first spawn.
    pub fn share_percent(&self, kind: ShapeKind) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.count(kind)) * 100.0 / f64::from(total),
        }
    }

    /// Counts in [`ShapeKind::ALL`] order.
    pub fn counts(&self) -> [u32; 7] {
        self.counts
    }

    pub fn reset(&mut self) {
        self.counts = [0; 7];
    }
}
