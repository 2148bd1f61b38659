//! Running summary over generator draws

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawStats {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl DrawStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn record(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of recorded draws, 0.0 when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// `(min, max)`, or `None` when nothing was recorded.
    pub fn range(&self) -> Option<(f64, f64)> {
        (self.count > 0).then_some((self.min, self.max))
    }

    /// True when every recorded draw lies in `[0, 1)`. Vacuously true when empty.
    pub fn all_in_unit_interval(&self) -> bool {
        self.range().map_or(true, |(min, max)| min >= 0.0 && max < 1.0)
    }
}

impl Default for DrawStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for DrawStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.record(value);
        }
    }
}
