//! Sampling service
//!
//! Turns key strings into serializable draw reports and runs the uniformity
//! sanity check used by the CLI.

use crate::settings::{SamplerSettings, UniformitySettings};
use serde::Serialize;
use thiserror::Error;
use tradeboard_core::{Generator, Seed};
use tradeboard_metrics::{Counter, DrawStats};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("requested {requested} draws, limit is {limit}")]
    TooManyDraws { requested: usize, limit: usize },
}

/// Draws for one key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    pub key: String,
    pub seed: Seed,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformityReport {
    pub key: String,
    pub draws: usize,
    pub stats: DrawStats,
    pub passed: bool,
}

pub struct Sampler {
    settings: SamplerSettings,
    draws: Counter,
}

impl Sampler {
    pub fn new(settings: SamplerSettings) -> Self {
        Self {
            settings,
            draws: Counter::new(),
        }
    }

    /// Draw `draws` values (or the configured default) for `key`.
    pub fn sample(&mut self, key: &str, draws: Option<usize>) -> Result<SampleReport, SampleError> {
        let seed = Seed::from_key(key);
        let values = self.sample_seed(seed, draws)?;
        self.record(key, values.len());
        Ok(SampleReport {
            key: key.to_string(),
            seed,
            values,
        })
    }

    /// Draw from an explicit seed, bypassing key hashing.
    pub fn sample_seed(&self, seed: Seed, draws: Option<usize>) -> Result<Vec<f64>, SampleError> {
        let requested = draws.unwrap_or(self.settings.default_draws);
        self.ensure_within_limit(requested)?;
        tracing::debug!(%seed, requested, "sampling");
        Ok(Generator::new(seed).take(requested).collect())
    }

    /// Mean within the configured bounds and every draw in `[0, 1)`.
    ///
    /// The draw count is bounded by the sampler's `max_draws` like any sample.
    pub fn check_uniformity(
        &mut self,
        key: &str,
        settings: &UniformitySettings,
    ) -> Result<UniformityReport, SampleError> {
        self.ensure_within_limit(settings.draws)?;
        let mut stats = DrawStats::new();
        stats.extend(Generator::from_key(key).take(settings.draws));
        self.record(key, settings.draws);

        let mean = stats.mean();
        let passed = stats.all_in_unit_interval()
            && (settings.mean_low..=settings.mean_high).contains(&mean);
        if passed {
            tracing::debug!(key, mean, "uniformity check passed");
        } else {
            tracing::warn!(key, mean, range = ?stats.range(), "uniformity check failed");
        }

        Ok(UniformityReport {
            key: key.to_string(),
            draws: settings.draws,
            stats,
            passed,
        })
    }

    /// Per-key draw totals (empty without the `metrics` feature).
    pub fn draw_counts(&self) -> &Counter {
        &self.draws
    }

    fn ensure_within_limit(&self, requested: usize) -> Result<(), SampleError> {
        if requested > self.settings.max_draws {
            return Err(SampleError::TooManyDraws {
                requested,
                limit: self.settings.max_draws,
            });
        }
        Ok(())
    }

    fn record(&mut self, key: &str, draws: usize) {
        self.draws.increment(key, draws);
        tradeboard_metrics::metrics! {
            tracing::trace!(key, total = self.draws.get(key), "draw counter");
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(SamplerSettings::default())
    }
}
