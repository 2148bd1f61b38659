//! Tradeboard Metrics - draw statistics and named counters
//!
//! [`DrawStats`] is always available: the uniformity check depends on it.
//! Named counters only exist with the `metrics` feature and compile down to
//! no-op stubs otherwise.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable named counters (default: disabled)

mod draw_stats;
#[cfg(feature = "metrics")]
mod counter;

pub use draw_stats::DrawStats;
#[cfg(feature = "metrics")]
pub use counter::Counter;

/// Execute code only when metrics are enabled
#[macro_export]
macro_rules! metrics {
    ($($tt:tt)*) => {
        #[cfg(feature = "metrics")]
        {
            $($tt)*
        }
    };
}

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default)]
pub struct Counter;

#[cfg(not(feature = "metrics"))]
impl Counter {
    pub fn new() -> Self { Self }
    pub fn increment(&mut self, _name: &str, _value: usize) {}
    pub fn get(&self, _name: &str) -> usize { 0 }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> { std::iter::empty() }
}
