//! Parallel batch derivation
//!
//! Each key gets its own generator on the rayon pool. Nothing is shared
//! between keys, so the result equals deriving them one after another.

use crate::generator::Generator;
use rayon::prelude::*;

/// Draw `draws` values for every key, in input order.
pub fn derive_batch<K>(keys: &[K], draws: usize) -> Vec<Vec<f64>>
where
    K: AsRef<str> + Sync,
{
    tracing::trace!(keys = keys.len(), draws, "deriving generator batch");
    keys.par_iter()
        .map(|key| Generator::from_key(key.as_ref()).take(draws).collect::<Vec<f64>>())
        .collect()
}
