//! Tradeboard Core
//!
//! Deterministic demo-data randomness shared by every dashboard widget:
//! - String key to 32-bit seed hashing
//! - Counter-based generator producing values in [0, 1)
//! - Key composition (`instance::feature[::scope]`)
//! - Parallel per-key batch derivation
//!
//! Server and client renders derive the same generator from the same key,
//! so widget demo data never diverges between them.

pub mod batch;
pub mod generator;
pub mod key;
pub mod math;
pub mod seed;

pub use batch::derive_batch;
pub use generator::{create_generator, seeded_random, Generator};
pub use key::{KeyParseError, SeedKey};
pub use seed::{hash_seed, hash_seed_opt, Seed};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
