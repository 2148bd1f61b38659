//! Seed hashing
//!
//! Maps an arbitrary string key to a 32-bit seed. The hash walks the key's
//! UTF-16 code units so that non-ASCII keys agree with browser-side renders.

use crate::math;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Accumulator start value, xor-ed with the key length.
const HASH_INIT: u32 = 1_779_033_703;
/// Odd multiplier applied after each code unit.
const HASH_MUL: u32 = 3_432_918_353;
const HASH_ROT: u32 = 13;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// 32-bit generator seed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u32);

impl Seed {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Hash a string key into a seed. Total over all strings.
    pub fn from_key(key: &str) -> Self {
        hash_seed(key)
    }

    /// Wrap any integer into u32 range (modulo 2^32).
    pub const fn from_i64(value: i64) -> Self {
        Self(value as u32)
    }

    /// Normalize a floating-point seed the way browser runtimes coerce
    /// numbers to unsigned 32-bit integers.
    ///
    /// NaN and infinities become 0. Everything else is truncated toward zero
    /// and reduced modulo 2^32, so negative values wrap around.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0);
        }
        Self(value.trunc().rem_euclid(TWO_POW_32) as u32)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Seed> for u32 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// Hash `key` into a [`Seed`].
///
/// The accumulator starts at a fixed constant xor the key length (in UTF-16
/// code units). Each code unit is xor-ed in, multiplied by an odd constant
/// and rotated left by 13 bits.
pub fn hash_seed(key: &str) -> Seed {
    let len = key.encode_utf16().count() as u32;
    let mut h = HASH_INIT ^ len;
    for unit in key.encode_utf16() {
        h = math::mul(h ^ u32::from(unit), HASH_MUL);
        h = math::rotl(h, HASH_ROT);
    }
    Seed(h)
}

/// Hash an optional key. A missing key hashes like the empty string.
pub fn hash_seed_opt(key: Option<&str>) -> Seed {
    hash_seed(key.unwrap_or_default())
}
