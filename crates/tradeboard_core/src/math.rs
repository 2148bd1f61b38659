//! Fixed-width u32 arithmetic
//!
//! Every operation wraps at 32 bits and shifts are logical. The generator and
//! the seed hash go through these helpers so the bit-width rules live in one
//! place.

/// Wrapping 32-bit addition.
#[inline]
pub const fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Wrapping 32-bit multiplication (low 32 bits of the full product).
#[inline]
pub const fn mul(a: u32, b: u32) -> u32 {
    a.wrapping_mul(b)
}

/// Logical right shift. `n` is taken modulo 32.
#[inline]
pub const fn shr(a: u32, n: u32) -> u32 {
    a >> (n & 31)
}

/// Left rotation. `n` is taken modulo 32.
#[inline]
pub const fn rotl(a: u32, n: u32) -> u32 {
    a.rotate_left(n & 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps() {
        assert_eq!(add(u32::MAX, 1), 0);
        assert_eq!(add(0xFFFF_FFF0, 0x20), 0x10);
        assert_eq!(add(0x6D2B_79F5, 0), 0x6D2B_79F5);
    }

    #[test]
    fn mul_keeps_low_bits() {
        assert_eq!(mul(0x8000_0000, 2), 0);
        assert_eq!(mul(u32::MAX, u32::MAX), 1);
        // 3432918353 * 3 = 10298755059 -> mod 2^32
        assert_eq!(mul(3_432_918_353, 3), (10_298_755_059u64 % (1u64 << 32)) as u32);
    }

    #[test]
    fn shr_is_logical() {
        assert_eq!(shr(0x8000_0000, 31), 1);
        assert_eq!(shr(u32::MAX, 15), 0x0001_FFFF);
        assert_eq!(shr(0xDEAD_BEEF, 0), 0xDEAD_BEEF);
    }

    #[test]
    fn rotl_wraps_bits_around() {
        assert_eq!(rotl(0x8000_0001, 1), 0x0000_0003);
        assert_eq!(rotl(0x0000_0001, 13), 0x0000_2000);
        assert_eq!(rotl(0x1234_5678, 0), 0x1234_5678);
        assert_eq!(rotl(0x1234_5678, 32), 0x1234_5678);
        // rotate by 13 == (x << 13) | (x >>> 19)
        let x = 0xCAFE_BABEu32;
        assert_eq!(rotl(x, 13), (x << 13) | (x >> 19));
    }
}
