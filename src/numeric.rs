//! Integer helpers for combining periods

use crate::error::{Result, SimError};

/// Greatest common divisor by Euclid's algorithm, `gcd(a, 0) == a`
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Lowest common multiple, `lcm(0, b) == 0`.
/// Divides before multiplying; a result past `u64::MAX` is an error.
pub fn lcm(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or(SimError::PeriodOverflow { a, b })
}

/// Fold `lcm` over a slice, 1 for an empty slice
pub fn lcm_all(values: &[u64]) -> Result<u64> {
    values.iter().try_fold(1, |acc, &v| lcm(acc, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_small_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn lcm_beyond_f64_safe_range() {
        // 2^53 + 1 is not representable as f64
        let a = (1u64 << 53) + 1;
        assert_eq!(lcm(a, 2), Ok(2 * a));
    }

    #[test]
    fn lcm_overflow_is_reported() {
        let a = u64::MAX;
        let b = u64::MAX - 1;
        assert_eq!(lcm(a, b), Err(SimError::PeriodOverflow { a, b }));
        assert!(lcm_all(&[1 << 40, (1 << 40) - 1, (1 << 40) + 1]).is_err());
    }
}
