//! Direct phase-by-phase digit transform
//!
//! Quadratic in the sequence length per phase, used for short inputs and as
//! the reference the accelerated path is checked against.

use tracing::debug;

use super::pattern::pattern_weight;
use crate::error::{Result, SimError};

/// Parse a string of decimal digits, surrounding whitespace is ignored
pub fn parse_digits(s: &str) -> Result<Vec<u8>> {
    s.trim()
        .chars()
        .enumerate()
        .map(|(c, chr)| {
            chr.to_digit(10)
                .map(|d| d as u8)
                .ok_or(SimError::InvalidDigit { column: c + 1, found: chr })
        })
        .collect()
}

/// Concatenate digits left to right
pub fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// One phase: every output digit is computed from the untouched `input`
pub fn phase(input: &[u8], output: &mut [u8]) {
    debug_assert_eq!(input.len(), output.len());
    for (k, out) in output.iter_mut().enumerate() {
        // weights before position k are always zero
        let sum: i64 = input
            .iter()
            .enumerate()
            .skip(k)
            .map(|(p, &d)| i64::from(d) * i64::from(pattern_weight(k, p)))
            .sum();
        *out = (sum.abs() % 10) as u8;
    }
}

/// Apply `phases` phases to `digits` in place
pub fn apply_phases(digits: &mut Vec<u8>, phases: usize) {
    let mut next = vec![0u8; digits.len()];
    for i in 0..phases {
        phase(digits, &mut next);
        std::mem::swap(digits, &mut next);
        debug!(phase = i + 1, "naive phase done");
    }
}

/// Run the naive transform and return the first `message_length` digits
pub fn fft(input: &[u8], phases: usize, message_length: usize) -> Result<String> {
    if input.len() < message_length {
        return Err(SimError::SequenceTooShort { len: input.len(), required: message_length });
    }
    let mut digits = input.to_vec();
    apply_phases(&mut digits, phases);
    Ok(render_digits(&digits[..message_length]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_phase_example() {
        let input = parse_digits("12345678").unwrap();
        let mut out = vec![0; input.len()];
        phase(&input, &mut out);
        assert_eq!(render_digits(&out), "48226158");
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            parse_digits("12a4"),
            Err(SimError::InvalidDigit { column: 3, found: 'a' })
        );
    }
}
