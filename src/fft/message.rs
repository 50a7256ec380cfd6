//! Message decoding from the replicated sequence
//!
//! For an output position `k` in the back half of a sequence of length `n`,
//! the weights are zero before `k` and one from `k` up to `2k + 1 >= n`.
//! A phase then reduces to a suffix sum, computed in one backward pass.
//! This does not hold for positions in the front half.

use tracing::debug;

use super::transform::render_digits;
use crate::error::{Result, SimError};

/// Read the first `offset_length` digits as a decimal number
pub fn message_offset(digits: &[u8], offset_length: usize) -> Result<usize> {
    if digits.len() < offset_length {
        return Err(SimError::SequenceTooShort { len: digits.len(), required: offset_length });
    }
    digits[..offset_length]
        .iter()
        .try_fold(0usize, |acc, &d| acc.checked_mul(10)?.checked_add(d as usize))
        .ok_or(SimError::OffsetOverflow { offset_length })
}

/// The input repeated `multiplier` times, starting at `offset`.
/// Fails if `offset` is not in the second half of the replicated length.
pub fn extended_input(digits: &[u8], multiplier: usize, offset: usize) -> Result<Vec<u8>> {
    let total = digits.len() * multiplier;
    if offset.saturating_mul(2) < total || offset > total {
        return Err(SimError::OffsetNotInSecondHalf { offset, total });
    }
    Ok((offset..total).map(|i| digits[i % digits.len()]).collect())
}

/// One phase over a back-half tail: each digit becomes the suffix sum mod 10
pub fn reverse_cumulative_phase(tail: &mut [u8]) {
    let mut acc = 0u8;
    for d in tail.iter_mut().rev() {
        acc = (acc + *d) % 10;
        *d = acc;
    }
}

/// Decode the message hidden at the offset of the replicated input
pub fn decode_message(
    input: &[u8],
    phases: usize,
    offset_length: usize,
    multiplier: usize,
    message_length: usize,
) -> Result<String> {
    let offset = message_offset(input, offset_length)?;
    let mut tail = extended_input(input, multiplier, offset)?;
    if tail.len() < message_length {
        return Err(SimError::SequenceTooShort { len: tail.len(), required: message_length });
    }
    debug!(offset, tail = tail.len(), "accelerated transform");

    for _ in 0..phases {
        reverse_cumulative_phase(&mut tail);
    }
    Ok(render_digits(&tail[..message_length]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_from_leading_digits() {
        assert_eq!(message_offset(&[0, 3, 0, 3, 6, 7, 3, 2], 7).unwrap(), 303673);
    }

    #[test]
    fn oversized_offset_is_refused() {
        let nines = [9u8; 40];
        assert_eq!(
            message_offset(&nines, 40),
            Err(SimError::OffsetOverflow { offset_length: 40 })
        );
    }

    #[test]
    fn front_half_offset_is_refused() {
        let digits = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(
            extended_input(&digits, 2, 3),
            Err(SimError::OffsetNotInSecondHalf { offset: 3, total: 16 })
        );
        assert_eq!(extended_input(&digits, 2, 8).unwrap(), digits.to_vec());
    }

    #[test]
    fn suffix_sum_phase() {
        let mut tail = [5, 6, 7, 8];
        reverse_cumulative_phase(&mut tail);
        assert_eq!(tail, [6, 1, 5, 8]);
    }
}
