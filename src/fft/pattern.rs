//! Weights of the repeating base pattern
//!
//! For output position `k` the base pattern `[0, 1, 0, -1]` is stretched so
//! each element appears `k + 1` times, cycled forever, and the very first
//! weight is dropped. The weight at input position `p` is therefore element
//! `((p + 1) / (k + 1)) % 4` of the base pattern.

pub const BASE_PATTERN: [i8; 4] = [0, 1, 0, -1];

#[inline]
pub fn pattern_weight(k: usize, p: usize) -> i8 {
    BASE_PATTERN[((p + 1) / (k + 1)) % BASE_PATTERN.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Materialized repeat-cycle-skip construction
    fn expanded(k: usize, len: usize) -> Vec<i8> {
        BASE_PATTERN
            .iter()
            .flat_map(|&w| std::iter::repeat(w).take(k + 1))
            .cycle()
            .skip(1)
            .take(len)
            .collect()
    }

    #[test]
    fn matches_expanded_pattern() {
        for k in 0..12 {
            let closed: Vec<i8> = (0..50).map(|p| pattern_weight(k, p)).collect();
            assert_eq!(closed, expanded(k, 50), "k = {k}");
        }
    }

    #[test]
    fn third_row() {
        let row: Vec<i8> = (0..8).map(|p| pattern_weight(2, p)).collect();
        assert_eq!(row, vec![0, 0, 1, 1, 1, 0, 0, 0]);
    }
}
