//! Test utilities shared across unit tests, integration tests, fuzz targets
//! and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the naive oracles every search result is compared against.

#![doc(hidden)]

use crate::types::Position;

/// Reference answer for linear search: every 1-based index holding `target`.
pub fn oracle_positions<T: PartialEq>(seq: &[T], target: &T) -> Vec<usize> {
    let mut out = Vec::new();
    for i in 0..seq.len() {
        if seq[i] == *target {
            out.push(i + 1);
        }
    }
    out
}

/// 1-based values of a list of positions.
pub fn values(positions: &[Position]) -> Vec<usize> {
    positions.iter().map(|p| p.get()).collect()
}

/// Sorted copy of `seq`.
pub fn ascending<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sorted.sort();
    sorted
}

/// Upper bound on binary search probes for a sequence of length `n`:
/// `floor(log2 n) + 1`, or 0 for the empty sequence.
pub fn max_probes(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        (usize::BITS - n.leading_zeros()) as usize
    }
}

/// Ascending sequence of `n` values with `dup_every`-fold repetition.
pub fn make_sequence(n: usize, dup_every: usize) -> Vec<i64> {
    let step = dup_every.max(1);
    (0..n).map(|i| (i / step) as i64).collect()
}
