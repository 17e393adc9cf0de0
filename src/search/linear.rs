// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Front-to-back scan reporting every match.
//!
//! Unlike binary search, the scan does not stop at the first hit: every
//! index holding the target is reported once, in ascending order. No
//! ordering of the sequence is required.

use crate::types::{Position, Step, Trace};
use crate::verify::contracts::check_linear_hits;

/// Lazily yield the 1-based position of every element equal to `target`.
///
/// Positions come out in ascending order, as soon as each match is scanned.
pub fn linear_positions<'a, T: PartialEq>(
    seq: &'a [T],
    target: &'a T,
) -> impl Iterator<Item = Position> + 'a {
    seq.iter()
        .enumerate()
        .filter(move |(_, value)| *value == target)
        .map(|(index, _)| {
            tracing::trace!(index, "match");
            Position::from_index(index)
        })
}

/// Every 1-based position of `target` in `seq`, ascending.
///
/// An empty result means absent (printed as `-1`).
///
/// ```
/// use probe::{linear_search, Position};
///
/// let hits = linear_search(&[1, 1, 1], &1);
/// let values: Vec<usize> = hits.iter().map(|p| p.get()).collect();
/// assert_eq!(values, vec![1, 2, 3]);
///
/// assert!(linear_search(&[1, 2, 3], &4).is_empty());
/// ```
pub fn linear_search<T: PartialEq>(seq: &[T], target: &T) -> Vec<Position> {
    let hits: Vec<Position> = linear_positions(seq, target).collect();
    check_linear_hits(seq, target, &hits);
    tracing::debug!(len = seq.len(), matches = hits.len(), "linear search done");
    hits
}

/// Position of the first match only, stopping the scan there.
pub fn linear_search_first<T: PartialEq>(seq: &[T], target: &T) -> Option<Position> {
    linear_positions(seq, target).next()
}

/// Like [`linear_search`], also recording one step per scanned element.
///
/// The scan never stops early, so the trace always has `seq.len()` steps.
pub fn linear_trace<T: PartialEq>(seq: &[T], target: &T) -> Trace {
    let mut trace = Trace {
        positions: Vec::new(),
        steps: Vec::with_capacity(seq.len()),
    };
    for (index, value) in seq.iter().enumerate() {
        let matched = value == target;
        trace.steps.push(Step::Scan { index, matched });
        if matched {
            trace.positions.push(Position::from_index(index));
        }
    }
    check_linear_hits(seq, target, &trace.positions);
    trace
}

/// Parallel [`linear_search`]. Same positions, same ascending order.
///
/// rayon's `collect` into a `Vec` keeps the input order, so no sort is needed.
#[cfg(feature = "parallel")]
pub fn linear_search_par<T>(seq: &[T], target: &T) -> Vec<Position>
where
    T: PartialEq + Sync,
{
    use rayon::prelude::*;

    let hits: Vec<Position> = seq
        .par_iter()
        .enumerate()
        .filter(|(_, value)| *value == target)
        .map(|(index, _)| Position::from_index(index))
        .collect();
    check_linear_hits(seq, target, &hits);
    tracing::debug!(len = seq.len(), matches = hits.len(), "parallel linear search done");
    hits
}
