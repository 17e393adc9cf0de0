// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interval-halving search over an ascending sequence.
//!
//! The window `[low, high]` is inclusive. Each probe compares `seq[mid]`
//! against the target and either stops, drops the left half, or drops the
//! right half. Exactly one position is reported even when the target occurs
//! several times: the first one the halving path lands on, which is not
//! necessarily the lowest index.
//!
//! # Precondition
//!
//! `seq` must be sorted ascending (duplicates allowed). This is the caller's
//! obligation and is never checked here. On unsorted input the result is
//! unspecified, but the search still terminates and never indexes out of
//! bounds. Use [`crate::verify::Ascending`] to check order once up front.
//!
//! # Unsigned bounds
//!
//! With `usize` bounds, `high = n - 1` for `n = 0` and `high = mid - 1` for
//! `mid = 0` would wrap. Both situations mean the window became empty, so
//! they end the loop exactly like `low > high` does.

use crate::types::{Direction, Position, Step, Trace};
use crate::verify::contracts::{check_binary_hit, check_window};
use std::cmp::Ordering;

/// Midpoint of the inclusive window `[low, high]`.
///
/// Written as `low + (high - low) / 2` rather than `(low + high) / 2`: the
/// sum can overflow for large bounds, the difference cannot.
///
/// INVARIANT: `low <= midpoint(low, high) <= high` whenever `low <= high`.
#[inline]
pub fn midpoint(low: usize, high: usize) -> usize {
    debug_assert!(low <= high, "midpoint requires low <= high");
    low + (high - low) / 2
}

/// Find a 1-based position of `target` in the ascending sequence `seq`.
///
/// Returns `None` when the target is absent (printed as `-1`).
///
/// ```
/// use probe::{binary_search, Position};
///
/// let seq = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(binary_search(&seq, &5), Position::new(5));
/// assert_eq!(binary_search(&seq, &11), None);
///
/// // Duplicates: the first probe (mid = 1) already matches.
/// assert_eq!(binary_search(&[1, 1, 1], &1), Position::new(2));
/// ```
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<Position> {
    let found = halve(seq, target, |_| {});
    check_binary_hit(seq, target, found);
    tracing::debug!(len = seq.len(), position = ?found.map(Position::get), "binary search done");
    found
}

/// Like [`binary_search`], also recording every probe.
///
/// The trace has at most `floor(log2 n) + 1` steps.
pub fn binary_trace<T: Ord>(seq: &[T], target: &T) -> Trace {
    let mut steps = Vec::new();
    let found = halve(seq, target, |step| steps.push(step));
    check_binary_hit(seq, target, found);
    Trace {
        positions: found.into_iter().collect(),
        steps,
    }
}

/// The halving loop. `on_step` sees every probe in order.
fn halve<T, F>(seq: &[T], target: &T, mut on_step: F) -> Option<Position>
where
    T: Ord,
    F: FnMut(Step),
{
    let mut low = 0;
    let mut high = seq.len().checked_sub(1)?;

    while low <= high {
        let mid = midpoint(low, high);
        check_window(low, mid, high, seq.len());
        let direction = match seq[mid].cmp(target) {
            Ordering::Equal => Direction::Found,
            Ordering::Less => Direction::Right,
            Ordering::Greater => Direction::Left,
        };
        tracing::trace!(low, high, mid, ?direction, "probe");
        on_step(Step::Halve {
            low,
            high,
            mid,
            direction,
        });

        match direction {
            Direction::Found => return Some(Position::from_index(mid)),
            // mid <= high < seq.len(), so mid + 1 cannot overflow
            Direction::Right => low = mid + 1,
            Direction::Left => match mid.checked_sub(1) {
                Some(next) => high = next,
                None => break,
            },
        }
    }

    None
}
