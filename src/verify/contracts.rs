// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on search results.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Output only**: they check what a search reports, never whether the
//!    input was sorted. Binary search on unsorted input is unspecified, not
//!    a contract violation.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract              | Property                                          |
//! |-----------------------|---------------------------------------------------|
//! | `check_linear_hits`   | every hit holds the target, hits strictly ascend  |
//! | `check_binary_hit`    | a reported hit holds the target                   |
//! | `check_window`        | `low <= mid <= high < len` for every probe        |

use crate::types::Position;

/// Check a linear-search result.
///
/// # Panics (debug builds only)
/// Panics if a position is out of bounds, does not hold `target`, or if the
/// positions are not strictly ascending.
#[inline]
pub fn check_linear_hits<T: PartialEq>(seq: &[T], target: &T, hits: &[Position]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (i, hit) in hits.iter().enumerate() {
        // INVARIANT: every reported position is in bounds and holds the target
        debug_assert!(
            hit.index() < seq.len(),
            "Contract violation: linear hit {} out of bounds (len {})",
            hit,
            seq.len()
        );
        debug_assert!(
            seq.get(hit.index()) == Some(target),
            "Contract violation: linear hit {} does not hold the target",
            hit
        );

        // INVARIANT: positions strictly ascend, so each match appears once
        if i > 0 {
            debug_assert!(
                hits[i - 1] < *hit,
                "Contract violation: linear hits not ascending at {}: {} then {}",
                i,
                hits[i - 1],
                hit
            );
        }
    }
}

/// Check a binary-search result.
///
/// # Panics (debug builds only)
/// Panics if a reported position is out of bounds or does not hold `target`.
#[inline]
pub fn check_binary_hit<T: PartialEq>(seq: &[T], target: &T, found: Option<Position>) {
    if let Some(hit) = found {
        // INVARIANT: a reported position holds the target, sorted input or not
        debug_assert!(
            seq.get(hit.index()) == Some(target),
            "Contract violation: binary hit {} does not hold the target",
            hit
        );
    }
}

/// Check one halving window.
///
/// # Panics (debug builds only)
/// Panics unless `low <= mid <= high < len`.
#[inline]
pub fn check_window(low: usize, mid: usize, high: usize, len: usize) {
    // INVARIANT: the probe stays inside the window and the window inside the slice
    debug_assert!(
        low <= mid && mid <= high && high < len,
        "Contract violation: probe window low={} mid={} high={} len={}",
        low,
        mid,
        high,
        len
    );
}
