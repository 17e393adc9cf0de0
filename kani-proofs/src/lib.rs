// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the binary search primitives.
//!
//! This standalone crate extracts the midpoint and halving loop and proves
//! them with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No overflow**: `midpoint` never overflows for any `usize` pair
//! 2. **Bounds**: `low <= midpoint(low, high) <= high`
//! 3. **No panics**: the halving loop never indexes out of bounds, sorted or not
//! 4. **Correctness**: on sorted input, found iff present

/// Largest array the bounded proofs explore.
pub const MAX_LEN: usize = 6;

// ============================================================================
// HALVING (mirrors src/search/binary.rs without tracing)
// ============================================================================

/// Midpoint of the inclusive window `[low, high]`.
pub fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// 0-based index of a match, or `None`.
pub fn halve(seq: &[i32], target: i32) -> Option<usize> {
    let mut low = 0;
    let mut high = seq.len().checked_sub(1)?;

    while low <= high {
        let mid = midpoint(low, high);
        if seq[mid] == target {
            return Some(mid);
        } else if seq[mid] < target {
            low = mid + 1;
        } else {
            high = mid.checked_sub(1)?;
        }
    }

    None
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify midpoint never overflows and stays in the window.
    #[kani::proof]
    fn verify_midpoint_in_bounds() {
        let low: usize = kani::any();
        let high: usize = kani::any();
        kani::assume(low <= high);

        let mid = midpoint(low, high);

        kani::assert(low <= mid, "midpoint must not be left of low");
        kani::assert(mid <= high, "midpoint must not be right of high");
    }

    /// Verify midpoint equals the exact floor average, even where the
    /// naive `(low + high) / 2` would overflow.
    #[kani::proof]
    fn verify_midpoint_exact() {
        let low: usize = kani::any();
        let high: usize = kani::any();
        kani::assume(low <= high);

        let exact = ((low as u128 + high as u128) / 2) as usize;
        kani::assert(midpoint(low, high) == exact, "midpoint must be the floor average");
    }

    /// Verify the halving loop never panics on arbitrary (unsorted) input.
    #[kani::proof]
    #[kani::unwind(8)] // log2(MAX_LEN) + slack
    fn verify_halve_no_panic() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0i32; MAX_LEN];
        for i in 0..len {
            buf[i] = kani::any();
        }
        let target: i32 = kani::any();

        if let Some(i) = halve(&buf[..len], target) {
            kani::assert(i < len, "reported index must be in bounds");
            kani::assert(buf[i] == target, "reported index must hold the target");
        }
    }

    /// Verify found iff present on sorted input.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_halve_complete_on_sorted() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0i32; MAX_LEN];
        for i in 0..len {
            buf[i] = kani::any();
            if i > 0 {
                kani::assume(buf[i - 1] <= buf[i]);
            }
        }
        let target: i32 = kani::any();
        let seq = &buf[..len];

        let present = seq.iter().any(|&v| v == target);
        kani::assert(
            halve(seq, target).is_some() == present,
            "sorted input: found iff present",
        );
    }

    /// Verify the empty sequence reports absence.
    #[kani::proof]
    fn verify_halve_empty() {
        let target: i32 = kani::any();
        kani::assert(halve(&[], target).is_none(), "empty input must report absence");
    }
}
