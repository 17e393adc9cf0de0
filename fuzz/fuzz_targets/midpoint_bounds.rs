// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: the overflow-safe midpoint.
//!
//! `(low + high) / 2` overflows near `usize::MAX`; `low + (high - low) / 2`
//! must not, and must stay inside the window.

#![no_main]

use libfuzzer_sys::fuzz_target;
use probe::midpoint;

fuzz_target!(|bounds: (usize, usize)| {
    let (a, b) = bounds;
    let (low, high) = if a <= b { (a, b) } else { (b, a) };

    let mid = midpoint(low, high);
    assert!(low <= mid && mid <= high);

    let exact = ((low as u128 + high as u128) / 2) as usize;
    assert_eq!(mid, exact);
});
