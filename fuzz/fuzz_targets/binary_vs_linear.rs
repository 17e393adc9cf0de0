// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: binary search against the linear scan on sorted input.
//!
//! The linear scan is trivially correct, so it is the oracle. Once the
//! fuzzer's sequence is sorted, binary search must find a position iff the
//! scan finds any, and its position must be one of the scan's.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use probe::testing::max_probes;
use probe::{binary_search, binary_trace, linear_search};

#[derive(Arbitrary, Debug)]
struct Input {
    seq: Vec<i16>,
    target: i16,
}

fuzz_target!(|input: Input| {
    let mut seq = input.seq;
    seq.sort_unstable();
    let target = input.target;

    let all = linear_search(&seq, &target);
    let one = binary_search(&seq, &target);

    // INVARIANT 1: found iff present
    assert_eq!(one.is_some(), !all.is_empty(), "presence disagrees for {:?}", target);

    // INVARIANT 2: the binary hit is one of the linear hits
    if let Some(hit) = one {
        assert!(all.contains(&hit), "binary hit {} not a linear hit", hit);
    }

    // INVARIANT 3: logarithmic probe count
    let trace = binary_trace(&seq, &target);
    assert!(trace.comparisons() <= max_probes(seq.len()));
});
