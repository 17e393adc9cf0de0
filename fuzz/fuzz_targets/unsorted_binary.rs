// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: binary search on arbitrary, usually unsorted, input.
//!
//! The result is unspecified when the precondition is broken, but the
//! search must still terminate, stay in bounds, and never report a
//! position that does not hold the target.

#![no_main]

use libfuzzer_sys::fuzz_target;
use probe::binary_search;

fuzz_target!(|data: &[u8]| {
    let Some((&target, seq)) = data.split_last() else {
        return;
    };

    if let Some(hit) = binary_search(seq, &target) {
        assert_eq!(seq[hit.index()], target);
    }
});
