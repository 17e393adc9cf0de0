// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compiled-in sequences, targets and scenarios.
//!
//! Nothing is read at runtime. The two standalone programs search the
//! reference sequence for the reference target; the `probe` explorer can
//! pick any named scenario below, and nothing else.

use crate::types::Procedure;
use serde::Serialize;

/// The sequence both standalone programs search.
pub const REFERENCE_SEQUENCE: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// The target both standalone programs look for.
pub const REFERENCE_TARGET: i32 = 5;

/// Unsorted sample used to demonstrate that linear search needs no order.
pub const UNSORTED_SEQUENCE: [i32; 10] = [64, 34, 25, 12, 22, 11, 90, 88, 76, 50];

/// Target for [`UNSORTED_SEQUENCE`].
pub const UNSORTED_TARGET: i32 = 22;

/// `const` sortedness check, usable in compile-time assertions.
pub const fn is_ascending_const(seq: &[i32]) -> bool {
    let mut i = 1;
    while i < seq.len() {
        if seq[i - 1] > seq[i] {
            return false;
        }
        i += 1;
    }
    true
}

// The reference sequence feeds binary search, so it must be ascending.
// If this fails, the crate won't build.
const _: () = assert!(is_ascending_const(&REFERENCE_SEQUENCE));
const _: () = assert!(!is_ascending_const(&UNSORTED_SEQUENCE));

/// A named, fixed search problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub sequence: &'static [i32],
    pub target: i32,
}

impl Scenario {
    /// Binary search only makes sense on ascending sequences.
    pub fn supports(&self, procedure: Procedure) -> bool {
        match procedure {
            Procedure::Linear => true,
            Procedure::Binary => is_ascending_const(self.sequence),
        }
    }
}

/// The scenario the standalone programs run.
pub const REFERENCE: Scenario = Scenario {
    name: "reference",
    description: "1..=10, target present once",
    sequence: &REFERENCE_SEQUENCE,
    target: REFERENCE_TARGET,
};

/// Every scenario the explorer knows, in display order.
pub const SCENARIOS: &[Scenario] = &[
    REFERENCE,
    Scenario {
        name: "absent",
        description: "1..=10, target above every element",
        sequence: &REFERENCE_SEQUENCE,
        target: 11,
    },
    Scenario {
        name: "duplicates",
        description: "three equal elements, all matching",
        sequence: &[1, 1, 1],
        target: 1,
    },
    Scenario {
        name: "empty",
        description: "empty sequence",
        sequence: &[],
        target: 5,
    },
    Scenario {
        name: "unsorted",
        description: "unsorted sample, linear search only",
        sequence: &UNSORTED_SEQUENCE,
        target: UNSORTED_TARGET,
    },
];

/// Look up a scenario by name.
pub fn scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

/// Names of all scenarios, for help text and error messages.
pub fn scenario_names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|s| s.name).collect()
}
