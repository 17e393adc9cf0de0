// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear search over the reference sequence.
//!
//! Prints the 1-based position of every element equal to the reference
//! target, one per line, or `-1` if there is none. Takes no arguments.

use probe::fixtures::{REFERENCE_SEQUENCE, REFERENCE_TARGET};
use probe::run_linear;
use std::io::{self, Write};

fn main() {
    probe::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run_linear(&REFERENCE_SEQUENCE, &REFERENCE_TARGET, &mut out).and_then(|matches| {
        tracing::debug!(matches, "linear search finished");
        out.flush()
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
