// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over the reference sequence.
//!
//! Prints one 1-based position of the reference target, or `-1` if it is
//! absent. Takes no arguments. The reference sequence is checked ascending
//! at compile time (see `probe::fixtures`).

use probe::fixtures::{REFERENCE_SEQUENCE, REFERENCE_TARGET};
use probe::run_binary;
use std::io::{self, Write};

fn main() {
    probe::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run_binary(&REFERENCE_SEQUENCE, &REFERENCE_TARGET, &mut out).and_then(|found| {
        tracing::debug!(found = found.is_some(), "binary search finished");
        out.flush()
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
