// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run a procedure and print its result lines.
//!
//! Output format is one decimal 1-based position per line, or a single
//! `-1` line when nothing matched. Linear search writes each match as soon
//! as the scan reaches it; binary search writes exactly one line.

use crate::search::{binary_search, linear_positions};
use crate::types::{Position, NOT_FOUND};
use std::fmt::Display;
use std::io::{self, Write};

/// Scan `seq` and print every match, or `-1`.
///
/// Returns the number of matches printed.
pub fn run_linear<T, W>(seq: &[T], target: &T, out: &mut W) -> io::Result<usize>
where
    T: PartialEq,
    W: Write,
{
    let mut matches = 0;
    for position in linear_positions(seq, target) {
        writeln!(out, "{}", position)?;
        matches += 1;
    }
    if matches == 0 {
        writeln!(out, "{}", NOT_FOUND)?;
    }
    Ok(matches)
}

/// Halve the ascending `seq` and print one match, or `-1`.
///
/// Sortedness is the caller's obligation, as for [`binary_search`].
pub fn run_binary<T, W>(seq: &[T], target: &T, out: &mut W) -> io::Result<Option<Position>>
where
    T: Ord,
    W: Write,
{
    let found = binary_search(seq, target);
    write_line(out, found)?;
    Ok(found)
}

/// Print one position or the sentinel.
pub fn write_line<W: Write>(out: &mut W, position: Option<Position>) -> io::Result<()> {
    match position {
        Some(p) => writeln!(out, "{}", p),
        None => writeln!(out, "{}", NOT_FOUND),
    }
}

/// Result lines for a list of positions, `["-1"]` when empty.
pub fn result_lines<P: Display>(positions: &[P]) -> Vec<String> {
    if positions.is_empty() {
        vec![NOT_FOUND.to_string()]
    } else {
        positions.iter().map(ToString::to_string).collect()
    }
}
