// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared by both search procedures.
//!
//! Positions are 1-based everywhere they leave the library: printed lines,
//! JSON reports, and the `Position` type itself. The 0-based index only
//! exists inside the search loops. Absence is `None` or an empty list in
//! the API and `-1` once printed.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Printed in place of a position when the target is absent.
pub const NOT_FOUND: i64 = -1;

/// A 1-based position in a sequence.
///
/// Backed by `NonZeroUsize`, so a `Position` can never be confused with the
/// `-1` sentinel or with a raw 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Position(NonZeroUsize);

impl Position {
    /// Convert a 0-based slice index into a 1-based position.
    ///
    /// Slice indices are always below `isize::MAX`, so the saturation never
    /// kicks in for a real index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Position(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Build a position from a 1-based value. Returns `None` for 0.
    pub fn new(one_based: usize) -> Option<Self> {
        NonZeroUsize::new(one_based).map(Position)
    }

    /// The 1-based value.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based slice index this position refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two procedures produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Procedure {
    Linear,
    Binary,
}

impl Procedure {
    pub fn name(self) -> &'static str {
        match self {
            Procedure::Linear => "linear",
            Procedure::Binary => "binary",
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where interval halving goes after a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `seq[mid] == target`, search stops.
    Found,
    /// `seq[mid] < target`, continue in `[mid + 1, high]`.
    Right,
    /// `seq[mid] > target`, continue in `[low, mid - 1]`.
    Left,
}

/// One inspected element. Every step is exactly one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    /// Linear scan looked at `index`.
    Scan { index: usize, matched: bool },
    /// Binary search probed `mid` inside the inclusive window `[low, high]`.
    Halve {
        low: usize,
        high: usize,
        mid: usize,
        direction: Direction,
    },
}

impl Step {
    /// The 0-based index that was compared against the target.
    pub fn inspected(&self) -> usize {
        match *self {
            Step::Scan { index, .. } => index,
            Step::Halve { mid, .. } => mid,
        }
    }

    /// Human narration of this step.
    pub fn describe(&self) -> String {
        match *self {
            Step::Scan { index, matched: true } => {
                format!("Checking element at index {} - match", index)
            }
            Step::Scan { index, matched: false } => {
                format!("Checking element at index {}", index)
            }
            Step::Halve {
                low,
                high,
                mid,
                direction,
            } => {
                let verdict = match direction {
                    Direction::Found => "match",
                    Direction::Right => "target is in the right half",
                    Direction::Left => "target is in the left half",
                };
                format!(
                    "Checking middle element at index {} of [{}, {}] - {}",
                    mid, low, high, verdict
                )
            }
        }
    }
}

/// Positions reported by a procedure together with every step taken.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Trace {
    pub positions: Vec<Position>,
    pub steps: Vec<Step>,
}

impl Trace {
    /// Number of element comparisons performed.
    pub fn comparisons(&self) -> usize {
        self.steps.len()
    }

    pub fn is_found(&self) -> bool {
        !self.positions.is_empty()
    }
}
