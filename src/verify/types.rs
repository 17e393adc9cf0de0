// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A wrapper that makes "this slice is ascending" a type.
//!
//! `binary_search` trusts its caller. `Ascending` is for callers that would
//! rather check once: construction walks the slice, and every search through
//! the wrapper afterwards runs on input known to be sorted.
//!
//! # Example
//!
//! ```
//! use probe::verify::{Ascending, OrderError};
//!
//! let seq = [1, 2, 2, 5];
//! let sorted = Ascending::new(&seq).unwrap();
//! assert!(sorted.search(&5).is_some());
//!
//! let err = Ascending::new(&[3, 1]).unwrap_err();
//! assert_eq!(err, OrderError::Descending { position: 1 });
//! ```

use crate::search::binary_search;
use crate::types::{Position, Trace};
use std::fmt;

/// Error type for a sequence that is not ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// `seq[position - 1] > seq[position]` (0-based `position`).
    Descending { position: usize },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Descending { position } => write!(
                f,
                "sequence is not ascending: element {} is smaller than element {}",
                position,
                position - 1
            ),
        }
    }
}

impl std::error::Error for OrderError {}

/// First index `i` with `seq[i - 1] > seq[i]`, if any.
pub fn first_descent<T: Ord>(seq: &[T]) -> Option<usize> {
    seq.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}

/// Check if `seq` is ascending (duplicates allowed).
pub fn is_ascending<T: Ord>(seq: &[T]) -> bool {
    first_descent(seq).is_none()
}

/// A borrowed slice proven ascending at construction.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `seq[i] <= seq[j]`
#[derive(Debug, Clone, Copy)]
pub struct Ascending<'a, T> {
    seq: &'a [T],
}

impl<'a, T: Ord> Ascending<'a, T> {
    /// Validate that `seq` is ascending.
    ///
    /// Returns `Err` with the first out-of-order index otherwise. Empty and
    /// single-element slices are trivially ascending.
    pub fn new(seq: &'a [T]) -> Result<Self, OrderError> {
        match first_descent(seq) {
            Some(position) => Err(OrderError::Descending { position }),
            None => Ok(Self { seq }),
        }
    }

    /// Binary search with the precondition already discharged.
    pub fn search(&self, target: &T) -> Option<Position> {
        binary_search(self.seq, target)
    }

    /// Traced binary search.
    pub fn trace(&self, target: &T) -> Trace {
        crate::search::binary_trace(self.seq, target)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.seq
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
