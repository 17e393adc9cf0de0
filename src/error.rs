// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the executables.
//!
//! The searches themselves cannot fail: absence is a result, not an error.
//! What can fail is choosing a scenario, refusing binary search on an
//! unsorted one, and writing the output.

use crate::verify::OrderError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ProbeError {
    /// No compiled-in scenario has this name.
    UnknownScenario { name: String, known: Vec<&'static str> },
    /// Binary search was requested on a scenario that is not ascending.
    Unsorted {
        scenario: &'static str,
        source: OrderError,
    },
    /// Writing results failed (closed pipe, full disk).
    Io(io::Error),
    /// Encoding a JSON report failed.
    Json(serde_json::Error),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::UnknownScenario { name, known } => {
                write!(f, "unknown scenario '{}' (known: {})", name, known.join(", "))
            }
            ProbeError::Unsorted { scenario, source } => {
                write!(
                    f,
                    "binary search needs an ascending sequence; scenario '{}': {}",
                    scenario, source
                )
            }
            ProbeError::Io(e) => write!(f, "failed to write output: {}", e),
            ProbeError::Json(e) => write!(f, "failed to encode report: {}", e),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::UnknownScenario { .. } => None,
            ProbeError::Unsorted { source, .. } => Some(source),
            ProbeError::Io(e) => Some(e),
            ProbeError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for ProbeError {
    fn from(e: io::Error) -> Self {
        ProbeError::Io(e)
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(e: serde_json::Error) -> Self {
        ProbeError::Json(e)
    }
}
