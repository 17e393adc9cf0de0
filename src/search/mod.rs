// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two search procedures.
//!
//! - `linear`: scan everything, report every match, no ordering needed
//! - `binary`: halve an ascending window, report one match

pub mod binary;
pub mod linear;

pub use binary::{binary_search, binary_trace, midpoint};
#[cfg(feature = "parallel")]
pub use linear::linear_search_par;
pub use linear::{linear_positions, linear_search, linear_search_first, linear_trace};
