// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: an ordering wrapper and runtime contracts.
//!
//! Two complementary approaches:
//!
//! 1. **Type-level wrapper** (`Ascending`) that discharges binary search's
//!    sortedness precondition once, at construction.
//!
//! 2. **Runtime contracts** that panic in debug builds when a search reports
//!    something impossible. Zero-cost in release.
//!
//! Neither is applied inside the searches to the *input*: sortedness stays
//! the caller's obligation.

mod types;
pub mod contracts;

pub use types::*;
