//! Linear and binary search over fixed integer sequences.
//!
//! Two classic procedures, each reporting 1-based positions and printing
//! `-1` when the target is absent:
//!
//! - **Linear search** scans front to back and reports *every* match, in
//!   ascending order. No ordering is required.
//! - **Binary search** halves an ascending window with the overflow-safe
//!   midpoint `low + (high - low) / 2` and reports *one* match.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  search/     │────▶│ procedure.rs │──▶ linear-search
//! │ (Position,  │     │ (linear,     │     │ (result      │──▶ binary-search
//! │  Step)      │     │  binary)     │     │  lines)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    verify/                           │
//! │  (Ascending wrapper, output contracts)               │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!               fixtures.rs + report.rs ──▶ probe (explorer CLI)
//! ```
//!
//! # Usage
//!
//! ```
//! use probe::{binary_search, linear_search, Position};
//!
//! let seq = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! assert_eq!(binary_search(&seq, &5), Position::new(5));
//! assert_eq!(linear_search(&seq, &5), vec![Position::from_index(4)]);
//! ```

pub mod error;
pub mod fixtures;
pub mod logging;
pub mod procedure;
pub mod report;
pub mod search;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use error::ProbeError;
pub use fixtures::{Scenario, REFERENCE, SCENARIOS};
pub use procedure::{run_binary, run_linear};
pub use report::{compare_all, Comparison, Report};
#[cfg(feature = "parallel")]
pub use search::linear_search_par;
pub use search::{
    binary_search, binary_trace, linear_positions, linear_search, linear_search_first,
    linear_trace, midpoint,
};
pub use types::{Direction, Position, Procedure, Step, Trace, NOT_FOUND};
pub use verify::{is_ascending, Ascending, OrderError};
