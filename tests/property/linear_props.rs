//! Property tests for linear search.
//!
//! Verifies that:
//! 1. Every matching index is reported, in ascending order, exactly once
//! 2. Nothing but matching indices is reported
//! 3. `-1` is printed if and only if there is no match
//! 4. The lazy, first-only, traced and parallel variants agree

use super::common::{linear_lines, oracle_positions, values};
use probe::{linear_positions, linear_search, linear_search_first, linear_trace};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small value domain so duplicates and hits are common.
fn sequence_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-5i32..5, 0..64)
}

fn target_strategy() -> impl Strategy<Value = i32> {
    -6i32..6
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: linear search equals the naive oracle.
    #[test]
    fn prop_linear_matches_oracle(seq in sequence_strategy(), target in target_strategy()) {
        let hits = linear_search(&seq, &target);
        prop_assert_eq!(values(&hits), oracle_positions(&seq, &target));
    }

    /// Property: positions strictly ascend and each holds the target.
    #[test]
    fn prop_linear_positions_ascend(seq in sequence_strategy(), target in target_strategy()) {
        let hits = linear_search(&seq, &target);
        for pair in hits.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for hit in &hits {
            prop_assert_eq!(seq[hit.index()], target);
        }
    }

    /// Property: printed output is `-1` iff no element equals the target.
    #[test]
    fn prop_sentinel_iff_absent(seq in sequence_strategy(), target in target_strategy()) {
        let lines = linear_lines(&seq, target);
        let present = seq.contains(&target);
        prop_assert_eq!(lines == vec!["-1".to_string()], !present);
        if present {
            let count = seq.iter().filter(|&&v| v == target).count();
            prop_assert_eq!(lines.len(), count);
        }
    }

    /// Property: all variants agree with `linear_search`.
    #[test]
    fn prop_variants_agree(seq in sequence_strategy(), target in target_strategy()) {
        let hits = linear_search(&seq, &target);
        let lazy: Vec<_> = linear_positions(&seq, &target).collect();
        prop_assert_eq!(&lazy, &hits);
        prop_assert_eq!(linear_search_first(&seq, &target), hits.first().copied());

        let trace = linear_trace(&seq, &target);
        prop_assert_eq!(&trace.positions, &hits);
        prop_assert_eq!(trace.comparisons(), seq.len());

        #[cfg(feature = "parallel")]
        prop_assert_eq!(probe::linear_search_par(&seq, &target), hits);
    }

    /// Property: running twice gives identical output.
    #[test]
    fn prop_linear_idempotent(seq in sequence_strategy(), target in target_strategy()) {
        prop_assert_eq!(linear_lines(&seq, target), linear_lines(&seq, target));
    }
}
