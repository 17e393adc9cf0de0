//! Property tests for the overflow-safe midpoint.

use probe::midpoint;
use proptest::prelude::*;

proptest! {
    /// Property: the midpoint lies in `[low, high]` for any `usize` pair.
    #[test]
    fn prop_midpoint_in_window(a in any::<usize>(), b in any::<usize>()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mid = midpoint(low, high);
        prop_assert!(low <= mid && mid <= high);
    }

    /// Property: near `usize::MAX`, where `(low + high) / 2` overflows, the
    /// midpoint equals the mathematically exact floor average.
    #[test]
    fn prop_midpoint_exact_near_max(offset_low in 0usize..1 << 20, width in 0usize..1 << 20) {
        let low = usize::MAX - offset_low - width;
        let high = low + width;
        let exact = ((low as u128 + high as u128) / 2) as usize;
        prop_assert!(low.checked_add(high).is_none());
        prop_assert_eq!(midpoint(low, high), exact);
    }

    /// Property: the midpoint never lands right of the centre.
    #[test]
    fn prop_midpoint_rounds_down(low in 0usize..1 << 30, width in 0usize..1 << 30) {
        let high = low + width;
        prop_assert_eq!(midpoint(low, high) - low, width / 2);
    }
}
