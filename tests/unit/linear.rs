//! Linear search edge cases beyond the canonical scenarios.

use super::common::values;
use probe::{linear_positions, linear_search, linear_search_first, linear_trace, Step};

#[test]
fn test_matches_at_both_ends() {
    assert_eq!(values(&linear_search(&[9, 0, 0, 9], &9)), vec![1, 4]);
}

#[test]
fn test_every_element_matches() {
    let seq = vec![7; 50];
    let expected: Vec<usize> = (1..=50).collect();
    assert_eq!(values(&linear_search(&seq, &7)), expected);
}

#[test]
fn test_lazy_iterator_stops_when_dropped() {
    let seq = [3, 3, 3, 3];
    let first_two: Vec<usize> = linear_positions(&seq, &3).take(2).map(|p| p.get()).collect();
    assert_eq!(first_two, vec![1, 2]);
}

#[test]
fn test_first_agrees_with_full_scan() {
    let seq = [5, 1, 5, 2];
    assert_eq!(
        linear_search_first(&seq, &5),
        linear_search(&seq, &5).first().copied()
    );
}

#[test]
fn test_trace_marks_matches() {
    let trace = linear_trace(&[2, 1, 2], &2);
    let matched: Vec<bool> = trace
        .steps
        .iter()
        .map(|s| matches!(s, Step::Scan { matched: true, .. }))
        .collect();
    assert_eq!(matched, vec![true, false, true]);
    assert_eq!(values(&trace.positions), vec![1, 3]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_scan_on_large_input() {
    use probe::linear_search_par;

    let seq: Vec<u64> = (0..200_000).map(|i| i % 1000).collect();
    let par = linear_search_par(&seq, &999);
    assert_eq!(par.len(), 200);
    assert_eq!(par, linear_search(&seq, &999));
}
