//! The canonical scenarios, checked against both procedures' printed output.

use super::common::{binary_lines, canonical_scenarios, linear_lines};

#[test]
fn test_canonical_linear_output() {
    for (name, seq, target, linear, _) in canonical_scenarios() {
        assert_eq!(linear_lines(&seq, target), linear, "scenario {}", name);
    }
}

#[test]
fn test_canonical_binary_output() {
    for (name, seq, target, _, binary) in canonical_scenarios() {
        assert_eq!(binary_lines(&seq, target), vec![binary], "scenario {}", name);
    }
}

#[test]
fn test_runs_are_idempotent() {
    for (name, seq, target, _, _) in canonical_scenarios() {
        assert_eq!(
            linear_lines(&seq, target),
            linear_lines(&seq, target),
            "linear scenario {}",
            name
        );
        assert_eq!(
            binary_lines(&seq, target),
            binary_lines(&seq, target),
            "binary scenario {}",
            name
        );
    }
}

#[test]
fn test_binary_prints_exactly_one_line() {
    for (name, seq, target, _, _) in canonical_scenarios() {
        assert_eq!(binary_lines(&seq, target).len(), 1, "scenario {}", name);
    }
}

#[test]
fn test_compiled_in_scenarios_match_canonical_answers() {
    use probe::{Procedure, Report};

    let expected = [
        ("reference", vec!["5"], Some(vec!["5"])),
        ("absent", vec!["-1"], Some(vec!["-1"])),
        ("duplicates", vec!["1", "2", "3"], Some(vec!["2"])),
        ("empty", vec!["-1"], Some(vec!["-1"])),
        ("unsorted", vec!["5"], None),
    ];

    for (name, linear, binary) in expected {
        let scenario = probe::fixtures::scenario(name).unwrap();
        assert_eq!(Report::linear(scenario).lines(), linear, "scenario {}", name);
        match binary {
            Some(lines) => assert_eq!(
                Report::run(scenario, Procedure::Binary).unwrap().lines(),
                lines,
                "scenario {}",
                name
            ),
            None => assert!(Report::binary(scenario).is_err(), "scenario {}", name),
        }
    }
}
