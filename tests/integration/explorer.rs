//! The `probe` explorer over compiled-in scenarios.

use super::common::{run, stdout_of, PROBE_BIN};

#[test]
fn test_defaults_match_standalone_programs() {
    assert_eq!(stdout_of(PROBE_BIN, &["linear"]), "5\n");
    assert_eq!(stdout_of(PROBE_BIN, &["binary"]), "5\n");
}

#[test]
fn test_named_scenarios() {
    let cases = [
        ("linear", "absent", "-1\n"),
        ("binary", "absent", "-1\n"),
        ("linear", "duplicates", "1\n2\n3\n"),
        ("binary", "duplicates", "2\n"),
        ("linear", "empty", "-1\n"),
        ("binary", "empty", "-1\n"),
        ("linear", "unsorted", "5\n"),
    ];
    for (procedure, scenario, expected) in cases {
        assert_eq!(
            stdout_of(PROBE_BIN, &[procedure, "--scenario", scenario]),
            expected,
            "{} on {}",
            procedure,
            scenario
        );
    }
}

#[test]
fn test_binary_refuses_unsorted_scenario() {
    let output = run(PROBE_BIN, &["binary", "--scenario", "unsorted"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ascending"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_scenario_is_an_error() {
    let output = run(PROBE_BIN, &["linear", "--scenario", "huge"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown scenario 'huge'"), "stderr: {}", stderr);
    assert!(stderr.contains("reference"));
}

#[test]
fn test_explain_narrates_before_result() {
    let out = stdout_of(PROBE_BIN, &["binary", "--scenario", "absent", "--explain"]);
    assert_eq!(out.matches("Checking middle element").count(), 4);
    assert!(out.ends_with("-1\n"));
}

#[test]
fn test_json_report() {
    let out = stdout_of(PROBE_BIN, &["linear", "--scenario", "duplicates", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["scenario"], "duplicates");
    assert_eq!(json["procedure"], "linear");
    assert_eq!(json["found"], true);
    assert_eq!(json["positions"], serde_json::json!([1, 2, 3]));
    assert!(json.get("steps").is_none());
}

#[test]
fn test_json_explain_includes_steps() {
    let out = stdout_of(PROBE_BIN, &["binary", "--json", "--explain"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0]["kind"], "halve");
    assert_eq!(steps[0]["mid"], 4);
}

#[test]
fn test_scenarios_table_and_json() {
    let table = stdout_of(PROBE_BIN, &["scenarios"]);
    for name in ["reference", "absent", "duplicates", "empty", "unsorted"] {
        assert!(table.contains(name), "table lacks {}", name);
    }
    assert!(table.contains("n/a (unsorted)"));

    let out = stdout_of(PROBE_BIN, &["scenarios", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    let dup = rows
        .iter()
        .find(|r| r["scenario"]["name"] == "duplicates")
        .unwrap();
    assert_eq!(dup["binary"]["positions"], serde_json::json!([2]));
}

#[test]
fn test_sequences_cannot_be_passed_in() {
    let output = run(PROBE_BIN, &["linear", "1", "2", "3"]);
    assert!(!output.status.success());
}
