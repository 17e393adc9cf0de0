//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::process::{Command, Output};

// Re-export canonical test utilities from probe::testing
pub use probe::testing::{ascending, max_probes, oracle_positions, values};

// ============================================================================
// EXECUTABLES
// ============================================================================

/// Path to the `linear-search` executable built for this test run.
pub const LINEAR_BIN: &str = env!("CARGO_BIN_EXE_linear-search");

/// Path to the `binary-search` executable built for this test run.
pub const BINARY_BIN: &str = env!("CARGO_BIN_EXE_binary-search");

/// Path to the `probe` explorer executable built for this test run.
pub const PROBE_BIN: &str = env!("CARGO_BIN_EXE_probe");

/// Run an executable with a clean presentation environment.
///
/// `NO_COLOR` keeps explorer output plain; `PROBE_LOG` is cleared so a
/// developer's shell setting cannot leak diagnostics into assertions.
pub fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("PROBE_LOG")
        .env_remove("PROBE_LOG_FORMAT")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {}: {}", bin, e))
}

/// Stdout of a successful run, panicking with stderr otherwise.
pub fn stdout_of(bin: &str, args: &[&str]) -> String {
    let output = run(bin, args);
    assert!(
        output.status.success(),
        "{} {:?} failed: {}",
        bin,
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

// ============================================================================
// SCENARIOS
// ============================================================================

/// The four canonical scenarios: (name, sequence, target, linear lines, binary line).
pub fn canonical_scenarios() -> Vec<(&'static str, Vec<i32>, i32, Vec<&'static str>, &'static str)> {
    vec![
        ("found", (1..=10).collect(), 5, vec!["5"], "5"),
        ("absent", (1..=10).collect(), 11, vec!["-1"], "-1"),
        ("duplicates", vec![1, 1, 1], 1, vec!["1", "2", "3"], "2"),
        ("empty", vec![], 5, vec!["-1"], "-1"),
    ]
}

/// Capture `run_linear` output as lines.
pub fn linear_lines(seq: &[i32], target: i32) -> Vec<String> {
    let mut buf = Vec::new();
    probe::run_linear(seq, &target, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Capture `run_binary` output as lines.
pub fn binary_lines(seq: &[i32], target: i32) -> Vec<String> {
    let mut buf = Vec::new();
    probe::run_binary(seq, &target, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
