//! The two argument-free programs.

use super::common::{run, stdout_of, BINARY_BIN, LINEAR_BIN};

#[test]
fn test_linear_search_prints_reference_position() {
    assert_eq!(stdout_of(LINEAR_BIN, &[]), "5\n");
}

#[test]
fn test_binary_search_prints_reference_position() {
    assert_eq!(stdout_of(BINARY_BIN, &[]), "5\n");
}

#[test]
fn test_programs_are_idempotent() {
    for bin in [LINEAR_BIN, BINARY_BIN] {
        assert_eq!(stdout_of(bin, &[]), stdout_of(bin, &[]));
    }
}

#[test]
fn test_arguments_are_ignored() {
    for bin in [LINEAR_BIN, BINARY_BIN] {
        assert_eq!(stdout_of(bin, &["--help", "42"]), "5\n");
    }
}

#[test]
fn test_diagnostics_stay_off_stdout() {
    for bin in [LINEAR_BIN, BINARY_BIN] {
        let output = std::process::Command::new(bin)
            .env("PROBE_LOG", "trace")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run");
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "5\n");
        assert!(
            String::from_utf8_lossy(&output.stderr).contains("probe")
                || String::from_utf8_lossy(&output.stderr).contains("match"),
            "trace output expected on stderr"
        );
    }
}

#[test]
fn test_quiet_by_default() {
    let output = run(LINEAR_BIN, &[]);
    assert!(output.stderr.is_empty());
}
