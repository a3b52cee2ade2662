use std::path::PathBuf;
use std::process::{Command, Output};

fn tis_opt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tis-opt"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .output()
        .expect("Failed to execute tis-opt")
}

fn problem(name: &str) -> String {
    PathBuf::from("problems")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_optimize_copy() {
    let output = tis_opt(&["optimize", &problem("copy.yaml")]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "MOV UP, DOWN\n");
}

#[test]
fn test_optimize_not_found() {
    let output = tis_opt(&["optimize", &problem("sum_pairs.yaml")]);

    assert!(output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stdout)
            .contains("Could not find a program within the bounds")
    );
}

#[test]
fn test_optimize_length_override() {
    let output = tis_opt(&["optimize", &problem("copy.yaml"), "--maximum-length", "0"]);

    assert!(output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stdout)
            .contains("Could not find a program within the bounds")
    );
}

#[test]
fn test_optimize_parallel() {
    let output = tis_opt(&["optimize", &problem("negate.yaml"), "-j", "2"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "SUB UP\nMOV ACC, DOWN\n"
    );
}

#[test]
fn test_optimize_algorithm_flag() {
    let output = tis_opt(&["optimize", &problem("negate.yaml"), "--algorithm", "parallel"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "SUB UP\nMOV ACC, DOWN\n"
    );

    let output = tis_opt(&["optimize", &problem("negate.yaml"), "--algorithm", "mcmc"]);
    assert!(!output.status.success());
}

#[test]
fn test_optimize_reports_content_cost() {
    let output = tis_opt(&[
        "optimize",
        &problem("copy.yaml"),
        "--cost-metric",
        "content",
        "-v",
    ]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Best cost found: 3"));
}

#[test]
fn test_optimize_verbose_prints_statistics() {
    let output = tis_opt(&["optimize", &problem("copy.yaml"), "-v"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Search Statistics"));
    assert!(stdout.contains("Candidates evaluated"));
}

#[test]
fn test_optimize_missing_problem() {
    let output = tis_opt(&["optimize", &problem("missing.yaml")]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read problem file"));
}

#[test]
fn test_check_accepts() {
    let output = tis_opt(&["check", &problem("double.yaml"), &problem("double.tis")]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "accepted\n");
}

#[test]
fn test_check_rejects_on_timeout() {
    let output = tis_opt(&[
        "check",
        &problem("double.yaml"),
        &problem("double.tis"),
        "--maximum-cycle",
        "2",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rejected: timeout"));
}

#[test]
fn test_check_rejects_wrong_output() {
    let output = tis_opt(&["check", &problem("copy.yaml"), &problem("double.tis")]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rejected: wrote [14], expected [7]"));
}

#[test]
fn test_run_program() {
    let output = tis_opt(&["run", &problem("double.tis"), "--input", "21"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("ACC: 42"));
    assert!(stdout.contains("Output: [42]"));
    assert!(stdout.contains("Unread input: 0"));
}

#[test]
fn test_run_reports_unread_input() {
    let output = tis_opt(&["run", &problem("double.tis"), "--input", "1,-2,3"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unread input: 2"));
}

#[test]
fn test_run_deadlocks_without_input() {
    let output = tis_opt(&["run", &problem("double.tis")]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("deadlock at line 0"));
}
