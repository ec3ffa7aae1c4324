//! Integration tests for the tabsheet command line

use std::io::Write;
use std::process::{Command, Stdio};

fn run_tabsheet(args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tabsheet"))
        .args(args)
        .env_remove("TABSHEET_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tabsheet");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for tabsheet");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn run_with_stdin(args: &[&str], stdin: &str) -> (String, String, i32) {
    // Tests must not depend on a user's ~/.config/tabsheet/config.toml.
    let mut full = vec!["--no-config"];
    full.extend_from_slice(args);
    run_tabsheet(&full, stdin)
}

#[test]
fn test_render_table_from_stdin() {
    let (stdout, _, code) = run_with_stdin(&[], "1  2  =ADD(A1,B1)\n3  4  =DIVIDE(A2,B2)\n");
    assert_eq!(stdout, "1\t2\t3\n3\t4\t0.75\n");
    assert_eq!(code, 0);
}

#[test]
fn test_single_cell() {
    let (stdout, _, code) = run_with_stdin(&["-c", "C1"], "2\t5\t=MULTIPLY(A1,B1,2.5)");
    assert_eq!(stdout.trim(), "25");
    assert_eq!(code, 0);
}

#[test]
fn test_several_cells() {
    let (stdout, _, code) = run_with_stdin(&["-c", "A1", "-c", "B1"], "=SUBTRACT(5,2)\t=A1");
    assert_eq!(stdout.trim(), "3\n3");
    assert_eq!(code, 0);
}

#[test]
fn test_raw_cell() {
    let (stdout, _, code) = run_with_stdin(&["--raw", "-c", "A1"], "=ADD(1,2)");
    assert_eq!(stdout.trim(), "=ADD(1,2)");
    assert_eq!(code, 0);
}

#[test]
fn test_unknown_function_fails() {
    let (stdout, stderr, code) = run_with_stdin(&["-c", "A1"], "=FOO(1,2)");
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown function 'FOO'"));
    assert_eq!(code, 1);
}

#[test]
fn test_missing_cell_fails() {
    let (_, stderr, code) = run_with_stdin(&["-c", "B7"], "1");
    assert!(stderr.contains("Cell 'B7' does not exist"));
    assert_eq!(code, 1);
}

#[test]
fn test_cycle_hits_depth_limit() {
    let (_, stderr, code) = run_with_stdin(&["--max-depth", "20", "-c", "A1"], "=B1\t=A1");
    assert!(stderr.contains("Reference chain exceeds 20 levels"));
    assert_eq!(code, 1);
}

#[test]
fn test_file_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "10\t=MOD(A1,4)").unwrap();

    let (stdout, _, code) = run_with_stdin(
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "10\t2");
}

#[test]
fn test_missing_file_fails() {
    let (_, stderr, code) = run_with_stdin(&["/definitely/not/here.txt"], "");
    assert!(stderr.contains("failed to read"));
    assert_eq!(stderr.matches("No such file or directory").count(), 1);
    assert_eq!(code, 1);
}

#[test]
fn test_bad_option() {
    let (_, stderr, code) = run_with_stdin(&["--frobnicate"], "");
    assert!(stderr.contains("Unknown option"));
    assert_eq!(code, 1);
}

#[test]
fn test_raw_table_without_cells() {
    let (stdout, _, code) = run_with_stdin(&["--raw"], "1   =ADD(A1,2)\n=A1  text\n");
    assert_eq!(stdout, "1\t=ADD(A1,2)\n=A1\ttext\n");
    assert_eq!(code, 0);
}

#[test]
fn test_config_file_sets_separator() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[output]\nseparator = \" | \"\n").unwrap();

    let (stdout, _, code) = run_tabsheet(
        &["--config", config.to_str().unwrap()],
        "1\t2\n=ADD(A1,B1)\t=A2",
    );
    assert_eq!(stdout, "1 | 2\n3 | 3\n");
    assert_eq!(code, 0);
}

#[test]
fn test_config_file_sets_depth_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[eval]\nmax_depth = 7\n").unwrap();

    let (_, stderr, code) = run_tabsheet(
        &["--config", config.to_str().unwrap(), "-c", "A1"],
        "=B1\t=A1",
    );
    assert!(stderr.contains("Reference chain exceeds 7 levels"));
    assert_eq!(code, 1);
}

#[test]
fn test_missing_config_file_warns() {
    let (stdout, stderr, code) = run_tabsheet(
        &["--config", "/definitely/not/here/config.toml", "-c", "A1"],
        "=MULTIPLY(3,4)",
    );
    assert_eq!(stdout.trim(), "12");
    assert!(stderr.contains("Config file not found"));
    assert_eq!(code, 0);
}
