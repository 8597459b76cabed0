//! End-to-end tests that drive the real binaries.
//!
//! Only in-bounds counts are exercised here: anything above the fixed
//! capacity is undefined behavior by construction and belongs in a Miri
//! session, not in the test suite.

use std::io::Write;
use std::process::{Command, Stdio};

fn args_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_overrun-args"))
}

fn prompt_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_overrun-prompt"))
}

fn stdout_of(output: std::process::Output) -> String {
    assert!(output.status.success(), "demo must always exit 0");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn args_variant_without_arguments_prints_usage_and_exits_zero() {
    let output = args_bin().output().unwrap();
    let stdout = stdout_of(output);
    assert!(stdout.contains("Not enough arguments. Needs one command-line argument (e.g. 5)."));
    // No buffer activity on this path.
    assert!(!stdout.contains("The array is:"));
    assert!(!stdout.contains("The sum is:"));
}

#[test]
fn args_variant_sums_five() {
    let output = args_bin().arg("5").output().unwrap();
    let stdout = stdout_of(output);
    assert!(stdout.contains("N is 5"));
    assert!(stdout.contains("The array is:    1,   2,   3,   4,   5,"));
    assert!(stdout.contains("The sum is: 15"));
    assert!(stdout.ends_with("Bye\n"));
}

#[test]
fn args_variant_clamps_negative_to_capacity() {
    let output = args_bin().arg("-3").output().unwrap();
    let stdout = stdout_of(output);
    // The raw parse is echoed before the clamp fires.
    assert!(stdout.contains("N is -3"));
    assert!(stdout.contains("The sum is: 15"));
}

#[test]
fn args_variant_treats_garbage_as_zero() {
    let output = args_bin().arg("quux").output().unwrap();
    let stdout = stdout_of(output);
    assert!(stdout.contains("N is 0"));
    assert!(stdout.contains("The sum is: 0"));
}

#[test]
fn prompt_variant_reads_count_from_stdin() {
    let mut child = prompt_bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"4\n").unwrap();
    let output = child.wait_with_output().unwrap();
    let stdout = stdout_of(output);
    assert!(stdout.contains("This program has 2 bugs in it."));
    assert!(stdout.contains("Enter N: "));
    assert!(stdout.contains("The sum is: 10"));
    assert!(stdout.ends_with("Bye\n"));
}

#[test]
fn prompt_variant_clamps_negative_to_capacity() {
    let mut child = prompt_bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"-7\n").unwrap();
    let output = child.wait_with_output().unwrap();
    let stdout = stdout_of(output);
    assert!(stdout.contains("The sum is: 15"));
}
