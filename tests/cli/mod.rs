//! # Command line
//!
//! Runs the compiled binary and checks its standard output, standard error and exit status.
use std::process::{Command, Output};

fn fraction_abi(arguments: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fraction-abi"))
        .args(arguments)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn word(last: &str) -> String {
    format!("{:0>64}", last)
}

fn assert_success(arguments: &[&str], expected: String) {
    let output = fraction_abi(arguments);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

fn assert_failure(arguments: &[&str]) -> String {
    let output = fraction_abi(arguments);
    assert!(!output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty(), "{:?}", output);
    let message = String::from_utf8(output.stderr).unwrap();
    assert!(!message.is_empty());
    message
}

#[test]
fn add() {
    assert_success(&["add", "1", "2", "1", "3"], word("5") + &word("6"));
}

#[test]
fn div() {
    assert_success(&["div", "1", "2", "1", "2"], word("1") + &word("1"));
}

#[test]
fn div_zero() {
    let message = assert_failure(&["div", "1", "2", "0", "5"]);
    assert!(message.contains("division by zero"), "{}", message);
}

#[test]
fn mul() {
    assert_success(&["mul", "2", "3", "3", "2"], word("1") + &word("1"));
}

#[test]
fn eq() {
    assert_success(&["eq", "1", "2", "2", "4"], word("1") + &word("1"));
    assert_success(&["lt", "1", "2", "2", "4"], word("0") + &word("1"));
}

#[test]
fn sub() {
    assert_success(&["sub", "1", "3", "1", "3"], word("0") + &word("1"));
}

#[test]
fn negative() {
    assert_success(&["sub", "-1", "3", "0", "1"], "f".repeat(64) + &word("3"));
    assert_success(&["mul", "-2", "3", "3", "-2"], word("1") + &word("1"));
}

#[test]
fn hyphenated_operands() {
    assert_success(&["add", "-1_000", "1", "0", "1"], "f".repeat(61) + "c18" + &word("1"));
    assert_success(&["mul", "1_000", "1", "-1", "-1_000"], word("1") + &word("1"));

    let message = assert_failure(&["add", "-abc", "1", "0", "1"]);
    assert!(!message.starts_with("Usage"), "{}", message);
    assert!(message.contains("\"-abc\""), "{}", message);

    let message = assert_failure(&["lt", "1", "--2", "0", "1"]);
    assert!(message.contains("\"--2\""), "{}", message);
}

#[test]
fn output_length() {
    let output = fraction_abi(&["gte", "7", "3", "-7", "3"]);
    assert!(output.status.success());
    assert_eq!(output.stdout.len(), 128);
    assert!(output.stdout.iter().all(|byte| byte.is_ascii_hexdigit() && !byte.is_ascii_uppercase()));
}

#[test]
fn usage() {
    for arguments in [
        &[][..],
        &["add"][..],
        &["add", "1", "2", "1"][..],
        &["add", "1", "2", "1", "3", "4"][..],
    ] {
        let message = assert_failure(arguments);
        assert!(message.starts_with("Usage: "), "{}", message);
        assert!(message.trim_end().ends_with(" operation a b c d"), "{}", message);
    }
}

#[test]
fn unknown_operation() {
    let message = assert_failure(&["pow", "1", "2", "1", "3"]);
    assert!(message.contains("unknown operation"), "{}", message);
}

#[test]
fn parse_error() {
    let message = assert_failure(&["add", "1", "two", "1", "3"]);
    assert!(message.contains("\"two\""), "{}", message);
}

#[test]
fn overflow() {
    let large = format!("{}", num_bigint::BigInt::from(1u8) << 256usize);
    let message = assert_failure(&["add", &large, "1", "0", "1"]);
    assert!(message.contains("256-bit"), "{}", message);
}

#[test]
fn arithmetic_only() {
    assert_success(&["--arithmetic-only", "add", "1", "2", "1", "3"], word("5") + &word("6"));
    let message = assert_failure(&["--arithmetic-only", "lt", "1", "2", "1", "3"]);
    assert!(message.contains("not available"), "{}", message);
}
