//! End-to-end tests of the `ent` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn ent() -> Command {
    Command::cargo_bin("ent").expect("ent binary should be built")
}

fn temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[test]
fn uniform_file_report() {
    let data: Vec<u8> = (0..=255).collect();
    let file = temp_file(&data);
    ent()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entropy = 8.000000 bits per byte."))
        .stdout(predicate::str::contains(
            "would exceed this value more than 99.99 percent of the times.",
        ))
        .stdout(predicate::str::contains(
            "Arithmetic mean value of data bytes is 127.5000 (127.5 = random).",
        ));
}

#[test]
fn stdin_constant_input() {
    ent()
        .write_stdin(vec![0u8; 256])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entropy = 0.000000 bits per byte."))
        .stdout(predicate::str::contains("less than 0.01 percent"))
        .stdout(predicate::str::contains(
            "Serial correlation coefficient is undefined (all values equal!).",
        ));
}

#[test]
fn empty_stdin_is_not_an_error() {
    ent()
        .write_stdin(Vec::<u8>::new())
        .assert()
        .success()
        .stdout(predicate::str::contains("for 0 samples is 0.00"))
        .stdout(predicate::str::contains("Pi is undefined"));
}

#[test]
fn bit_mode_report() {
    ent()
        .arg("-b")
        .write_stdin(vec![0x00u8, 0xFF])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entropy = 1.000000 bits per bit."))
        .stdout(predicate::str::contains("for 16 samples"));
}

#[test]
fn terse_csv_output() {
    ent()
        .arg("-t")
        .write_stdin(vec![0u8; 6])
        .assert()
        .success()
        .stdout(
            "0,File-bytes,Entropy,Chi-square,Mean,Monte-Carlo-Pi,Serial-Correlation\n\
             1,6,0.000000,1530.000000,0.000000,4.000000,\n",
        );
}

#[test]
fn json_output_parses() {
    let output = ent().arg("--json").write_stdin(b"hello".to_vec()).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["bytes"], 5);
    assert_eq!(value["counts"]["bins"][b'l' as usize], 2);
}

#[test]
fn fold_matches_lowercase_input() {
    let upper = ent().arg("-f").write_stdin(b"HeLLo WORLD".to_vec()).output().unwrap();
    let lower = ent().write_stdin(b"hello world".to_vec()).output().unwrap();
    assert!(upper.status.success());
    assert_eq!(upper.stdout, lower.stdout);
}

#[test]
fn missing_file_exits_2() {
    ent()
        .arg("/nonexistent/ent-input.bin")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot open file /nonexistent/ent-input.bin"));
}

#[test]
fn duplicate_file_name_exits_2() {
    let a = temp_file(b"a");
    let b = temp_file(b"b");
    ent().arg(a.path()).arg(b.path()).assert().code(2);
}

#[test]
fn unknown_flag_exits_2() {
    ent().arg("-z").assert().code(2);
}

#[test]
fn help_exits_0() {
    ent()
        .arg("-u")
        .assert()
        .success()
        .stdout(predicate::str::contains("Treat input as a stream of bits"));
}

#[test]
fn question_mark_help_exits_0() {
    ent()
        .arg("-?")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fold upper to lower case letters"));
}

#[test]
fn chi_square_follows_entropy_line() {
    let output = ent().write_stdin(b"hello world".to_vec()).output().unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Entropy = "));
    assert!(lines.next().unwrap().starts_with("Chi square distribution for 11 samples"));
}
