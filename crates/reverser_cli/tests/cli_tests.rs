//! Binary-level tests for the `reverser` command.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const JAVAC_OUTPUT: &str = "\
ReverseString.java:14: error: class ReverzeString is public, should be declared in a file named ReverzeString.java
public class ReverzeString {
       ^
ReverseString.java:18: error: cannot find symbol
        System.out.println(reversal);
                           ^
  symbol:   variable reversal
  location: class ReverzeString
2 errors
";

fn reverser() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_reverser"));
    cmd.env_remove("REVERSER_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn bare_invocation_prints_dcba() {
    reverser().assert().success().stdout("dcba\n");
}

#[test]
fn reverse_subcommand_with_input() {
    reverser()
        .args(["reverse", "stressed"])
        .assert()
        .success()
        .stdout("desserts\n");
}

#[test]
fn reverse_reads_default_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("reverser.toml");
    std::fs::write(&path, "[reverse]\ndefault_input = \"level up\"\n").expect("write failed");

    reverser()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("pu level\n");
}

#[test]
fn missing_config_fails_with_logged_error() {
    reverser()
        .args(["--config", "does/not/exist.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn explain_reports_compile_errors_from_stdin() {
    reverser()
        .arg("explain")
        .write_stdin(JAVAC_OUTPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("PublicClassFilenameMismatchError"))
        .stdout(predicate::str::contains("SymbolNotFoundError"));
}

#[test]
fn explain_json_output() {
    reverser()
        .args(["explain", "--format", "json"])
        .write_stdin(JAVAC_OUTPUT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"symbol_name\": \"reversal\""));
}

#[test]
fn explain_without_known_defects_exits_one() {
    reverser()
        .arg("explain")
        .write_stdin("dcba\n")
        .assert()
        .code(1)
        .stdout("No known defects found.\n");
}

#[test]
fn version_prints_package_version() {
    reverser()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("reverser version "));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    reverser().arg("frobnicate").assert().code(2);
}

#[test]
fn explain_negative_string_index() {
    reverser()
        .arg("explain")
        .write_stdin(
            "Exception in thread \"main\" java.lang.StringIndexOutOfBoundsException: index -1, length 4\n\tat ReverseString.reverse(ReverseString.java:24)\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "StringIndexOutOfBoundsException (runtime) at ReverseString.java:24",
        ))
        .stdout(predicate::str::contains("below 0"));
}
