use super::*;
use crate::config::ExplainConfig;
use std::io;
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

fn run(args: &ExplainArgs, config: &AppConfig, input: &str) -> (Result<usize, Error>, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let result = execute(args, config, input.as_bytes(), &mut out);
    (result, String::from_utf8(out).expect("output was not UTF-8"))
}

#[test]
fn test_explain_text_from_stdin() {
    let (result, output) = run(&ExplainArgs::default(), &AppConfig::default(), JAVAC_OUTPUT);

    assert_eq!(result.expect("explain failed"), 2);
    assert!(output.contains(
        "PublicClassFilenameMismatchError (compile-time) at ReverseString.java:14"
    ));
    assert!(output.contains("SymbolNotFoundError (compile-time) at ReverseString.java:18"));
    assert!(output.contains("Fix: Rename class `ReverzeString` to `ReverseString`"));
    assert!(output.contains("Fix: Declare `reversal`"));
}

#[test]
fn test_explain_json_flag_overrides_config() {
    let args = ExplainArgs {
        file: None,
        format: Some(OutputFormat::Json),
    };
    let (result, output) = run(&args, &AppConfig::default(), JAVAC_OUTPUT);

    assert_eq!(result.expect("explain failed"), 2);
    let json: serde_json::Value = serde_json::from_str(&output).expect("output was not JSON");
    let items = json.as_array().expect("expected a JSON array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["kind"], "PublicClassFilenameMismatch");
    assert_eq!(items[1]["symbol_name"], "reversal");
}

#[test]
fn test_explain_uses_configured_format() {
    let config = AppConfig {
        explain: ExplainConfig {
            format: OutputFormat::Json,
        },
        ..AppConfig::default()
    };
    let (result, output) = run(&ExplainArgs::default(), &config, JAVAC_OUTPUT);

    assert!(result.is_ok());
    assert!(output.trim_start().starts_with('['));
}

#[test]
fn test_explain_reads_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("run.log");
    std::fs::write(
        &path,
        "Exception in thread \"main\" java.lang.StringIndexOutOfBoundsException: index 4, length 4\n\tat ReverseString.reverse(ReverseString.java:24)\n",
    )
    .expect("Failed to write log");

    let args = ExplainArgs {
        file: Some(path),
        format: None,
    };
    let (result, output) = run(&args, &AppConfig::default(), "");

    assert_eq!(result.expect("explain failed"), 1);
    assert!(output.contains("StringIndexOutOfBoundsException (runtime) at ReverseString.java:24"));
    assert!(output.contains("valid indices are 0 to 3"));
}

#[test]
fn test_explain_missing_file() {
    let args = ExplainArgs {
        file: Some(PathBuf::from("does/not/exist.log")),
        format: None,
    };
    let (result, _) = run(&args, &AppConfig::default(), "");
    assert!(matches!(result, Err(Error::LoadFile(_))));
}

#[test]
fn test_explain_empty_input_is_rejected() {
    let (result, output) = run(&ExplainArgs::default(), &AppConfig::default(), "  \n");
    assert!(matches!(result, Err(Error::InvalidArguments(_))));
    assert!(output.is_empty());
}

#[test]
fn test_explain_unrecognised_output() {
    let (result, output) = run(&ExplainArgs::default(), &AppConfig::default(), "dcba\n");
    assert_eq!(result.expect("explain failed"), 0);
    assert_eq!(output, "No known defects found.\n");
}

#[test]
fn test_read_output_from_reader() {
    let text = read_output(None, io::Cursor::new("some output")).expect("read failed");
    assert_eq!(text, "some output");
}
