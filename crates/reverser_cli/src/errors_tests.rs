use super::*;
use std::io;

#[test]
fn test_config_error_display() {
    let error = Error::Config("Missing field 'reverse'".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: Missing field 'reverse'"
    );
}

#[test]
fn test_error_debug_format() {
    let error = Error::InvalidArguments("test".to_string());
    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("InvalidArguments"));
    assert!(debug_output.contains("test"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

#[test]
fn test_invalid_arguments_error_display() {
    let error = Error::InvalidArguments("no output to explain".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid arguments: no output to explain"
    );
}

#[test]
fn test_load_file_error_display() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error = Error::LoadFile(io_error);
    assert_eq!(error.to_string(), "Failed to load file.");
}

#[test]
fn test_parse_toml_file_error_display() {
    let toml_content = "invalid = toml = syntax";
    let parse_error = toml::from_str::<toml::Value>(toml_content).unwrap_err();
    let error = Error::ParseTomlFile(parse_error);
    assert_eq!(error.to_string(), "Failed to parse TOML configuration file.");
}

#[test]
fn test_stdout_flush_failed_error_display() {
    let error = Error::StdOutFlushFailed;
    assert_eq!(error.to_string(), "Failed to flush the std out buffer.");
}

#[test]
fn test_core_error_is_transparent() {
    let error: Error = ReverseError::IndexOutOfBounds {
        index: 4,
        length: 4,
    }
    .into();
    assert_eq!(error.to_string(), "index 4 out of bounds for length 4");
}
