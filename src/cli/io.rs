//! JSON I/O handling for CLI
//!
//! - Input: single JSON object via stdin
//! - Output: single JSON object via stdout
//! - Logs never go to stdout

use std::io::{self, Read, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a JSON request from stdin.
///
/// The whole input is one document, so criteria may span several lines.
pub fn read_request() -> CliResult<Value> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

fn parse_request(input: &str) -> CliResult<Value> {
    if input.trim().is_empty() {
        return Err(CliError::empty_criteria());
    }

    let value: Value = serde_json::from_str(input)?;
    Ok(value)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_value(&ok_envelope(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_value(&error_envelope(code, message))
}

fn ok_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

fn write_value(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_multiline_request() {
        let value = parse_request("{\n  \"name\": \"Yose\"\n}\n").unwrap();
        assert_eq!(value, json!({"name": "Yose"}));
    }

    #[test]
    fn test_parse_empty_request() {
        let err = parse_request("  \n").unwrap_err();
        assert_eq!(err.code_str(), "PARKS_CLI_IO_ERROR");
    }

    #[test]
    fn test_parse_malformed_request() {
        assert!(parse_request("{\"name\":").is_err());
    }

    #[test]
    fn test_envelopes() {
        assert_eq!(
            ok_envelope(json!([])),
            json!({"status": "ok", "data": []})
        );
        assert_eq!(
            error_envelope("PARKS_INVALID_CRITERIA", "bad"),
            json!({"status": "error", "code": "PARKS_INVALID_CRITERIA", "message": "bad"})
        );
    }
}
