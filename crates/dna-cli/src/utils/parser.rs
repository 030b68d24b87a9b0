use crate::config::OutputFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid boolean '{0}'. Expected true/false, yes/no, on/off or 1/0")]
    InvalidBool(String),

    #[error("Invalid output format '{0}'. Expected 'plain' or 'json'")]
    InvalidOutputFormat(String),

    #[error("Input '@' must be followed by a file path")]
    EmptyFilePath,
}

/// Where one sequence to measure comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Literal(String),
    File(PathBuf),
    Stdin,
}

/// Interprets a positional input: `-` is stdin, `@PATH` is a file and `@@TEXT`
/// is the literal `@TEXT`. Anything else is measured as given.
pub fn parse_input_token(token: &str) -> Result<InputSource, ParseError> {
    if token == "-" {
        return Ok(InputSource::Stdin);
    }
    match token.strip_prefix('@') {
        Some(rest) if rest.starts_with('@') => Ok(InputSource::Literal(rest.to_string())),
        Some("") => Err(ParseError::EmptyFilePath),
        Some(path) => Ok(InputSource::File(PathBuf::from(path))),
        None => Ok(InputSource::Literal(token.to_string())),
    }
}

pub fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ParseError::InvalidBool(value.to_string())),
    }
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "plain" => Ok(OutputFormat::Plain),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ParseError::InvalidOutputFormat(value.to_string())),
    }
}
