//! Processing API for boolex programs
//!
//! Runs the recognizer or the scanner over a program and renders the outcome in
//! one of the supported output formats.
//!
//! - `check` in `simple` format is silent on success and prints the single
//!   diagnostic line on failure. In `json` format it prints
//!   `{"status":"accepted"}` or the rejected status with the diagnostic fields.
//! - `tokens` lists every lexeme, one per line in `simple` format or as an
//!   array in `json` format.

use crate::boolex::diagnostics::Diagnostic;
use crate::boolex::lexer::tokenize_with_positions;
use crate::boolex::parser::{ParseError, Recognizer, RecognizerConfig};
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

impl OutputFormat {
    pub fn available() -> &'static [&'static str] {
        &["simple", "json"]
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Simple => write!(f, "simple"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    IoError(String),
    SerializationError(String),
    /// The program was rejected while scanning; carries its diagnostic
    Rejected(Diagnostic),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format: {} (expected one of: {})",
                format,
                OutputFormat::available().join(", ")
            ),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ProcessingError::Rejected(diagnostic) => write!(f, "{}", diagnostic),
        }
    }
}

/// Outcome of checking one program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckReport {
    Accepted,
    Rejected(Diagnostic),
}

impl CheckReport {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckReport::Accepted)
    }
}

impl From<Result<(), ParseError>> for CheckReport {
    fn from(result: Result<(), ParseError>) -> Self {
        match result {
            Ok(()) => CheckReport::Accepted,
            Err(err) => CheckReport::Rejected(Diagnostic::from_error(&err)),
        }
    }
}

/// Read a program from a file, or from stdin when the path is `-`
pub fn read_source(path: &Path) -> Result<String, ProcessingError> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| ProcessingError::IoError(e.to_string()))?;
        return Ok(source);
    }

    std::fs::read_to_string(path)
        .map_err(|e| ProcessingError::IoError(format!("{}: {}", path.display(), e)))
}

/// Run the recognizer over a program
pub fn check_source(source: &str, config: &RecognizerConfig) -> CheckReport {
    Recognizer::new(*config).recognize(source).into()
}

/// Render a check report in the given format
pub fn format_report(
    report: &CheckReport,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(match report {
            CheckReport::Accepted => String::new(),
            CheckReport::Rejected(diagnostic) => format!("{}\n", diagnostic),
        }),
        OutputFormat::Json => serde_json::to_string(report)
            .map(|json| json + "\n")
            .map_err(|e| ProcessingError::SerializationError(e.to_string())),
    }
}

/// Scan a program and render its lexemes in the given format
pub fn format_tokens(source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
    let lexemes = tokenize_with_positions(source)
        .map_err(|err| ProcessingError::Rejected(Diagnostic::from_error(&ParseError::from(err))))?;

    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for lexeme in &lexemes {
                result.push_str(&format!(
                    "{}\t{}\t{}\n",
                    lexeme.position, lexeme.token, lexeme.text
                ));
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&lexemes)
            .map(|json| json + "\n")
            .map_err(|e| ProcessingError::SerializationError(e.to_string())),
    }
}
