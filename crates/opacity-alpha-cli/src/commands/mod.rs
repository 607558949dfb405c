//! Command implementations
//!
//! main.rs parses arguments and renders output; the modules here do the work
//! and return an [`Outcome`] holding both renderings.

pub mod convert;
pub mod rewrite;

use opacity_alpha::ConvertError;
use serde_json::json;

/// Result of a successful command, in both output formats
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Plain text written verbatim to stdout
    pub text: String,
    /// Structured form for `--format json`
    pub json: serde_json::Value,
}

impl Outcome {
    /// Text output followed by a newline
    pub fn line(text: impl Into<String>, json: serde_json::Value) -> Self {
        let mut text = text.into();
        text.push('\n');
        Self { text, json }
    }
}

/// Helper to create an error JSON response
pub fn error_response(error_type: &str, message: impl Into<String>) -> serde_json::Value {
    json!({
        "error": error_type,
        "message": message.into()
    })
}

/// Error JSON for any command failure
pub fn failure_response(err: &anyhow::Error) -> serde_json::Value {
    let kind = err
        .downcast_ref::<ConvertError>()
        .map(ConvertError::kind)
        .unwrap_or("io_error");
    error_response(kind, format!("{:#}", err))
}
