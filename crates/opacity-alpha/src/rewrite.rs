//! Rewrite `.withOpacity(<literal>)` calls into `.withValues(alpha: N)`
//!
//! Text in, text out. Nothing here touches the filesystem.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConvertError;
use crate::snippet::{SnippetOptions, convert};

const CALL: &str = ".withOpacity(";

/// A call that was replaced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replacement {
    /// 1-based line of the call
    pub line: usize,
    pub original: String,
    pub replacement: String,
}

/// Why a call was left alone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The argument is an expression, not a numeric literal
    NotALiteral,
    /// The literal failed the range policy
    OutOfRange { value: f64 },
    /// No matching `)` before the end of the text
    Unterminated,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotALiteral => f.write_str("argument is not a numeric literal"),
            SkipReason::OutOfRange { value } => write!(f, "opacity {} is outside [0, 1]", value),
            SkipReason::Unterminated => f.write_str("call is not terminated"),
        }
    }
}

impl From<ConvertError> for SkipReason {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::InvalidInput { .. } => SkipReason::NotALiteral,
            ConvertError::OutOfRange { value, .. } => SkipReason::OutOfRange { value },
        }
    }
}

/// A call that was found but not replaced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skipped {
    /// 1-based line of the call
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Outcome of [`rewrite_with_opacity`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rewrite {
    /// The rewritten text
    pub output: String,
    pub replacements: Vec<Replacement>,
    pub skipped: Vec<Skipped>,
}

impl Rewrite {
    /// Whether any call was replaced
    pub fn changed(&self) -> bool {
        !self.replacements.is_empty()
    }
}

/// Replace every `.withOpacity(<literal>)` in `source` with its snippet.
///
/// Calls whose argument is not a numeric literal, or whose value fails the
/// range policy in `options`, are copied through unchanged and listed in
/// [`Rewrite::skipped`].
pub fn rewrite_with_opacity(source: &str, options: &SnippetOptions) -> Rewrite {
    let mut rewrite = Rewrite {
        output: String::with_capacity(source.len()),
        ..Rewrite::default()
    };
    let mut rest = source;
    let mut line = 1;

    while let Some(start) = rest.find(CALL) {
        line += rest[..start].matches('\n').count();
        let args_start = start + CALL.len();

        let Some(args_len) = closing_paren(&rest[args_start..]) else {
            let text = rest[start..].lines().next().unwrap_or_default();
            tracing::debug!(line, text, "unterminated call");
            rewrite.skipped.push(Skipped {
                line,
                text: text.to_string(),
                reason: SkipReason::Unterminated,
            });
            rewrite.output.push_str(&rest[..args_start]);
            rest = &rest[args_start..];
            continue;
        };

        let end = args_start + args_len + 1;
        let call = &rest[start..end];
        let argument = &rest[args_start..args_start + args_len];
        rewrite.output.push_str(&rest[..start]);

        match convert(argument, options) {
            Ok(conversion) => {
                tracing::debug!(line, call, snippet = %conversion.snippet, "replaced call");
                rewrite.output.push_str(&conversion.snippet);
                rewrite.replacements.push(Replacement {
                    line,
                    original: call.to_string(),
                    replacement: conversion.snippet,
                });
            }
            Err(err) => {
                tracing::debug!(line, call, error = %err, "skipped call");
                rewrite.output.push_str(call);
                rewrite.skipped.push(Skipped {
                    line,
                    text: call.to_string(),
                    reason: err.into(),
                });
            }
        }

        line += call.matches('\n').count();
        rest = &rest[end..];
    }

    rewrite.output.push_str(rest);
    rewrite
}

/// Byte offset of the `)` closing an already-open paren
fn closing_paren(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
