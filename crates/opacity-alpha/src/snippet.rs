//! `.withValues(alpha: N)` snippet generation

use serde::{Deserialize, Serialize};

use crate::convert::{RangePolicy, opacity_to_alpha};
use crate::errors::{ConvertError, Quantity};

/// Options for [`generate_snippet_with`] and [`convert`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetOptions {
    /// How to treat opacity outside 0.0-1.0
    pub range: RangePolicy,
}

impl SnippetOptions {
    /// Options using the given range policy
    pub fn with_range(range: RangePolicy) -> Self {
        Self { range }
    }
}

/// Result of converting one opacity text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Opacity after parsing and range handling
    pub opacity: f64,
    /// Alpha channel value
    pub alpha: i64,
    /// Replacement text, `.withValues(alpha: N)`
    pub snippet: String,
}

/// Parse numeric text into a finite number.
///
/// Surrounding whitespace is ignored. Empty text, trailing characters and
/// non-finite values (`NaN`, `inf`) are rejected.
pub fn parse_number(text: &str) -> Result<f64, ConvertError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConvertError::invalid_input(text)),
    }
}

/// Render the replacement text for an alpha value
pub fn format_snippet(alpha: i64) -> String {
    format!(".withValues(alpha: {})", alpha)
}

/// Parse, range-check and convert opacity text
pub fn convert(text: &str, options: &SnippetOptions) -> Result<Conversion, ConvertError> {
    let parsed = parse_number(text)?;
    let opacity = options.range.apply(Quantity::Opacity, parsed)?;
    let alpha = opacity_to_alpha(opacity);
    tracing::trace!(input = text, opacity, alpha, "converted opacity");
    Ok(Conversion {
        opacity,
        alpha,
        snippet: format_snippet(alpha),
    })
}

/// Generate `.withValues(alpha: N)` for opacity text, using `options`
pub fn generate_snippet_with(text: &str, options: &SnippetOptions) -> Result<String, ConvertError> {
    convert(text, options).map(|conversion| conversion.snippet)
}

/// Generate `.withValues(alpha: N)` for opacity text.
///
/// Out-of-range opacity is rejected; use [`generate_snippet_with`] to clamp
/// or allow it instead.
pub fn generate_snippet(text: &str) -> Result<String, ConvertError> {
    generate_snippet_with(text, &SnippetOptions::default())
}
