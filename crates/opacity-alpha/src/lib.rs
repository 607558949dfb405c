//! Opacity <-> alpha conversions
//!
//! This crate converts between a normalized opacity (0.0-1.0) and an 8-bit
//! alpha channel value (0-255), and generates `.withValues(alpha: N)`
//! replacement snippets from opacity text.
//!
//! ```
//! use opacity_alpha::{alpha_to_opacity, generate_snippet, opacity_to_alpha};
//!
//! assert_eq!(opacity_to_alpha(0.7), 179);
//! assert_eq!(alpha_to_opacity(255.0), 1.0);
//! assert_eq!(generate_snippet("0.7").unwrap(), ".withValues(alpha: 179)");
//! ```

mod convert;
mod errors;
mod rewrite;
mod snippet;

pub use convert::{
    RangePolicy, alpha_to_opacity, checked_alpha_to_opacity, checked_opacity_to_alpha,
    opacity_to_alpha,
};
pub use errors::{ConvertError, Quantity};
pub use rewrite::{Replacement, Rewrite, SkipReason, Skipped, rewrite_with_opacity};
pub use snippet::{
    Conversion, SnippetOptions, convert, format_snippet, generate_snippet, generate_snippet_with,
    parse_number,
};

/// Largest 8-bit alpha value, as a float for arithmetic
pub const ALPHA_MAX: f64 = 255.0;
