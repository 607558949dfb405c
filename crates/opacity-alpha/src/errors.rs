//! Error types for opacity/alpha conversions

use std::fmt;

use thiserror::Error;

/// Which of the two scales a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Normalized opacity, 0.0 to 1.0
    Opacity,
    /// 8-bit alpha channel, 0 to 255
    Alpha,
}

impl Quantity {
    /// Inclusive bounds of the valid range
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Quantity::Opacity => (0.0, 1.0),
            Quantity::Alpha => (0.0, crate::ALPHA_MAX),
        }
    }

    /// Whether `value` lies inside [`Quantity::bounds`]
    pub fn contains(self, value: f64) -> bool {
        let (lo, hi) = self.bounds();
        (lo..=hi).contains(&value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Opacity => f.write_str("opacity"),
            Quantity::Alpha => f.write_str("alpha"),
        }
    }
}

/// Errors raised by the checked conversions and the snippet generator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Text that does not parse as a finite decimal number
    #[error("Invalid number: '{input}'")]
    InvalidInput { input: String },

    /// A value outside its scale, rejected by [`crate::RangePolicy::Reject`]
    #[error("{quantity} {value} is outside [{lo}, {hi}]", lo = .quantity.bounds().0, hi = .quantity.bounds().1)]
    OutOfRange { quantity: Quantity, value: f64 },
}

impl ConvertError {
    /// Create an InvalidInput error
    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    /// Short machine-readable tag for the error variant
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::InvalidInput { .. } => "invalid_input",
            ConvertError::OutOfRange { .. } => "out_of_range",
        }
    }
}
