//! Error types for format generation

use thiserror::Error;

/// Errors that can occur while generating a formatted value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `min_length > max_length`, or either bound negative
    #[error("Invalid length constraint: min {min}, max {max}")]
    InvalidLengthConstraint { min: i64, max: i64 },

    /// The requested window is too narrow for the smallest valid value of the format
    #[error("Unsatisfiable length for '{format}': window [{min}, {max}] cannot hold a value (shortest valid is {minimum})")]
    UnsatisfiableLength {
        format: &'static str,
        min: usize,
        max: usize,
        minimum: usize,
    },

    /// No generator is registered under the key
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}

impl FormatError {
    /// Whether a caller can recover by widening bounds or falling back to
    /// another generator.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsatisfiableLength { .. } | Self::UnknownFormat(_))
    }
}
