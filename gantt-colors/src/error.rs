//! Error types for color parsing

use thiserror::Error;

/// Result type for strict color operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors that can occur while parsing a color string.
///
/// The engine's public operations never surface these; they recover by
/// substituting [`crate::color::FALLBACK_COLOR`]. Only the strict parsing
/// entry points (`Color::parse`, `FromStr`, `TryFrom<&str>`) return them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Empty or whitespace-only input
    #[error("empty color string")]
    Empty,

    /// Hex body is not 3 or 6 digits long
    #[error("invalid hex length {len} in color '{input}'")]
    InvalidLength { input: String, len: usize },

    /// Hex body contains a non-hex character
    #[error("invalid hex digits in color '{input}'")]
    InvalidHex { input: String },
}

impl ColorError {
    /// Create an invalid length error
    pub fn invalid_length(input: impl Into<String>, len: usize) -> Self {
        Self::InvalidLength {
            input: input.into(),
            len,
        }
    }

    /// Create an invalid hex error
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}
