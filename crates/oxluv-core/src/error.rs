//! Error types for oxluv

use thiserror::Error;

/// Result type for oxluv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxluv operations
///
/// Numerically singular inputs (black, achromatic colors) are not errors;
/// the conversions define fixed outputs for them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input is not a `#rrggbb` hex string
    #[error("Invalid hex color {0:?}: expected #rrggbb")]
    InvalidHexFormat(String),
}

impl Error {
    pub(crate) fn invalid_hex(input: &str) -> Self {
        Self::InvalidHexFormat(input.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_input() {
        let err = Error::invalid_hex("#12345");
        assert_eq!(
            err.to_string(),
            "Invalid hex color \"#12345\": expected #rrggbb"
        );
    }
}
