//! Error type for color parsing

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing color strings.
///
/// Returned when a hex or decimal color string is malformed. Channel values
/// outside 0..=255 surface as [`ParseColorError::InvalidNumber`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Non-hex character in a hex color
    InvalidHexDigit(char),
    /// Invalid decimal channel value
    InvalidNumber(ParseIntError),
    /// Decimal form did not contain exactly three channels
    ChannelCount(usize),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidNumber(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHexDigit(c) => {
                write!(f, "invalid hex digit {:?}", c)
            }
            ParseColorError::InvalidNumber(err) => {
                write!(f, "invalid color channel: {}", err)
            }
            ParseColorError::ChannelCount(n) => {
                write!(f, "expected 3 color channels, found {}", n)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidNumber(err) => Some(err),
            _ => None,
        }
    }
}
