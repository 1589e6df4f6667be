//! Unified error system for the word-address codec
//!
//! Every failure the codec can report is a variant of [`CodecError`]. Errors are
//! plain values: parsing and validation fail fast at the first violated
//! constraint and never return partial results alongside an error.

use serde::{Deserialize, Serialize};

use crate::coordinate::{Axis, Hemisphere};

/// Usage hint attached to every notation error.
pub const FORMAT_HINT: &str = "Accepted formats: \
DD (e.g. 49.7977543° N 18.2567507° E), \
DM (e.g. 49° 47.865258' N 18° 15.405042' E), \
DMS (e.g. 49° 47' 51.92\" N 18° 15' 24.30\" E)";

/// Error type for all codec operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum CodecError {
    /// Input text matches none of the accepted coordinate notations
    #[error("Invalid coordinate format: '{input}'. {hint}")]
    InvalidFormat {
        /// The raw input as received
        input: String,
        /// Literal list of the accepted notations
        hint: String,
    },

    /// A parsed coordinate lies outside the legal range of its axis
    #[error("{axis} {value:.5} is out of range (0 to {max})")]
    OutOfRangeCoordinate {
        /// Axis the value belongs to
        axis: Axis,
        /// Offending degree value
        value: f64,
        /// Largest legal magnitude for the axis
        max: u16,
    },

    /// A hemisphere letter was given for the other axis
    #[error("{axis} hemisphere must be {} (got {hemisphere})", .axis.hemisphere_letters())]
    WrongHemisphere {
        /// Axis the value was supplied for
        axis: Axis,
        /// Hemisphere that does not belong to it
        hemisphere: Hemisphere,
    },

    /// Word address has the wrong number of words
    #[error("Expected {expected} words, found {found}")]
    WrongWordCount {
        /// Configured precision
        expected: usize,
        /// Number of whitespace-separated tokens in the input
        found: usize,
    },

    /// A word does not have exactly four characters
    #[error("Word '{token}' must be exactly 4 characters (found {length})")]
    WrongWordLength {
        /// The offending word
        token: String,
        /// Its character count
        length: usize,
    },

    /// A two-letter token is not in the syllable table
    #[error("Invalid syllable '{syllable}' in word '{token}'")]
    InvalidSyllable {
        /// The word containing the syllable
        token: String,
        /// The unknown syllable
        syllable: String,
    },

    /// Codec configuration failed to load or validate
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message describing the configuration problem
        message: String,
    },

    /// A structural invariant of the codec was violated
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the broken invariant
        message: String,
    },
}

impl CodecError {
    /// Create a notation error carrying the usage hint
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            hint: FORMAT_HINT.to_string(),
        }
    }

    /// Create an out-of-range error for `axis`
    pub fn out_of_range(axis: Axis, value: f64) -> Self {
        Self::OutOfRangeCoordinate {
            axis,
            value,
            max: axis.max_degrees(),
        }
    }

    /// Create a hemisphere/axis mismatch error
    pub fn wrong_hemisphere(axis: Axis, hemisphere: Hemisphere) -> Self {
        Self::WrongHemisphere { axis, hemisphere }
    }

    /// Create a word count error
    pub fn wrong_word_count(expected: usize, found: usize) -> Self {
        Self::WrongWordCount { expected, found }
    }

    /// Create a word length error
    pub fn wrong_word_length(token: impl Into<String>) -> Self {
        let token = token.into();
        let length = token.chars().count();
        Self::WrongWordLength { token, length }
    }

    /// Create an unknown syllable error
    pub fn invalid_syllable(token: impl Into<String>, syllable: impl Into<String>) -> Self {
        Self::InvalidSyllable {
            token: token.into(),
            syllable: syllable.into(),
        }
    }

    /// Create a configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "InvalidFormat",
            Self::OutOfRangeCoordinate { .. } => "OutOfRangeCoordinate",
            Self::WrongHemisphere { .. } => "WrongHemisphere",
            Self::WrongWordCount { .. } => "WrongWordCount",
            Self::WrongWordLength { .. } => "WrongWordLength",
            Self::InvalidSyllable { .. } => "InvalidSyllable",
            Self::InvalidConfig { .. } => "InvalidConfig",
            Self::Internal { .. } => "InternalError",
        }
    }
}

/// Standard Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        Self::invalid_config(format!("Failed to read config file: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_formats_five_decimals() {
        let err = CodecError::out_of_range(Axis::Latitude, 95.0);
        assert_eq!(err.to_string(), "Latitude 95.00000 is out of range (0 to 90)");
        assert_eq!(err.kind(), "OutOfRangeCoordinate");
    }

    #[test]
    fn test_invalid_format_carries_hint() {
        let err = CodecError::invalid_format("nonsense");
        let message = err.to_string();
        assert!(message.contains("'nonsense'"));
        assert!(message.contains("DD"));
        assert!(message.contains("DM"));
        assert!(message.contains("DMS"));
    }

    #[test]
    fn test_wrong_hemisphere_names_legal_letters() {
        let err = CodecError::wrong_hemisphere(Axis::Longitude, Hemisphere::N);
        assert_eq!(err.to_string(), "Longitude hemisphere must be E or W (got N)");
        assert_eq!(err.kind(), "WrongHemisphere");
    }

    #[test]
    fn test_word_length_counts_chars() {
        let err = CodecError::wrong_word_length("ROB");
        assert!(matches!(err, CodecError::WrongWordLength { length: 3, .. }));
    }

    #[test]
    fn test_io_error_becomes_config_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CodecError::from(io_err);
        assert!(matches!(err, CodecError::InvalidConfig { .. }));
    }
}
