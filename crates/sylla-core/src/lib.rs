//! Sylla Core - coordinate word addresses
//!
//! A deterministic, reversible codec between latitude/longitude and a short
//! sequence of pronounceable four-letter words, meant for reading locations
//! aloud over radio or phone.
//!
//! # Pipeline
//!
//! - `notation`: DMS, DM and DD text into degree/hemisphere pairs
//! - `normalize`: pairs onto unified ranges (0–180, 0–360) and then `[0, 1]`
//! - `digits`: fractions into base-50 positional digits
//! - `syllables`: digits into two-letter syllables
//! - `words`: latitude and longitude syllables interleaved into words
//!
//! Decoding runs the same stages in reverse. Four words resolve a cell of
//! roughly 3 × 6 metres at the equator; each extra word divides it by 50.
//!
//! ```rust
//! use sylla_core::{coordinates_to_words, words_to_coordinates};
//!
//! let encoded = coordinates_to_words("49.7977543° N 18.2567507° E", None).unwrap();
//! assert_eq!(encoded.words, "ROBI SEME NERU RODI");
//!
//! let decoded = words_to_coordinates(&encoded.words, None).unwrap();
//! assert!(decoded.dd_string.starts_with("49.79773"));
//! ```

#![forbid(unsafe_code)]

/// Encode/decode facade and boundary response types
pub mod codec;

/// Codec configuration (TOML and environment)
pub mod config;

/// Latitude/longitude value types
pub mod coordinate;

/// Base-50 positional expansion
pub mod digits;

/// Unified error handling
pub mod errors;

/// Hemisphere-aware normalization onto `[0, 1]`
pub mod normalize;

/// Coordinate notation parser
pub mod notation;

/// Static syllable table
pub mod syllables;

/// Optional per-call diagnostics
pub mod trace;

/// Word formatting and splitting
pub mod words;

pub use codec::{
    coordinates_to_words, coordinates_to_words_from, coordinates_to_words_numeric,
    words_to_coordinates, DecodeResponse, DecodedAddress, EncodeResponse, EncodedAddress,
    WordCodec,
};
pub use config::CodecConfig;
pub use coordinate::{Axis, Coordinate, CoordinatePair, Hemisphere, MapCoordinates};
pub use errors::{CodecError, Result as CodecResult};
pub use notation::{parse_coordinates, CoordinateFormat, ParsedCoordinates};
pub use trace::ProcessingTrace;
