//! Syllable table
//!
//! Fifty two-letter syllables, one per base-50 digit. The table is the
//! consonant-major product of `B D G K L M N R S T` and `A E I O U`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::errors::{CodecError, Result};

/// Number of syllables, and therefore the digit base
pub const SYLLABLE_COUNT: usize = 50;

/// Syllables indexed by digit value
pub const SYLLABLES: [&str; SYLLABLE_COUNT] = [
    "BA", "BE", "BI", "BO", "BU", //
    "DA", "DE", "DI", "DO", "DU", //
    "GA", "GE", "GI", "GO", "GU", //
    "KA", "KE", "KI", "KO", "KU", //
    "LA", "LE", "LI", "LO", "LU", //
    "MA", "ME", "MI", "MO", "MU", //
    "NA", "NE", "NI", "NO", "NU", //
    "RA", "RE", "RI", "RO", "RU", //
    "SA", "SE", "SI", "SO", "SU", //
    "TA", "TE", "TI", "TO", "TU", //
];

static DIGITS_BY_SYLLABLE: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    SYLLABLES
        .iter()
        .zip(0u8..)
        .map(|(syllable, digit)| (*syllable, digit))
        .collect()
});

/// Syllable for a digit, `None` when the digit is outside 0..50
pub fn syllable_for(digit: u8) -> Option<&'static str> {
    SYLLABLES.get(usize::from(digit)).copied()
}

/// Digit for a syllable, compared case-insensitively
pub fn digit_for(syllable: &str) -> Option<u8> {
    let upper = syllable.to_ascii_uppercase();
    DIGITS_BY_SYLLABLE.get(upper.as_str()).copied()
}

/// Map a digit array onto syllables.
///
/// Digits come from the positional codec, which clamps into the table range,
/// so a miss here is an internal error.
pub fn syllables_for(digits: &[u8]) -> Result<Vec<&'static str>> {
    digits
        .iter()
        .map(|&digit| {
            syllable_for(digit)
                .ok_or_else(|| CodecError::internal(format!("digit {digit} has no syllable")))
        })
        .collect()
}

/// Resolve a syllable taken from `token`, naming both on failure
pub fn digit_in_token(token: &str, syllable: &str) -> Result<u8> {
    digit_for(syllable).ok_or_else(|| CodecError::invalid_syllable(token, syllable))
}
