//! Word formatter and unformatter
//!
//! Word `i` of an address is the latitude syllable for digit `i` followed by
//! the longitude syllable for digit `i`.

use crate::errors::{CodecError, Result};
use crate::syllables::{digit_in_token, syllables_for};

/// Characters per word: two syllables of two letters
pub const WORD_LENGTH: usize = 4;

/// Latitude and longitude digit arrays recovered from a word address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAddress {
    /// Uppercased words in input order
    pub words: Vec<String>,
    /// Latitude syllables, one per word
    pub lat_syllables: Vec<String>,
    /// Longitude syllables, one per word
    pub lng_syllables: Vec<String>,
    /// Latitude digits
    pub lat_digits: Vec<u8>,
    /// Longitude digits
    pub lng_digits: Vec<u8>,
}

/// Interleave latitude and longitude digits into `precision` words
pub fn format_words(lat_digits: &[u8], lng_digits: &[u8], precision: usize) -> Result<Vec<String>> {
    if lat_digits.len() != precision || lng_digits.len() != precision {
        return Err(CodecError::internal(format!(
            "digit arrays must both have length {precision} (latitude {}, longitude {})",
            lat_digits.len(),
            lng_digits.len()
        )));
    }

    let lat = syllables_for(lat_digits)?;
    let lng = syllables_for(lng_digits)?;
    Ok(lat
        .iter()
        .zip(lng.iter())
        .map(|(lat, lng)| format!("{lat}{lng}"))
        .collect())
}

/// Split a word address into per-axis digits
pub fn split_words(input: &str, precision: usize) -> Result<SplitAddress> {
    let upper = input.to_ascii_uppercase();
    let words: Vec<String> = upper.split_whitespace().map(str::to_string).collect();
    if words.len() != precision {
        return Err(CodecError::wrong_word_count(precision, words.len()));
    }

    let mut split = SplitAddress {
        lat_syllables: Vec::with_capacity(precision),
        lng_syllables: Vec::with_capacity(precision),
        lat_digits: Vec::with_capacity(precision),
        lng_digits: Vec::with_capacity(precision),
        words: Vec::new(),
    };

    for word in &words {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(CodecError::wrong_word_length(word.as_str()));
        }
        let lat: String = chars[..2].iter().collect();
        let lng: String = chars[2..].iter().collect();

        split.lat_digits.push(digit_in_token(word, &lat)?);
        split.lng_digits.push(digit_in_token(word, &lng)?);
        split.lat_syllables.push(lat);
        split.lng_syllables.push(lng);
    }

    split.words = words;
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_format_reference_address() {
        let words = format_words(&[38, 41, 31, 38], &[2, 26, 39, 7], 4).unwrap();
        assert_eq!(words.join(" "), "ROBI SEME NERU RODI");
    }

    #[test]
    fn test_format_length_mismatch_is_internal() {
        let err = format_words(&[1, 2, 3], &[1, 2, 3, 4], 4).unwrap_err();
        assert_matches!(err, CodecError::Internal { .. });
    }

    #[test]
    fn test_split_lowercase_and_extra_whitespace() {
        let split = split_words("  robi\tseme  neru\nrodi ", 4).unwrap();
        assert_eq!(split.lat_digits, vec![38, 41, 31, 38]);
        assert_eq!(split.lng_digits, vec![2, 26, 39, 7]);
        assert_eq!(split.words[0], "ROBI");
        assert_eq!(split.lat_syllables[1], "SE");
    }

    #[test]
    fn test_split_wrong_count() {
        let err = split_words("ROBI SEME NER", 4).unwrap_err();
        assert_eq!(err, CodecError::wrong_word_count(4, 3));
    }

    #[test]
    fn test_split_wrong_length() {
        let err = split_words("ROBI SEME NER RODI", 4).unwrap_err();
        assert_matches!(err, CodecError::WrongWordLength { ref token, length: 3 } if token == "NER");
    }

    #[test]
    fn test_split_invalid_syllable() {
        let err = split_words("ROXI SEME NERU RODI", 4).unwrap_err();
        assert_eq!(err, CodecError::invalid_syllable("ROXI", "XI"));
    }

    #[test]
    fn test_split_keeps_non_ascii_letters_as_typed() {
        let err = split_words("ROßI SEME NERU RODI", 4).unwrap_err();
        assert_eq!(err, CodecError::invalid_syllable("ROßI", "ßI"));
        let err = split_words("roßi seme neru rodi", 4).unwrap_err();
        assert_eq!(err, CodecError::invalid_syllable("ROßI", "ßI"));
    }

    #[test]
    fn test_split_non_ascii_word_length_in_chars() {
        let err = split_words("ROBÍ SEME NERU RODI", 4).unwrap_err();
        assert_eq!(err, CodecError::invalid_syllable("ROBÍ", "BÍ"));
    }
}
